//! Block grid and map loader
//!
//! Converts a raw integer layout into positioned blocks. Geometry comes
//! from `GridGeometry` so cell size and spacing are testable parameters.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::state::{Block, BlockKind};
use crate::config::GridGeometry;

/// Row-major grid of blocks for the active map
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockGrid {
    rows: usize,
    cols: usize,
    blocks: Vec<Block>,
}

impl BlockGrid {
    /// Build a grid from a raw layout. Each cell becomes one block at
    /// `col * (w + spacing), row * (h + spacing) + y_offset`; cells with
    /// code 0 load as inactive. Input is assumed well-formed (fixed map
    /// data); ragged rows are a caller contract violation.
    pub fn load(layout: &[Vec<u8>], geom: &GridGeometry) -> Self {
        let rows = layout.len();
        let cols = layout.first().map(Vec::len).unwrap_or(0);
        let mut blocks = Vec::with_capacity(rows * cols);

        for (row, line) in layout.iter().enumerate() {
            debug_assert_eq!(line.len(), cols, "ragged map row {row}");
            for (col, &code) in line.iter().enumerate() {
                let (x, y) = geom.cell_origin(row, col);
                blocks.push(Block {
                    pos: IVec2::new(x, y),
                    kind: BlockKind::from_code(code),
                    active: code != 0,
                });
            }
        }

        Self { rows, cols, blocks }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Block at (row, col), row-major
    pub fn block(&self, row: usize, col: usize) -> &Block {
        &self.blocks[row * self.cols + col]
    }

    /// All blocks in grid order, including inactive ones
    pub fn iter(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter()
    }

    /// Mutable scan in grid order, used by the collision pass
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Block> {
        self.blocks.iter_mut()
    }

    /// Active blocks in grid order
    pub fn iter_active(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter().filter(|b| b.active)
    }

    /// True when every block is inactive (map complete)
    pub fn all_inactive(&self) -> bool {
        self.blocks.iter().all(|b| !b.active)
    }
}
