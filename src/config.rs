//! Data-driven geometry and rules
//!
//! Everything the simulation needs to know about screen, paddle, ball, and
//! block dimensions lives here so grid geometry is a testable parameter
//! rather than a compile-time constant. Defaults match `consts`.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Block grid layout parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridGeometry {
    /// Block width in pixels
    pub block_width: i32,
    /// Block height in pixels
    pub block_height: i32,
    /// Gap between adjacent blocks, both axes
    pub spacing: i32,
    /// Pixel offset of the first row below the top edge
    pub y_offset: i32,
}

impl Default for GridGeometry {
    fn default() -> Self {
        Self {
            block_width: BLOCK_WIDTH,
            block_height: BLOCK_HEIGHT,
            spacing: BLOCK_SPACING,
            y_offset: TOP_MARGIN,
        }
    }
}

impl GridGeometry {
    /// Pixel position of the block at (row, col)
    pub fn cell_origin(&self, row: usize, col: usize) -> (i32, i32) {
        (
            col as i32 * (self.block_width + self.spacing),
            row as i32 * (self.block_height + self.spacing) + self.y_offset,
        )
    }
}

/// Complete simulation configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimConfig {
    pub screen_width: i32,
    pub screen_height: i32,
    pub paddle_width: i32,
    pub paddle_height: i32,
    /// Gap between the paddle underside and the bottom edge
    pub paddle_bottom_gap: i32,
    pub ball_size: i32,
    /// Ball reflects off this line below the true top edge (HUD margin)
    pub top_margin: i32,
    /// Lives at round start
    pub max_lives: u8,
    /// Ticks a parked ball waits before launching
    pub restart_delay_ticks: u64,
    pub grid: GridGeometry,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_bottom_gap: PADDLE_BOTTOM_GAP,
            ball_size: BALL_SIZE,
            top_margin: TOP_MARGIN,
            max_lives: MAX_LIVES,
            restart_delay_ticks: RESTART_DELAY_TICKS,
            grid: GridGeometry::default(),
        }
    }
}

impl SimConfig {
    /// Fixed paddle Y for the round
    pub fn paddle_y(&self) -> i32 {
        self.screen_height - self.paddle_height - self.paddle_bottom_gap
    }

    /// Rightmost legal paddle X
    pub fn paddle_max_x(&self) -> i32 {
        self.screen_width - self.paddle_width
    }

    /// Clamp out-of-range values from hand-edited config files. A round
    /// needs at least one life or the first ball loss has no legal state.
    pub fn sanitize(mut self) -> Self {
        if self.max_lives == 0 {
            log::warn!("max_lives 0 is not playable; clamped to 1");
            self.max_lives = 1;
        }
        self
    }

    /// Load config from a JSON file, falling back to defaults
    pub fn load(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str::<SimConfig>(&json) {
                Ok(config) => {
                    log::info!("Loaded config from {}", path.display());
                    config.sanitize()
                }
                Err(e) => {
                    log::warn!("Bad config in {}: {e}; using defaults", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("No config at {}; using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Save config as JSON; failures are logged, not propagated
    pub fn save(&self, path: &std::path::Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(path, json) {
                    log::warn!("Failed to save config to {}: {e}", path.display());
                } else {
                    log::info!("Config saved to {}", path.display());
                }
            }
            Err(e) => log::warn!("Failed to serialize config: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paddle_y() {
        let config = SimConfig::default();
        // 64 - 5 - 5
        assert_eq!(config.paddle_y(), 54);
    }

    #[test]
    fn test_cell_origin() {
        let geom = GridGeometry::default();
        assert_eq!(geom.cell_origin(0, 0), (0, 10));
        // col 3: 3 * (12 + 1) = 39; row 2: 2 * (6 + 1) + 10 = 24
        assert_eq!(geom.cell_origin(2, 3), (39, 24));
    }

    #[test]
    fn test_sanitize_clamps_zero_lives() {
        let config = SimConfig {
            max_lives: 0,
            ..Default::default()
        };
        assert_eq!(config.sanitize().max_lives, 1);

        // In-range values pass through untouched
        let config = SimConfig::default().sanitize();
        assert_eq!(config, SimConfig::default());
    }

    #[test]
    fn test_config_json_round_trip() {
        let config = SimConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: SimConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
