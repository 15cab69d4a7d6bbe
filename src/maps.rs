//! Built-in map layouts
//!
//! The default map repository: fixed 10x4 grids of block type codes,
//! cycled infinitely by the simulation. Code 0 is an empty cell; codes
//! 1..=9 select a block kind (see [`crate::sim::BlockKind::from_code`]).

/// One map as owned row-major data. Dimensions are carried by the data
/// itself so custom repositories can use any grid size.
pub type MapLayout = Vec<Vec<u8>>;

/// Columns in the built-in layouts
pub const MAP_COLS: usize = 10;
/// Rows in the built-in layouts
pub const MAP_ROWS: usize = 4;

type RawLayout = [[u8; MAP_COLS]; MAP_ROWS];

static RAW_MAPS: [RawLayout; 8] = [
    // Full wall, softest rows at the bottom
    [
        [4, 4, 4, 4, 4, 4, 4, 4, 4, 4],
        [3, 3, 3, 3, 3, 3, 3, 3, 3, 3],
        [2, 2, 2, 2, 2, 2, 2, 2, 2, 2],
        [1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    ],
    // Checkerboard
    [
        [2, 0, 2, 0, 2, 0, 2, 0, 2, 0],
        [0, 3, 0, 3, 0, 3, 0, 3, 0, 3],
        [2, 0, 2, 0, 2, 0, 2, 0, 2, 0],
        [0, 1, 0, 1, 0, 1, 0, 1, 0, 1],
    ],
    // Side towers
    [
        [4, 4, 0, 0, 0, 0, 0, 0, 4, 4],
        [3, 3, 0, 1, 1, 1, 1, 0, 3, 3],
        [3, 3, 0, 1, 1, 1, 1, 0, 3, 3],
        [4, 4, 0, 0, 0, 0, 0, 0, 4, 4],
    ],
    // Diamond
    [
        [0, 0, 0, 1, 2, 2, 1, 0, 0, 0],
        [0, 1, 2, 3, 4, 4, 3, 2, 1, 0],
        [0, 1, 2, 3, 4, 4, 3, 2, 1, 0],
        [0, 0, 0, 1, 2, 2, 1, 0, 0, 0],
    ],
    // Stripes with hard caps
    [
        [5, 5, 5, 5, 5, 5, 5, 5, 5, 5],
        [0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        [6, 6, 6, 6, 6, 6, 6, 6, 6, 6],
        [4, 0, 4, 0, 4, 0, 4, 0, 4, 0],
    ],
    // Arrow
    [
        [0, 0, 0, 0, 7, 7, 0, 0, 0, 0],
        [0, 0, 0, 7, 8, 8, 7, 0, 0, 0],
        [0, 0, 7, 8, 9, 9, 8, 7, 0, 0],
        [0, 7, 8, 9, 3, 3, 9, 8, 7, 0],
    ],
    // Gate
    [
        [4, 0, 0, 4, 0, 0, 4, 0, 0, 4],
        [4, 0, 0, 4, 0, 0, 4, 0, 0, 4],
        [4, 0, 0, 4, 0, 0, 4, 0, 0, 4],
        [2, 2, 2, 2, 2, 2, 2, 2, 2, 2],
    ],
    // Sparse finale, high-value core
    [
        [0, 0, 0, 0, 4, 4, 0, 0, 0, 0],
        [0, 0, 0, 3, 0, 0, 3, 0, 0, 0],
        [0, 0, 2, 0, 0, 0, 0, 2, 0, 0],
        [0, 1, 0, 0, 0, 0, 0, 0, 1, 0],
    ],
];

/// The built-in map set, in play order
pub fn builtin() -> Vec<MapLayout> {
    RAW_MAPS
        .iter()
        .map(|raw| raw.iter().map(|row| row.to_vec()).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_maps_are_well_formed() {
        let maps = builtin();
        assert!(!maps.is_empty());
        for (i, map) in maps.iter().enumerate() {
            assert_eq!(map.len(), MAP_ROWS, "map {i} row count");
            for row in map {
                assert_eq!(row.len(), MAP_COLS, "map {i} column count");
                assert!(row.iter().all(|&code| code <= 9), "map {i} codes");
            }
            // An all-empty map would clear on its first tick
            let cells: usize = map
                .iter()
                .map(|row| row.iter().filter(|&&c| c != 0).count())
                .sum();
            assert!(cells > 0, "map {i} has no blocks");
        }
    }
}
