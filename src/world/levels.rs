//! Built-in level layouts (`1` = wall, `0` = floor).

use super::grid::{GridError, TileGrid};

pub const DEFAULT_TILE_SIZE: f32 = 32.0;

/// The stock 15×11 map.
#[rustfmt::skip]
pub const DEFAULT_LEVEL: [[u8; 15]; 11] = [
    [1,1,1,1,1,1,1,1,1,1,1,1,1,1,1],
    [1,0,0,0,0,0,0,0,0,0,0,0,1,0,1],
    [1,1,0,0,0,1,1,1,1,1,1,1,1,0,1],
    [1,1,0,0,0,0,0,0,0,0,0,0,0,0,1],
    [1,1,0,0,0,0,0,0,0,0,0,0,0,0,1],
    [1,1,0,0,0,1,1,0,1,1,0,0,1,1,1],
    [1,1,0,0,1,1,1,0,1,1,1,1,1,1,1],
    [1,1,0,0,0,0,0,0,0,0,0,0,0,0,1],
    [1,1,0,0,0,0,0,0,0,0,0,0,0,0,1],
    [1,1,0,0,0,0,0,0,0,0,0,0,0,0,1],
    [1,1,1,1,1,1,1,1,1,1,1,1,1,1,1],
];

/// Load [`DEFAULT_LEVEL`] with the given tile edge length.
pub fn default_level(tile_size: f32) -> Result<TileGrid, GridError> {
    TileGrid::new(&DEFAULT_LEVEL, tile_size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn default_level_is_closed_and_centre_is_open() {
        let g = default_level(DEFAULT_TILE_SIZE).unwrap();
        assert_eq!((g.cols(), g.rows()), (15, 11));
        assert_eq!(g.world_size(), Vec2::new(480.0, 352.0));
        for (col, row, tile) in g.iter() {
            if col == 0 || row == 0 || col == 14 || row == 10 {
                assert!(tile.is_wall());
            }
        }
        // default spawn point
        assert!(!g.has_wall_at(g.world_size() * 0.5));
    }
}
