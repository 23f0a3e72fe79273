mod grid;
pub mod levels;

pub use grid::{GridError, Tile, TileGrid};
