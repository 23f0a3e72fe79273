//! Axis-aligned tile map.
//!
//! * Row-major storage, `rows × cols` cells of `tile_size` world units.
//! * Immutable after construction – the ray caster and the movement code
//!   only ever borrow it.
//! * Closed world: anything outside `[0, W) × [0, H)` reads as a wall, so
//!   neither rays nor the player can leave the map.

use glam::Vec2;
use thiserror::Error;

/// Contents of one grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tile {
    Empty,
    Wall,
}

impl Tile {
    /// Map the classic `0 = empty / non-zero = wall` encoding.
    #[inline]
    pub fn from_code(code: u8) -> Self {
        if code == 0 { Tile::Empty } else { Tile::Wall }
    }

    #[inline]
    pub fn is_wall(self) -> bool {
        self == Tile::Wall
    }
}

/// Things that can go wrong while building a grid.
#[derive(Debug, Error, PartialEq)]
pub enum GridError {
    #[error("grid has no cells")]
    Empty,

    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("tile size must be finite and positive, got {0}")]
    BadTileSize(f32),
}

/// Rectangular tile map (immutable after load).
#[derive(Clone, Debug)]
pub struct TileGrid {
    cells: Vec<Tile>,
    rows: usize,
    cols: usize,
    tile_size: f32,
}

impl TileGrid {
    /// Build a grid from row slices of tile codes.
    pub fn new<R: AsRef<[u8]>>(rows: &[R], tile_size: f32) -> Result<Self, GridError> {
        if !tile_size.is_finite() || tile_size <= 0.0 {
            return Err(GridError::BadTileSize(tile_size));
        }
        let cols = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        if cols == 0 {
            return Err(GridError::Empty);
        }

        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(GridError::Ragged {
                    row: i,
                    expected: cols,
                    found: row.len(),
                });
            }
            cells.extend(row.iter().copied().map(Tile::from_code));
        }

        Ok(Self {
            cells,
            rows: rows.len(),
            cols,
            tile_size,
        })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    /// World extent `(cols * tile, rows * tile)`.
    #[inline]
    pub fn world_size(&self) -> Vec2 {
        Vec2::new(
            self.cols as f32 * self.tile_size,
            self.rows as f32 * self.tile_size,
        )
    }

    /// True while `p` lies on or inside the world rectangle.
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        let size = self.world_size();
        (0.0..=size.x).contains(&p.x) && (0.0..=size.y).contains(&p.y)
    }

    /// Tile at integer cell coordinates; out-of-range cells are walls.
    #[inline]
    pub fn tile(&self, col: i64, row: i64) -> Tile {
        if col < 0 || row < 0 || col >= self.cols as i64 || row >= self.rows as i64 {
            return Tile::Wall;
        }
        self.cells[row as usize * self.cols + col as usize]
    }

    #[inline]
    pub fn is_wall_cell(&self, col: i64, row: i64) -> bool {
        self.tile(col, row).is_wall()
    }

    /// Cell index along one axis, half-open: `[k*tile, (k+1)*tile)` → `k`.
    #[inline]
    pub fn cell_index(&self, coord: f32) -> i64 {
        (coord / self.tile_size).floor() as i64
    }

    /// "Is there a wall at world coordinate `p`?"
    ///
    /// NaN coordinates count as outside and therefore as walls.
    pub fn has_wall_at(&self, p: Vec2) -> bool {
        let size = self.world_size();
        if !(p.x >= 0.0 && p.x < size.x && p.y >= 0.0 && p.y < size.y) {
            return true;
        }
        self.is_wall_cell(self.cell_index(p.x), self.cell_index(p.y))
    }

    /// Upper bound on grid lines a single search can cross inside the world.
    #[inline]
    pub fn max_ray_steps(&self) -> usize {
        self.rows + self.cols + 2
    }

    /// Iterate `(col, row, tile)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Tile)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &t)| (i % self.cols, i / self.cols, t))
    }
}

/*======================================================================*/
/*                               Tests                                  */
/*======================================================================*/
