//! Single-ray intersection search against the tile grid.
//!
//! Two independent searches run per ray:
//!
//! * **horizontal** – visits every line `y = k·tile` the ray crosses,
//! * **vertical**   – visits every line `x = k·tile` the ray crosses.
//!
//! Each yields an optional candidate; the nearer one wins.  A crossing is
//! classified by the cell the ray *enters*: crossing `y = k·tile` while
//! moving up enters row `k-1`, moving down enters row `k` (columns
//! likewise).  Cells outside the grid read as walls.

use std::cmp::Ordering;
use std::f32::consts::{FRAC_PI_2, PI, TAU};

use glam::Vec2;

use crate::world::TileGrid;

/// Rays closer than this to an axis never cross the parallel family.
const AXIS_EPS: f32 = 1e-6;

/// Wrap any finite angle into `[0, 2π)`.
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    let a = angle.rem_euclid(TAU);
    // rem_euclid may round up to exactly TAU for tiny negative inputs
    if a >= TAU { 0.0 } else { a }
}

/// Which family of grid lines the ray struck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HitFamily {
    /// Crossed a line of constant y (north/south wall face).
    Horizontal,
    /// Crossed a line of constant x (east/west wall face).
    Vertical,
}

/// Quadrant classification of a normalised angle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Facing {
    pub down: bool,
    pub right: bool,
}

impl Facing {
    pub fn of(angle: f32) -> Self {
        Self {
            down: angle > 0.0 && angle < PI,
            right: angle < FRAC_PI_2 || angle > 3.0 * FRAC_PI_2,
        }
    }
}

/// The winning intersection of one ray.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WallHit {
    pub point: Vec2,
    pub distance: f32,
    pub family: HitFamily,
}

/// Result of one search: a hit at some distance, or nothing.
///
/// Ordered as the extended reals with `Miss` as +∞, so "nearest wins" is
/// just `min`.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Reach {
    Hit(WallHit),
    Miss,
}

impl Reach {
    fn cmp_distance(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Reach::Hit(a), Reach::Hit(b)) => a.distance.total_cmp(&b.distance),
            (Reach::Hit(_), Reach::Miss) => Ordering::Less,
            (Reach::Miss, Reach::Hit(_)) => Ordering::Greater,
            (Reach::Miss, Reach::Miss) => Ordering::Equal,
        }
    }

    /// Nearer of a horizontal and a vertical candidate; ties go vertical.
    fn nearer(horz: Self, vert: Self) -> Self {
        if horz.cmp_distance(&vert) == Ordering::Less {
            horz
        } else {
            vert
        }
    }

    fn into_hit(self) -> Option<WallHit> {
        match self {
            Reach::Hit(h) => Some(h),
            Reach::Miss => None,
        }
    }
}

/// One cast ray, owned by the frame that produced it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    angle: f32,
    hit: Option<WallHit>,
}

impl Ray {
    /// Cast from `origin` along `angle` (any real value; normalised here).
    pub fn cast(grid: &TileGrid, origin: Vec2, angle: f32) -> Self {
        let angle = normalize_angle(angle);
        let facing = Facing::of(angle);
        let horz = horizontal_search(grid, origin, angle, facing);
        let vert = vertical_search(grid, origin, angle, facing);
        Self {
            angle,
            hit: Reach::nearer(horz, vert).into_hit(),
        }
    }

    #[inline]
    pub fn angle(&self) -> f32 {
        self.angle
    }

    #[inline]
    pub fn hit(&self) -> Option<WallHit> {
        self.hit
    }

    /// Distance to the wall, `+∞` when nothing was struck.
    #[inline]
    pub fn distance(&self) -> f32 {
        self.hit.map_or(f32::INFINITY, |h| h.distance)
    }

    #[inline]
    pub fn family(&self) -> Option<HitFamily> {
        self.hit.map(|h| h.family)
    }
}

/*──────────────────────── the two searches ───────────────────────────*/

fn horizontal_search(grid: &TileGrid, origin: Vec2, angle: f32, facing: Facing) -> Reach {
    let (sin, cos) = angle.sin_cos();
    if sin.abs() < AXIS_EPS {
        return Reach::Miss;
    }
    let tile = grid.tile_size();
    let tan = sin / cos;

    // first line in the ray's vertical direction
    let mut line = grid.cell_index(origin.y);
    if facing.down {
        line += 1;
    }
    let y0 = line as f32 * tile;
    let x0 = origin.x + (y0 - origin.y) / tan;

    let step_y = if facing.down { tile } else { -tile };
    let step_x = (tile / tan).abs().copysign(if facing.right { 1.0 } else { -1.0 });
    let line_step: i64 = if facing.down { 1 } else { -1 };

    let mut touch = Vec2::new(x0, y0);
    for _ in 0..grid.max_ray_steps() {
        if !grid.contains(touch) {
            return Reach::Miss;
        }
        let row = if facing.down { line } else { line - 1 };
        if grid.is_wall_cell(grid.cell_index(touch.x), row) {
            return Reach::Hit(WallHit {
                point: touch,
                distance: origin.distance(touch),
                family: HitFamily::Horizontal,
            });
        }
        touch += Vec2::new(step_x, step_y);
        line += line_step;
    }

    tracing::warn!(angle, ?origin, "horizontal search hit its step cap");
    Reach::Miss
}

fn vertical_search(grid: &TileGrid, origin: Vec2, angle: f32, facing: Facing) -> Reach {
    let (sin, cos) = angle.sin_cos();
    if cos.abs() < AXIS_EPS {
        return Reach::Miss;
    }
    let tile = grid.tile_size();
    let tan = sin / cos;

    let mut line = grid.cell_index(origin.x);
    if facing.right {
        line += 1;
    }
    let x0 = line as f32 * tile;
    let y0 = origin.y + (x0 - origin.x) * tan;

    let step_x = if facing.right { tile } else { -tile };
    let step_y = (tile * tan).abs().copysign(if facing.down { 1.0 } else { -1.0 });
    let line_step: i64 = if facing.right { 1 } else { -1 };

    let mut touch = Vec2::new(x0, y0);
    for _ in 0..grid.max_ray_steps() {
        if !grid.contains(touch) {
            return Reach::Miss;
        }
        let col = if facing.right { line } else { line - 1 };
        if grid.is_wall_cell(col, grid.cell_index(touch.y)) {
            return Reach::Hit(WallHit {
                point: touch,
                distance: origin.distance(touch),
                family: HitFamily::Vertical,
            });
        }
        touch += Vec2::new(step_x, step_y);
        line += line_step;
    }

    tracing::warn!(angle, ?origin, "vertical search hit its step cap");
    Reach::Miss
}

/*======================================================================*/
/*                               Tests                                  */
/*======================================================================*/
