//! Ray distance → vertical wall strip.
//!
//! ```text
//! plane  = (screen_w / 2) / tan(fov / 2)
//! true_d = ray_d · cos(ray_angle − facing)      // fisheye removal
//! height = tile / true_d · plane
//! top    = screen_h / 2 − height / 2
//! ```

use super::ray::{HitFamily, Ray};
use crate::config::Config;

/// Two-level fake lighting picked from the hit family.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shade {
    /// Vertical-line hit, drawn lighter.
    Near,
    /// Horizontal-line hit, drawn darker.
    Far,
}

impl From<HitFamily> for Shade {
    fn from(family: HitFamily) -> Self {
        match family {
            HitFamily::Vertical => Shade::Near,
            HitFamily::Horizontal => Shade::Far,
        }
    }
}

/// One screen column band of the 3-D view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectedStrip {
    pub screen_column: i32,
    pub width: i32,
    pub top_y: f32,
    pub height: f32,
    pub shade: Shade,
}

/// Pinhole camera derived once from the configuration.
#[derive(Clone, Copy, Debug)]
pub struct Projector {
    tile_size: f32,
    plane_distance: f32,
    half_h: f32,
    strip_width: i32,
}

impl Projector {
    pub fn new(config: &Config, tile_size: f32) -> Self {
        Self {
            tile_size,
            plane_distance: Self::plane_distance_for(config.screen_width, config.fov),
            half_h: config.screen_height as f32 * 0.5,
            strip_width: config.strip_width as i32,
        }
    }

    /// Viewer-to-projection-plane distance for a screen `w` pixels wide.
    #[inline]
    pub fn plane_distance_for(w: usize, fov: f32) -> f32 {
        (w as f32) * 0.5 / (fov * 0.5).tan()
    }

    #[inline]
    pub fn plane_distance(&self) -> f32 {
        self.plane_distance
    }

    /// Distance measured along the view direction instead of along the ray.
    #[inline]
    pub fn corrected_distance(ray_distance: f32, ray_angle: f32, facing: f32) -> f32 {
        ray_distance * (ray_angle - facing).cos()
    }

    /// On-screen wall height for a corrected distance; 0 for a miss.
    #[inline]
    pub fn strip_height(&self, true_distance: f32) -> f32 {
        if true_distance.is_infinite() || true_distance.is_nan() {
            return 0.0;
        }
        if true_distance <= 0.0 {
            return f32::INFINITY;
        }
        self.tile_size / true_distance * self.plane_distance
    }

    /// Project ray `index` of the fan.
    pub fn project(&self, index: usize, ray: &Ray, facing: f32) -> ProjectedStrip {
        let screen_column = index as i32 * self.strip_width;
        let Some(hit) = ray.hit() else {
            return ProjectedStrip {
                screen_column,
                width: self.strip_width,
                top_y: self.half_h,
                height: 0.0,
                shade: Shade::Far,
            };
        };

        let true_distance = Self::corrected_distance(hit.distance, ray.angle(), facing);
        let height = self.strip_height(true_distance);
        ProjectedStrip {
            screen_column,
            width: self.strip_width,
            top_y: self.half_h - height * 0.5,
            height,
            shade: hit.family.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::TileGrid;
    use glam::Vec2;
    use std::f32::consts::FRAC_PI_2;

    fn projector() -> Projector {
        let cfg = Config {
            fov: FRAC_PI_2,
            screen_width: 640,
            screen_height: 400,
            ..Config::default()
        };
        Projector::new(&cfg, 64.0)
    }

    #[test]
    fn plane_distance_at_90_deg() {
        assert!((projector().plane_distance() - 320.0).abs() < 1e-3);
    }

    #[test]
    fn centre_ray_needs_no_correction() {
        for d in [0.5, 10.0, 1234.5] {
            assert_eq!(Projector::corrected_distance(d, 1.3, 1.3), d);
        }
        let off = Projector::corrected_distance(10.0, 1.3 + 0.5, 1.3);
        assert!(off < 10.0);
    }

    #[test]
    fn height_strictly_decreases_with_distance() {
        let p = projector();
        let mut last = f32::INFINITY;
        for d in [0.25, 1.0, 7.0, 64.0, 300.0, 1e4] {
            let h = p.strip_height(d);
            assert!(h < last, "{d}");
            last = h;
        }
        assert!((p.strip_height(64.0) - 320.0).abs() < 1e-3);
    }

    #[test]
    fn miss_projects_to_empty_strip() {
        let p = projector();
        assert_eq!(p.strip_height(f32::INFINITY), 0.0);

        // the cell is open but the closed world stops the ray at its east edge
        let grid = TileGrid::new(&[[0]], 64.0).unwrap();
        let ray = Ray::cast(&grid, Vec2::new(32.0, 32.0), 0.0);
        let strip = p.project(3, &ray, 0.0);
        assert!(strip.height > 0.0);

        let miss = p.project(3, &ray_miss(), 0.0);
        assert_eq!(miss.height, 0.0);
        assert_eq!(miss.screen_column, 3);
        assert_eq!(miss.top_y, 200.0);
    }

    fn ray_miss() -> Ray {
        // a ray that starts outside the world never finds a crossing inside it
        let grid = TileGrid::new(&[[0]], 64.0).unwrap();
        Ray::cast(&grid, Vec2::new(-500.0, 32.0), std::f32::consts::PI)
    }

    #[test]
    fn strip_is_centred_and_shaded_by_family() {
        let p = projector();
        let grid = TileGrid::new(&[[1, 1, 1], [1, 0, 1], [1, 1, 1]], 64.0).unwrap();
        let ray = Ray::cast(&grid, Vec2::new(96.0, 96.0), 0.0);
        let s = p.project(0, &ray, 0.0);
        assert_eq!(s.shade, Shade::Near);
        assert!((s.top_y + s.height * 0.5 - 200.0).abs() < 1e-3);
        // distance 32 → 640 px, taller than the screen
        assert!((s.height - 640.0).abs() < 1e-3);

        let ray = Ray::cast(&grid, Vec2::new(96.0, 96.0), FRAC_PI_2);
        assert_eq!(p.project(0, &ray, FRAC_PI_2).shade, Shade::Far);
    }
}
