//! Field-of-view sweep: one [`Ray`] per screen strip, left to right.

use glam::Vec2;

use super::ray::Ray;
use crate::world::TileGrid;

/// The rays of one frame, ordered by increasing angle (left to right).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RayFan {
    rays: Vec<Ray>,
}

impl RayFan {
    #[inline]
    pub fn rays(&self) -> &[Ray] {
        &self.rays
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rays.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rays.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Ray> {
        self.rays.iter()
    }
}

impl<'a> IntoIterator for &'a RayFan {
    type Item = &'a Ray;
    type IntoIter = std::slice::Iter<'a, Ray>;

    fn into_iter(self) -> Self::IntoIter {
        self.rays.iter()
    }
}

/// Un-normalised angle of ray `i` out of `n` across `fov` centred on `facing`.
///
/// Ray `n / 2` looks straight along `facing`.
#[inline]
pub fn ray_angle(facing: f32, fov: f32, i: usize, n: usize) -> f32 {
    facing - fov * 0.5 + fov * (i as f32 / n as f32)
}

/// Cast `n` rays from `origin`.  The grid and origin are read-only for the
/// whole sweep, so the rays are independent of one another.
pub fn build_fan(grid: &TileGrid, origin: Vec2, facing: f32, fov: f32, n: usize) -> RayFan {
    #[cfg(feature = "parallel")]
    let rays = {
        use rayon::prelude::*;
        (0..n)
            .into_par_iter()
            .map(|i| Ray::cast(grid, origin, ray_angle(facing, fov, i, n)))
            .collect()
    };

    #[cfg(not(feature = "parallel"))]
    let rays = (0..n)
        .map(|i| Ray::cast(grid, origin, ray_angle(facing, fov, i, n)))
        .collect();

    RayFan { rays }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::levels::{DEFAULT_TILE_SIZE, default_level};

    #[test]
    fn fan_has_n_rays_in_increasing_angle() {
        let g = default_level(DEFAULT_TILE_SIZE).unwrap();
        let fov = 60_f32.to_radians();
        let n = 64;
        let facing = 0.2; // sweep wraps below zero on the left edge
        let fan = build_fan(&g, g.world_size() * 0.5, facing, fov, n);
        assert_eq!(fan.len(), n);

        let raw: Vec<f32> = (0..n).map(|i| ray_angle(facing, fov, i, n)).collect();
        assert!(raw.windows(2).all(|w| w[1] > w[0]));
        assert!((raw[0] - (facing - fov / 2.0)).abs() < 1e-6);
        assert!((raw[n / 2] - facing).abs() < 1e-6);

        for (ray, a) in fan.iter().zip(&raw) {
            let d = (ray.angle() - crate::engine::ray::normalize_angle(*a)).abs();
            assert!(d < 1e-5);
            assert!(ray.distance().is_finite());
        }
    }

    #[test]
    fn fan_matches_ray_by_ray_casting() {
        let g = default_level(DEFAULT_TILE_SIZE).unwrap();
        let origin = g.world_size() * 0.5;
        let (facing, fov, n) = (0.3, 60_f32.to_radians(), 480);

        let fan = build_fan(&g, origin, facing, fov, n);
        let expected: Vec<Ray> = (0..n)
            .map(|i| Ray::cast(&g, origin, ray_angle(facing, fov, i, n)))
            .collect();
        assert_eq!(fan.rays(), expected.as_slice());
    }

    #[test]
    fn zero_rays_is_an_empty_fan() {
        let g = default_level(DEFAULT_TILE_SIZE).unwrap();
        assert!(build_fan(&g, Vec2::splat(48.0), 0.0, 1.0, 0).is_empty());
    }
}
