//! Construction-time settings.
//!
//! Everything here is fixed for the lifetime of an [`Engine`](crate::engine::Engine);
//! there is no runtime reconfiguration.  [`Config::validate`] is run by the
//! engine constructor so a bad value fails at start-up rather than deep
//! inside the cast loop.

use std::f32::consts::PI;

use thiserror::Error;

use crate::world::GridError;
use crate::world::levels::{DEFAULT_LEVEL, DEFAULT_TILE_SIZE};

/// Everything the engine needs to know besides the map contents.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    /// Horizontal field of view (radians).
    pub fov: f32,
    /// Screen size in pixels.
    pub screen_width: usize,
    pub screen_height: usize,
    /// Width of one projected strip; `screen_width / strip_width` rays per frame.
    pub strip_width: usize,
    /// World units per tick.
    pub move_speed: f32,
    /// Radians per tick.
    pub turn_speed: f32,
    /// Top-down map size relative to the world (1.0 = one pixel per unit).
    pub minimap_scale: f32,
}

impl Default for Config {
    fn default() -> Self {
        let cols = DEFAULT_LEVEL[0].len();
        let rows = DEFAULT_LEVEL.len();
        Self {
            fov: 60_f32.to_radians(),
            screen_width: cols * DEFAULT_TILE_SIZE as usize,
            screen_height: rows * DEFAULT_TILE_SIZE as usize,
            strip_width: 1,
            move_speed: 2.0,
            turn_speed: 2_f32.to_radians(),
            minimap_scale: 0.25,
        }
    }
}

/// Rejected configuration values.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("field of view must lie in (0, π), got {0}")]
    BadFov(f32),

    #[error("screen size {0}x{1} has no pixels")]
    EmptyScreen(usize, usize),

    #[error("strip width {strip} must be in 1..={screen}")]
    BadStripWidth { strip: usize, screen: usize },

    #[error("{name} must be finite and non-negative, got {value}")]
    BadSpeed { name: &'static str, value: f32 },

    #[error("minimap scale must be finite and positive, got {0}")]
    BadMinimapScale(f32),

    #[error("start angle must be finite, got {0}")]
    BadAngle(f32),

    #[error("start position ({0}, {1}) is inside a wall")]
    StartInWall(f32, f32),

    #[error("invalid grid: {0}")]
    Grid(#[from] GridError),
}

impl Config {
    /// Check every field; the first offending one is reported.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.fov.is_finite() || self.fov <= 0.0 || self.fov >= PI {
            return Err(ConfigError::BadFov(self.fov));
        }
        if self.screen_width == 0 || self.screen_height == 0 {
            return Err(ConfigError::EmptyScreen(
                self.screen_width,
                self.screen_height,
            ));
        }
        if self.strip_width == 0 || self.strip_width > self.screen_width {
            return Err(ConfigError::BadStripWidth {
                strip: self.strip_width,
                screen: self.screen_width,
            });
        }
        for (name, value) in [
            ("move speed", self.move_speed),
            ("turn speed", self.turn_speed),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::BadSpeed { name, value });
            }
        }
        if !self.minimap_scale.is_finite() || self.minimap_scale <= 0.0 {
            return Err(ConfigError::BadMinimapScale(self.minimap_scale));
        }
        Ok(())
    }

    /// Rays per frame.
    #[inline]
    pub fn num_rays(&self) -> usize {
        self.screen_width / self.strip_width
    }
}
