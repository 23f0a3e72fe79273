//! Grid raycaster: a tile map and a player pose in, per-tick ray hits,
//! projected wall strips and a top-down minimap out.
//!
//! ```text
//! Pose::update ─► TileGrid::has_wall_at      (movement gating)
//! build_fan    ─► Ray::cast ─► TileGrid       (one ray per strip)
//! Projector    ─► ProjectedStrip              (fisheye-corrected heights)
//! Frame        ─► DrawCall ─► Renderer        (host draws pixels)
//! ```

pub mod config;
pub mod engine;
pub mod renderer;
pub mod sim;
pub mod world;

pub use config::{Config, ConfigError};
pub use engine::Engine;
