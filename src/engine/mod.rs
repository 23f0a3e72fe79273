#[allow(clippy::module_inception)]
mod engine;
mod fan;
mod frame;
mod projection;
pub mod ray;

pub use engine::Engine;
pub use fan::{RayFan, build_fan, ray_angle};
pub use frame::{Frame, PoseMarker, RayLine, TileRect};
pub use projection::{ProjectedStrip, Projector, Shade};
pub use ray::{Facing, HitFamily, Ray, WallHit, normalize_angle};
