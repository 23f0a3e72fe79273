//! Everything the host needs to draw one tick.
//!
//! Positions in the minimap records are already multiplied by the
//! minimap scale; strip records are in 3-D view pixels.

use glam::Vec2;

use super::fan::RayFan;
use super::projection::{ProjectedStrip, Shade};
use crate::renderer::{DrawCall, palette};

/// Pose marker radius and heading-line length, in world units.
pub const MARKER_RADIUS: f32 = 3.0;
pub const HEADING_LENGTH: f32 = 20.0;

/// One cell of the top-down map.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TileRect {
    pub pos: Vec2,
    pub size: f32,
    pub wall: bool,
}

/// Player dot plus heading line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PoseMarker {
    pub pos: Vec2,
    pub radius: f32,
    pub heading_end: Vec2,
}

/// Minimap overlay line from the pose to one ray's hit point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayLine {
    pub from: Vec2,
    pub to: Vec2,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub fan: RayFan,
    pub strips: Vec<ProjectedStrip>,
    pub tiles: Vec<TileRect>,
    pub marker: PoseMarker,
    pub ray_lines: Vec<RayLine>,
}

impl Frame {
    /// Flatten into primitives: 3-D strips first, minimap on top.
    pub fn draw_calls(&self) -> Vec<DrawCall> {
        let mut calls =
            Vec::with_capacity(self.strips.len() + self.tiles.len() + self.ray_lines.len() + 2);

        calls.extend(
            self.strips
                .iter()
                .filter(|s| s.height > 0.0)
                .map(|s| DrawCall::Rect {
                    pos: Vec2::new(s.screen_column as f32, s.top_y),
                    size: Vec2::new(s.width as f32, s.height),
                    fill: match s.shade {
                        Shade::Near => palette::WALL_NEAR,
                        Shade::Far => palette::WALL_FAR,
                    },
                    stroke: None,
                }),
        );

        calls.extend(self.tiles.iter().map(|t| DrawCall::Rect {
            pos: t.pos,
            size: Vec2::splat(t.size),
            fill: if t.wall {
                palette::MAP_WALL
            } else {
                palette::MAP_FLOOR
            },
            stroke: Some(palette::MAP_GRID),
        }));

        calls.extend(self.ray_lines.iter().map(|l| DrawCall::Line {
            from: l.from,
            to: l.to,
            color: palette::RAY,
        }));

        calls.push(DrawCall::Circle {
            center: self.marker.pos,
            radius: self.marker.radius,
            color: palette::PLAYER,
        });
        calls.push(DrawCall::Line {
            from: self.marker.pos,
            to: self.marker.heading_end,
            color: palette::PLAYER,
        });
        calls
    }
}
