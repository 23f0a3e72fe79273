use std::f32::consts::FRAC_PI_2;

use glam::Vec2;

use super::fan::{RayFan, build_fan};
use super::frame::{Frame, HEADING_LENGTH, MARKER_RADIUS, PoseMarker, RayLine, TileRect};
use super::projection::{ProjectedStrip, Projector};
use crate::{
    config::{Config, ConfigError},
    sim::{InputCmd, Pose, Turn, Walk},
    world::TileGrid,
};

/// Single owner of the per-session state: grid, pose and projection
/// constants.  One [`Engine::update`] followed by one [`Engine::frame`] is
/// a tick; every ray of a frame sees the same pose.
#[derive(Clone, Debug)]
pub struct Engine {
    config: Config,
    grid: TileGrid,
    pose: Pose,
    projector: Projector,
}

impl Engine {
    pub fn new(config: Config, grid: TileGrid, start: Vec2, angle: f32) -> Result<Self, ConfigError> {
        config.validate()?;
        if !angle.is_finite() {
            return Err(ConfigError::BadAngle(angle));
        }
        if grid.has_wall_at(start) {
            return Err(ConfigError::StartInWall(start.x, start.y));
        }

        let pose = Pose::new(start, angle, config.move_speed, config.turn_speed);
        let projector = Projector::new(&config, grid.tile_size());
        tracing::debug!(
            cols = grid.cols(),
            rows = grid.rows(),
            rays = config.num_rays(),
            plane = projector.plane_distance(),
            "engine ready"
        );

        Ok(Self {
            config,
            grid,
            pose,
            projector,
        })
    }

    /// Start in the middle of the world, facing +Y.
    pub fn with_default_start(config: Config, grid: TileGrid) -> Result<Self, ConfigError> {
        let centre = grid.world_size() * 0.5;
        Self::new(config, grid, centre, FRAC_PI_2)
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[inline]
    pub fn pose(&self) -> &Pose {
        &self.pose
    }

    /*──────────────────────── input ───────────────────────────*/

    pub fn set_move_intent(&mut self, walk: Walk) {
        self.pose.set_move_intent(walk);
    }

    pub fn set_turn_intent(&mut self, turn: Turn) {
        self.pose.set_turn_intent(turn);
    }

    pub fn apply(&mut self, cmd: InputCmd) {
        self.pose.set_move_intent(cmd.walk);
        self.pose.set_turn_intent(cmd.turn);
    }

    /*──────────────────────── tick ────────────────────────────*/

    /// Advance the pose by one tick.  Returns `false` when the requested
    /// step was rejected by a wall.
    pub fn update(&mut self) -> bool {
        let moved = self.pose.update(&self.grid);
        tracing::trace!(pos = ?self.pose.pos(), angle = self.pose.angle(), moved, "tick");
        moved
    }

    /// Sweep the field of view from the current pose.
    pub fn cast_fan(&self) -> RayFan {
        build_fan(
            &self.grid,
            self.pose.pos(),
            self.pose.angle(),
            self.config.fov,
            self.config.num_rays(),
        )
    }

    pub fn project(&self, fan: &RayFan) -> Vec<ProjectedStrip> {
        let facing = self.pose.angle();
        fan.iter()
            .enumerate()
            .map(|(i, ray)| self.projector.project(i, ray, facing))
            .collect()
    }

    /// Build every draw record for the current pose.
    pub fn frame(&self) -> Frame {
        let fan = self.cast_fan();
        let strips = self.project(&fan);

        let scale = self.config.minimap_scale;
        let tile = self.grid.tile_size();
        let tiles = self
            .grid
            .iter()
            .map(|(col, row, t)| TileRect {
                pos: Vec2::new(col as f32, row as f32) * tile * scale,
                size: tile * scale,
                wall: t.is_wall(),
            })
            .collect();

        let eye = self.pose.pos();
        let ray_lines = fan
            .iter()
            .filter_map(|r| r.hit())
            .map(|h| RayLine {
                from: eye * scale,
                to: h.point * scale,
            })
            .collect();

        let marker = PoseMarker {
            pos: eye * scale,
            radius: MARKER_RADIUS * scale,
            heading_end: (eye + self.pose.forward() * HEADING_LENGTH) * scale,
        };

        Frame {
            fan,
            strips,
            tiles,
            marker,
            ray_lines,
        }
    }

    /// `update` then `frame`.
    pub fn tick(&mut self) -> Frame {
        self.update();
        self.frame()
    }
}
