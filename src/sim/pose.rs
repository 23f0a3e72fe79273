//! The player's view-point: position, heading and held intents.
//!
//! * 0 rad = east (+X); angles grow towards +Y, which is *down* on screen.
//! * Collision is a single point test against the grid: the whole step
//!   either lands in open floor or is discarded.  There is no sliding and
//!   no swept test, so a step longer than a wall is thick can cut a corner.

use glam::Vec2;

use super::{InputCmd, Turn, Walk};
use crate::engine::ray::normalize_angle;
use crate::world::TileGrid;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pos: Vec2,
    angle: f32, // radians in [0, TAU)
    input: InputCmd,
    move_speed: f32, // world units / tick
    turn_speed: f32, // radians / tick
}

impl Pose {
    pub fn new(pos: Vec2, angle: f32, move_speed: f32, turn_speed: f32) -> Self {
        Self {
            pos,
            angle: normalize_angle(angle),
            input: InputCmd::default(),
            move_speed,
            turn_speed,
        }
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    /// Facing angle, normalised into `[0, 2π)`.
    #[inline]
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Unit vector along the heading.
    #[inline]
    pub fn forward(&self) -> Vec2 {
        Vec2::from_angle(self.angle)
    }

    #[inline]
    pub fn set_move_intent(&mut self, walk: Walk) {
        self.input.walk = walk;
    }

    #[inline]
    pub fn set_turn_intent(&mut self, turn: Turn) {
        self.input.turn = turn;
    }

    /// Advance one tick: turn first, then try the move along the new heading.
    ///
    /// Returns `false` when a requested move was blocked by a wall.
    #[must_use]
    pub fn update(&mut self, grid: &TileGrid) -> bool {
        if self.input.turn != Turn::Stop {
            self.angle = normalize_angle(self.angle + self.input.turn.sign() * self.turn_speed);
        }

        let step = self.input.walk.sign() * self.move_speed;
        if step == 0.0 {
            return true;
        }

        let candidate = self.pos + self.forward() * step;
        if grid.has_wall_at(candidate) {
            tracing::trace!(?candidate, "move blocked");
            return false;
        }
        self.pos = candidate;
        true
    }
}
