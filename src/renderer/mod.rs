//! Rendering abstraction layer.
//!
//! *The engine never touches a pixel buffer directly.*
//! Each tick it produces a [`Frame`](crate::engine::Frame), which flattens
//! into a list of [`DrawCall`]s (back-to-front) handed to a type that
//! implements [`Renderer`].
//!
//! * Back-ends only need rectangles, circles and lines.
//! * A helper blanket-impl [`RendererExt`] adds `draw_frame` so call-sites
//!   stay short.

use glam::Vec2;

/// Pixel format of the software frame-buffer (0x00RRGGBB).
pub type Rgba = u32;

/// Fixed colours shared by the frame builder and the back-ends.
pub mod palette {
    use super::Rgba;

    pub const CEILING: Rgba = 0x00_303040;
    pub const FLOOR: Rgba = 0x00_505050;
    pub const WALL_NEAR: Rgba = 0x00_FFFFFF;
    pub const WALL_FAR: Rgba = 0x00_B4B4B4;
    pub const MAP_WALL: Rgba = 0x00_222222;
    pub const MAP_FLOOR: Rgba = 0x00_FFFFFF;
    pub const MAP_GRID: Rgba = 0x00_222222;
    pub const PLAYER: Rgba = 0x00_FF0000;
    pub const RAY: Rgba = 0x00_FF8080;
}

/// One primitive, in screen pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCall {
    /// Axis-aligned filled rectangle with an optional 1-px outline.
    Rect {
        pos: Vec2,
        size: Vec2,
        fill: Rgba,
        stroke: Option<Rgba>,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Rgba,
    },
    Line {
        from: Vec2,
        to: Vec2,
        color: Rgba,
    },
}

/// A renderer that owns an internal scratch buffer for the whole frame.
///
/// `end_frame` hands the finished buffer to a user-supplied closure.
/// Software callers typically forward it to their window-manager.
pub trait Renderer {
    /// (Re)allocate internal scratch for the requested resolution and clear it.
    fn begin_frame(&mut self, width: usize, height: usize);

    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Rgba);

    fn stroke_rect(&mut self, pos: Vec2, size: Vec2, color: Rgba);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);

    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Rgba);

    /// Finish the frame and **loan** the finished buffer to `submit`.
    ///
    /// `submit(&[Rgba], w, h)` is run exactly once per frame.
    fn end_frame<F>(&mut self, submit: F)
    where
        F: FnOnce(&[Rgba], usize, usize);
}

/// Convenience blanket-impl with a one-liner `draw_frame` adaptor.
pub trait RendererExt: Renderer {
    fn draw(&mut self, call: &DrawCall) {
        match *call {
            DrawCall::Rect {
                pos,
                size,
                fill,
                stroke,
            } => {
                self.fill_rect(pos, size, fill);
                if let Some(c) = stroke {
                    self.stroke_rect(pos, size, c);
                }
            }
            DrawCall::Circle {
                center,
                radius,
                color,
            } => self.fill_circle(center, radius, color),
            DrawCall::Line { from, to, color } => self.draw_line(from, to, color),
        }
    }

    fn draw_frame<F>(&mut self, width: usize, height: usize, calls: &[DrawCall], submit: F)
    where
        F: FnOnce(&[Rgba], usize, usize),
    {
        self.begin_frame(width, height);
        for c in calls {
            self.draw(c);
        }
        self.end_frame(submit);
    }
}
impl<T: Renderer + ?Sized> RendererExt for T {}

pub mod software;
