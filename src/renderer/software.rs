//! ---------------------------------------------------------------------------
//! Software (CPU) back-end
//!
//! * Fills a `Vec<u32>` frame-buffer in **0x00RRGGBB** format.
//! * Everything is clipped to the buffer, so callers may pass primitives
//!   that poke off-screen (e.g. strips taller than the view).
//! ---------------------------------------------------------------------------

use glam::Vec2;

use crate::renderer::{Renderer, Rgba, palette};

/*───────────────────────────────────────────────────────────────────────*/
/*                              Backend                                 */
/*───────────────────────────────────────────────────────────────────────*/

#[derive(Default)]
pub struct Software {
    scratch: Vec<Rgba>,
    width: usize,
    height: usize,
}

impl Software {
    #[inline]
    fn put(&mut self, x: i32, y: i32, col: Rgba) {
        if (0..self.width as i32).contains(&x) && (0..self.height as i32).contains(&y) {
            self.scratch[y as usize * self.width + x as usize] = col;
        }
    }

    /// Clamp a float span `[a, a+len)` to `0..limit` as integer pixels.
    #[inline]
    fn span(a: f32, len: f32, limit: usize) -> Option<(usize, usize)> {
        let lo = a.max(0.0);
        let hi = (a + len).min(limit as f32);
        if !(lo < hi) {
            return None;
        }
        Some((lo as usize, (hi.ceil() as usize).min(limit)))
    }
}

/*──────────────────────── Renderer trait impl ────────────────────────*/
impl Renderer for Software {
    fn begin_frame(&mut self, w: usize, h: usize) {
        // (re)allocate if resolution changed
        if w != self.width || h != self.height {
            self.width = w;
            self.height = h;
            self.scratch.resize(w * h, 0);
        }

        /* ceiling above the midline, floor below */
        let mid = (h / 2) * w;
        self.scratch[..mid].fill(palette::CEILING);
        self.scratch[mid..].fill(palette::FLOOR);
    }

    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Rgba) {
        let (Some((x0, x1)), Some((y0, y1))) = (
            Self::span(pos.x, size.x, self.width),
            Self::span(pos.y, size.y, self.height),
        ) else {
            return;
        };
        for y in y0..y1 {
            let row = y * self.width;
            self.scratch[row + x0..row + x1].fill(color);
        }
    }

    fn stroke_rect(&mut self, pos: Vec2, size: Vec2, color: Rgba) {
        let a = pos;
        let b = pos + Vec2::new(size.x - 1.0, 0.0);
        let c = pos + size - Vec2::ONE;
        let d = pos + Vec2::new(0.0, size.y - 1.0);
        self.draw_line(a, b, color);
        self.draw_line(b, c, color);
        self.draw_line(c, d, color);
        self.draw_line(d, a, color);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        let r = radius.max(0.0);
        let (x0, x1) = ((center.x - r).floor() as i32, (center.x + r).ceil() as i32);
        let (y0, y1) = ((center.y - r).floor() as i32, (center.y + r).ceil() as i32);
        let r2 = r * r;
        for y in y0..=y1 {
            for x in x0..=x1 {
                let d = Vec2::new(x as f32 + 0.5, y as f32 + 0.5) - center;
                if d.length_squared() <= r2 {
                    self.put(x, y, color);
                }
            }
        }
    }

    /// Integer Bresenham line-drawing algorithm.
    fn draw_line(&mut self, from: Vec2, to: Vec2, col: Rgba) {
        if !from.is_finite() || !to.is_finite() {
            return;
        }
        let (mut x0, mut y0) = (from.x as i32, from.y as i32);
        let (x1, y1) = (to.x as i32, to.y as i32);
        let dx = (x1 - x0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let dy = -(y1 - y0).abs();
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            self.put(x0, y0, col);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    fn end_frame<F>(&mut self, submit: F)
    where
        F: FnOnce(&[Rgba], usize, usize),
    {
        submit(&self.scratch, self.width, self.height);
    }
}

/*──────────────────────────────── Tests ───────────────────────────────*/
#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCall, RendererExt};

    const BLUE: Rgba = 0x00_0000FF;

    fn render(calls: &[DrawCall]) -> Vec<Rgba> {
        let mut sw = Software::default();
        let mut out = Vec::new();
        sw.draw_frame(8, 8, calls, |fb, w, h| {
            assert_eq!((w, h), (8, 8));
            out = fb.to_vec();
        });
        out
    }

    #[test]
    fn clear_splits_ceiling_and_floor() {
        let fb = render(&[]);
        assert_eq!(fb[0], palette::CEILING);
        assert_eq!(fb[3 * 8 + 7], palette::CEILING);
        assert_eq!(fb[4 * 8], palette::FLOOR);
    }

    #[test]
    fn rect_is_clipped_to_buffer() {
        let fb = render(&[DrawCall::Rect {
            pos: Vec2::new(6.0, -100.0),
            size: Vec2::new(10.0, 1000.0),
            fill: BLUE,
            stroke: None,
        }]);
        for y in 0..8 {
            assert_eq!(fb[y * 8 + 5], if y < 4 { palette::CEILING } else { palette::FLOOR });
            assert_eq!(fb[y * 8 + 6], BLUE);
            assert_eq!(fb[y * 8 + 7], BLUE);
        }
    }

    #[test]
    fn stroke_outlines_the_rect() {
        let fb = render(&[DrawCall::Rect {
            pos: Vec2::new(1.0, 1.0),
            size: Vec2::new(4.0, 4.0),
            fill: 0,
            stroke: Some(BLUE),
        }]);
        assert_eq!(fb[8 + 1], BLUE);
        assert_eq!(fb[4 * 8 + 4], BLUE);
        assert_eq!(fb[2 * 8 + 2], 0);
    }

    #[test]
    fn line_and_circle_write_pixels() {
        let fb = render(&[
            DrawCall::Line {
                from: Vec2::new(0.0, 0.0),
                to: Vec2::new(7.0, 7.0),
                color: BLUE,
            },
            DrawCall::Circle {
                center: Vec2::new(100.0, 100.0),
                radius: 3.0,
                color: 0x00_00FF00,
            },
        ]);
        for i in 0..8 {
            assert_eq!(fb[i * 8 + i], BLUE);
        }
        assert!(!fb.contains(&0x00_00FF00), "off-screen circle must be clipped");
    }

    #[test]
    fn non_finite_line_is_ignored() {
        let fb = render(&[DrawCall::Line {
            from: Vec2::ZERO,
            to: Vec2::new(f32::INFINITY, 1.0),
            color: BLUE,
        }]);
        assert!(!fb.contains(&BLUE));
    }
}
