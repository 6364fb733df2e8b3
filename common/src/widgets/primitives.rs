//! Backgrounds and decorations shared by every page.

use embedded_graphics::prelude::*;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::primitives::Rectangle;

use crate::colors::{ACCENT, GRID};
use crate::config::{ACCENT_LEN, ACCENT_WIDTH, DIVIDER_INSET, DIVIDER_Y, GRID_MAX_LINES, GRID_PITCH};
use crate::frame::Frame;
use crate::widgets::ScaleTransform;

/// Fill the whole canvas.
pub fn draw_background(
    frame: &mut Frame,
    canvas: Size,
    color: Rgb565,
) {
    frame.fill(Rectangle::new(Point::zero(), canvas), color);
}

/// Static 1px grid, vertical lines first.
///
/// The pitch is `GRID_PITCH`, widened on large canvases so neither axis gets
/// more than `GRID_MAX_LINES` lines.
pub fn draw_grid(
    frame: &mut Frame,
    canvas: Size,
) {
    let pitch = grid_pitch(canvas);
    let w = canvas.width as i32;
    let h = canvas.height as i32;
    for x in (0..w).step_by(pitch) {
        frame.line(Point::new(x, 0), Point::new(x, h), GRID, 1);
    }
    for y in (0..h).step_by(pitch) {
        frame.line(Point::new(0, y), Point::new(w, y), GRID, 1);
    }
}

fn grid_pitch(canvas: Size) -> usize {
    let widest = canvas.width.max(canvas.height).div_ceil(GRID_MAX_LINES);
    GRID_PITCH.max(widest as usize)
}

/// Two-stroke accents in each corner.
pub fn draw_corner_accents(
    frame: &mut Frame,
    canvas: Size,
) {
    let w = canvas.width as i32;
    let h = canvas.height as i32;
    let len = ACCENT_LEN;

    let strokes = [
        // Top left
        (Point::new(0, 0), Point::new(len, 0)),
        (Point::new(0, 0), Point::new(0, len)),
        // Top right
        (Point::new(w - len, 0), Point::new(w, 0)),
        (Point::new(w - 1, 0), Point::new(w - 1, len)),
        // Bottom left
        (Point::new(0, h - 1), Point::new(len, h - 1)),
        (Point::new(0, h - len), Point::new(0, h)),
        // Bottom right
        (Point::new(w - len, h - 1), Point::new(w, h - 1)),
        (Point::new(w - 1, h - len), Point::new(w - 1, h)),
    ];
    for (start, end) in strokes {
        frame.line(start, end, ACCENT, ACCENT_WIDTH);
    }
}

/// Header divider, inset from both edges.
pub fn draw_divider(
    frame: &mut Frame,
    canvas: Size,
    transform: &ScaleTransform,
) {
    let start = Point::new(DIVIDER_INSET, DIVIDER_Y);
    let end = Point::new(canvas.width as i32 - DIVIDER_INSET, DIVIDER_Y);
    frame.line(transform.point(start), transform.point(end), ACCENT, 1);
}
