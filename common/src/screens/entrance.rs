//! Entrance strategy screens: standby prompt and the growing Pi-hole page.

use embedded_graphics::prelude::*;

use crate::colors::BACKGROUND;
use crate::config::ACCENT_MIN_SCALE;
use crate::frame::Frame;
use crate::screens::pihole::draw_pihole_content;
use crate::stats::PiholeStats;
use crate::widgets::{ScaleTransform, draw_background, draw_corner_accents, draw_grid, draw_standby_prompt};

/// Grid, accents and the "PRESS A" prompt.
pub fn compose_standby(canvas: Size) -> Frame {
    let mut frame = Frame::new();
    draw_background(&mut frame, canvas, BACKGROUND);
    draw_grid(&mut frame, canvas);
    draw_corner_accents(&mut frame, canvas);
    draw_standby_prompt(&mut frame, canvas);
    frame
}

/// Pi-hole page at `scale`. Accents appear once the scale reaches `ACCENT_MIN_SCALE`.
pub fn compose_entrance(
    canvas: Size,
    stats: &PiholeStats,
    temp_warning_c: f32,
    scale: f32,
) -> Frame {
    let transform = ScaleTransform::new(canvas, scale);

    let mut frame = Frame::new();
    draw_background(&mut frame, canvas, BACKGROUND);
    draw_grid(&mut frame, canvas);
    if transform.scale() >= ACCENT_MIN_SCALE {
        draw_corner_accents(&mut frame, canvas);
    }
    draw_pihole_content(&mut frame, canvas, stats, temp_warning_c, &transform);
    frame
}
