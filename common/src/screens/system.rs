//! System page: CPU, memory, disk and uptime.

use embedded_graphics::prelude::*;

use crate::colors::BACKGROUND;
use crate::frame::Frame;
use crate::stats::SystemStats;
use crate::widgets::{
    ScaleTransform,
    StatRow,
    draw_background,
    draw_corner_accents,
    draw_divider,
    draw_header,
    draw_rows,
};

pub const SYSTEM_TITLE: &str = "SYSTEM STATS";

pub fn compose_system(
    canvas: Size,
    stats: &SystemStats,
) -> Frame {
    let transform = ScaleTransform::identity(canvas);
    let rows = [
        StatRow::new("CPU USAGE", &stats.cpu),
        StatRow::new("MEMORY", &stats.memory),
        StatRow::new("DISK", &stats.disk),
        StatRow::new("UPTIME", &stats.uptime),
    ];

    let mut frame = Frame::new();
    draw_background(&mut frame, canvas, BACKGROUND);
    draw_corner_accents(&mut frame, canvas);
    draw_header(&mut frame, SYSTEM_TITLE, &transform);
    draw_divider(&mut frame, canvas, &transform);
    draw_rows(&mut frame, &rows, &transform);
    frame
}
