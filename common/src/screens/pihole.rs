//! Pi-hole page: network address, blocking counters and CPU temperature.

use embedded_graphics::prelude::*;

use crate::colors::BACKGROUND;
use crate::frame::Frame;
use crate::stats::{PiholeStats, format_count};
use crate::thresholds::classify_cpu_temp;
use crate::widgets::{
    ScaleTransform,
    StatRow,
    draw_background,
    draw_corner_accents,
    draw_divider,
    draw_header,
    draw_rows,
};

pub const PIHOLE_TITLE: &str = "SYSTEM MONITOR";

/// Header, divider and the four Pi-hole rows.
///
/// Shared with the entrance screen, which passes a scaled `transform`.
pub fn draw_pihole_content(
    frame: &mut Frame,
    canvas: Size,
    stats: &PiholeStats,
    temp_warning_c: f32,
    transform: &ScaleTransform,
) {
    let ads_blocked = format_count(stats.ads_blocked);
    let clients = format_count(stats.clients);
    let temp_color = classify_cpu_temp(&stats.cpu_temp, temp_warning_c).color();

    let rows = [
        StatRow::new("IP ADDRESS", &stats.ip),
        StatRow::new("ADS BLOCKED", &ads_blocked),
        StatRow::new("CLIENTS", &clients),
        StatRow::new("CPU TEMP", &stats.cpu_temp).with_label_color(temp_color),
    ];

    draw_header(frame, PIHOLE_TITLE, transform);
    draw_divider(frame, canvas, transform);
    draw_rows(frame, &rows, transform);
}

/// Full-size Pi-hole page.
pub fn compose_pihole(
    canvas: Size,
    stats: &PiholeStats,
    temp_warning_c: f32,
) -> Frame {
    let mut frame = Frame::new();
    draw_background(&mut frame, canvas, BACKGROUND);
    draw_corner_accents(&mut frame, canvas);
    draw_pihole_content(&mut frame, canvas, stats, temp_warning_c, &ScaleTransform::identity(canvas));
    frame
}
