//! Procedural globe sprite sheet.
//!
//! Renders a rotating wireframe globe into the same layout the panel expects
//! from a sheet on disk: big-endian RGB565, frames packed left to right then
//! top to bottom.

use std::f32::consts::{FRAC_PI_6, PI, TAU};

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use statpanel_common::SpriteGeometry;
use statpanel_common::colors::{ACCENT, BLACK};

const OCEAN: Rgb565 = Rgb565::new(2, 8, 14);
const MERIDIAN_STEP: f32 = TAU / 12.0;
const LINE_WIDTH: f32 = 0.08;

/// Render every frame of `geometry` into a sheet buffer.
pub fn render_sheet(geometry: SpriteGeometry) -> Vec<u8> {
    let size = geometry.sheet_size();
    let mut data = vec![0u8; size.width as usize * size.height as usize * 2];

    for frame in 0..geometry.total_frames {
        let tile = geometry.tile(frame);
        let phase = frame as f32 / geometry.total_frames as f32 * MERIDIAN_STEP;
        for y in 0..geometry.frame_height {
            for x in 0..geometry.frame_width {
                let color = globe_pixel(x, y, geometry.frame_width, phase);
                let px = (tile.top_left.x as u32 + x) as usize;
                let py = (tile.top_left.y as u32 + y) as usize;
                let offset = (py * size.width as usize + px) * 2;
                data[offset..offset + 2].copy_from_slice(&color.into_storage().to_be_bytes());
            }
        }
    }
    data
}

/// Colour of `(x, y)` in a `side` x `side` tile with the globe rotated by `phase`.
fn globe_pixel(
    x: u32,
    y: u32,
    side: u32,
    phase: f32,
) -> Rgb565 {
    let radius = side as f32 / 2.0 - 2.0;
    let center = side as f32 / 2.0;
    let nx = (x as f32 + 0.5 - center) / radius;
    let ny = (y as f32 + 0.5 - center) / radius;
    let r2 = nx.mul_add(nx, ny * ny);
    if r2 > 1.0 {
        return BLACK;
    }

    let nz = (1.0 - r2).sqrt();
    let lon = nx.atan2(nz) + phase;
    let lat = ny.asin();

    let on_meridian = near_multiple(lon, MERIDIAN_STEP);
    let on_parallel = near_multiple(lat + PI / 2.0, FRAC_PI_6);
    if on_meridian || on_parallel || r2 > 0.9 {
        ACCENT
    } else {
        OCEAN
    }
}

fn near_multiple(
    value: f32,
    step: f32,
) -> bool {
    let rem = value.rem_euclid(step);
    rem < LINE_WIDTH || step - rem < LINE_WIDTH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sheet_matches_geometry() {
        let geometry = SpriteGeometry::GLOBE;
        let data = render_sheet(geometry);
        let size = geometry.sheet_size();
        assert_eq!(data.len(), (size.width * size.height * 2) as usize);
    }

    #[test]
    fn test_tile_corners_are_black() {
        assert_eq!(globe_pixel(0, 0, 48, 0.0), BLACK);
        assert_eq!(globe_pixel(47, 47, 48, 0.0), BLACK);
        assert_ne!(globe_pixel(24, 24, 48, 0.3), BLACK);
    }

    #[test]
    fn test_frames_differ() {
        let geometry = SpriteGeometry::GLOBE;
        let a: Vec<Rgb565> = (0..48).map(|x| globe_pixel(x, 20, 48, 0.0)).collect();
        let b: Vec<Rgb565> = (0..48)
            .map(|x| globe_pixel(x, 20, 48, MERIDIAN_STEP / geometry.total_frames as f32 * 20.0))
            .collect();
        assert_ne!(a, b);
    }
}
