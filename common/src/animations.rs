//! Animation engine for the globe and entrance effects.
//!
//! Two independent animations share one [`AnimationState`]:
//!
//! - **Globe looping**: steps through the sprite sheet at a fixed wall-clock
//!   rate. Frames advance only when `frame_delay` has elapsed since the last
//!   advance, so playback speed does not depend on how often `advance` runs.
//! - **Entrance scale**: one frame per tick, from a small centered layout
//!   (`ENTRANCE_MIN_SCALE`) up to the full layout, then pinned.
//!
//! ```text
//! progress = frame / N
//! scale    = s_min + progress * (1 - s_min)
//! ```
//!
//! Sprite geometry lives here too: which tile of the sheet a frame maps to,
//! and where that tile lands on the canvas.

use core::time::Duration;

use embedded_graphics::geometry::{Point, Size};
use embedded_graphics::primitives::Rectangle;

use crate::config::{
    ENTRANCE_MIN_SCALE,
    GLOBE_FRAME_HEIGHT,
    GLOBE_FRAME_WIDTH,
    GLOBE_FRAMES_PER_ROW,
    GLOBE_TOTAL_FRAMES,
    PanelConfig,
};
use crate::state::DisplayMode;

// =============================================================================
// Animation State
// =============================================================================

/// Frame counter plus the time it last moved.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct AnimationState {
    pub frame: u32,
    pub last_advance: Duration,
}

impl AnimationState {
    pub const fn new(now: Duration) -> Self {
        Self {
            frame: 0,
            last_advance: now,
        }
    }

    /// Back to frame 0, timed from `now`.
    pub fn reset(
        &mut self,
        now: Duration,
    ) {
        self.frame = 0;
        self.last_advance = now;
    }
}

// =============================================================================
// Globe Looping
// =============================================================================

/// Step the globe once if `delay` has elapsed. Returns `true` if the frame moved.
///
/// At most one frame is advanced per call, however late the call is.
/// A sheet with no frames never advances.
pub fn advance_globe(
    state: &mut AnimationState,
    now: Duration,
    delay: Duration,
    total_frames: u32,
) -> bool {
    if total_frames == 0 {
        return false;
    }
    if now.saturating_sub(state.last_advance) < delay {
        return false;
    }
    state.frame = (state.frame + 1) % total_frames;
    state.last_advance = now;
    true
}

// =============================================================================
// Entrance Scale
// =============================================================================

/// Step the entrance one frame, clamped at `total_frames`.
///
/// Returns `true` once the animation has reached its final frame.
pub fn advance_entrance(
    state: &mut AnimationState,
    total_frames: u8,
) -> bool {
    let total = u32::from(total_frames);
    state.frame = (state.frame + 1).min(total);
    state.frame >= total
}

/// Layout scale for entrance `frame` out of `total_frames`.
///
/// Linear from `ENTRANCE_MIN_SCALE` at frame 0 to 1.0 at `total_frames`, and
/// pinned at 1.0 after that.
pub fn entrance_scale(
    frame: u32,
    total_frames: u8,
) -> f32 {
    let total = u32::from(total_frames);
    if frame >= total {
        return 1.0;
    }
    let progress = frame as f32 / total as f32;
    ENTRANCE_MIN_SCALE + progress * (1.0 - ENTRANCE_MIN_SCALE)
}

// =============================================================================
// Sprite Geometry
// =============================================================================

/// Layout of frames in a sprite sheet: fixed-size tiles, row-major.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SpriteGeometry {
    pub frame_width: u32,
    pub frame_height: u32,
    pub frames_per_row: u32,
    pub total_frames: u32,
}

impl SpriteGeometry {
    /// The 84-frame spinning globe sheet.
    pub const GLOBE: Self = Self {
        frame_width: GLOBE_FRAME_WIDTH,
        frame_height: GLOBE_FRAME_HEIGHT,
        frames_per_row: GLOBE_FRAMES_PER_ROW,
        total_frames: GLOBE_TOTAL_FRAMES,
    };

    #[inline]
    const fn is_valid(&self) -> bool {
        self.frame_width > 0 && self.frame_height > 0 && self.frames_per_row > 0 && self.total_frames > 0
    }

    /// Minimum sheet size that holds every frame.
    pub const fn sheet_size(&self) -> Size {
        if !self.is_valid() {
            return Size::zero();
        }
        let rows = self.total_frames.div_ceil(self.frames_per_row);
        Size::new(self.frames_per_row * self.frame_width, rows * self.frame_height)
    }

    /// Source rectangle of `frame` in the sheet. Out-of-range frames wrap.
    pub const fn tile(
        &self,
        frame: u32,
    ) -> Rectangle {
        if !self.is_valid() {
            return Rectangle::zero();
        }
        let frame = frame % self.total_frames;
        let row = frame / self.frames_per_row;
        let col = frame % self.frames_per_row;
        Rectangle::new(
            Point::new((col * self.frame_width) as i32, (row * self.frame_height) as i32),
            Size::new(self.frame_width, self.frame_height),
        )
    }

    /// Destination of one tile on `canvas`: aspect preserved, scaled to
    /// `fill` of the limiting dimension, centered.
    pub fn fit(
        &self,
        canvas: Size,
        fill: f32,
    ) -> Rectangle {
        if !self.is_valid() || canvas.width == 0 || canvas.height == 0 {
            return Rectangle::zero();
        }
        let scale_x = canvas.width as f32 / self.frame_width as f32;
        let scale_y = canvas.height as f32 / self.frame_height as f32;
        let scale = scale_x.min(scale_y) * fill;

        let size = Size::new(
            (self.frame_width as f32 * scale) as u32,
            (self.frame_height as f32 * scale) as u32,
        );
        let top_left = Point::new(
            (canvas.width as i32 - size.width as i32) / 2,
            (canvas.height as i32 - size.height as i32) / 2,
        );
        Rectangle::new(top_left, size)
    }
}

// =============================================================================
// Animation Engine
// =============================================================================

/// Drives whichever animation the current mode needs.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct AnimationEngine {
    frame_delay: Duration,
    entrance_frames: u8,
    sprite: Option<SpriteGeometry>,
}

impl AnimationEngine {
    /// `sprite` is `None` when the sheet failed to load; the globe then stays still.
    pub const fn new(
        config: &PanelConfig,
        sprite: Option<SpriteGeometry>,
    ) -> Self {
        Self {
            frame_delay: config.frame_delay,
            entrance_frames: config.entrance_frames,
            sprite,
        }
    }

    #[inline]
    pub const fn sprite(&self) -> Option<SpriteGeometry> { self.sprite }

    #[inline]
    pub const fn entrance_frames(&self) -> u8 { self.entrance_frames }

    /// Advance the animation for `mode`.
    ///
    /// Returns the mode to switch to, if the animation changed it: the next
    /// `Animating` frame, or `Static` once the entrance completes.
    pub fn advance(
        &self,
        mode: DisplayMode,
        state: &mut AnimationState,
        now: Duration,
    ) -> Option<DisplayMode> {
        match mode {
            DisplayMode::Globe => {
                if let Some(sprite) = self.sprite {
                    advance_globe(state, now, self.frame_delay, sprite.total_frames);
                }
                None
            }
            DisplayMode::Animating(_) => {
                state.last_advance = now;
                if advance_entrance(state, self.entrance_frames) {
                    Some(DisplayMode::Static)
                } else {
                    Some(DisplayMode::Animating(state.frame.min(u32::from(u8::MAX)) as u8))
                }
            }
            DisplayMode::Pihole | DisplayMode::System | DisplayMode::Standby | DisplayMode::Static => None,
        }
    }
}
