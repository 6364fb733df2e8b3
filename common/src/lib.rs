//! Display-mode control engine for a two-button status panel.
//!
//! This crate is platform-agnostic and shared between the desktop simulator
//! and hardware front ends:
//!
//! - [`state`]: button edge detection, the reboot hold gesture and display modes
//! - [`animations`]: globe looping, entrance scaling and sprite geometry
//! - [`screens`]: the frame compositor, one module per page
//! - [`widgets`]: headers, rows, decorations and overlays
//! - [`render`]: rasterizes a [`Frame`](frame::Frame) onto any `DrawTarget`
//! - [`engine`]: the fixed-period main loop and its collaborator traits
//! - [`config`], [`colors`], [`styles`], [`thresholds`]: constants and lookup
//!
//! # no_std Compatibility
//!
//! The crate is `no_std` and allocation-free. Time is a `core::time::Duration`
//! supplied by the caller, never read from a platform clock. Tests run with
//! `std` enabled (via `cfg_attr`).

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod animations;
pub mod colors;
pub mod config;
pub mod engine;
pub mod error;
pub mod frame;
pub mod render;
pub mod screens;
pub mod state;
pub mod stats;
pub mod styles;
pub mod thresholds;
pub mod widgets;

// Re-export commonly used items
pub use animations::{AnimationEngine, AnimationState, SpriteGeometry};
pub use config::{ModeStrategy, PanelConfig};
pub use engine::{InputSource, Panel, Presenter, RebootAction, StatsCollector, TickOutcome, Ticker};
pub use error::{ConfigError, PanelError};
pub use frame::{DrawPrimitive, Frame};
pub use render::{SpriteSheet, draw_frame};
pub use state::{ButtonId, DisplayMode};
pub use stats::{PiholeStats, StatSnapshot, StatSource, SystemStats};
