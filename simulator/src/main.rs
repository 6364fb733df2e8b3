//! Status panel simulator for desktop.
//!
//! Runs the shared panel engine against an SDL window, keyboard buttons and
//! synthetic stats.
//!
//! ```text
//! simulator [--entrance] [--no-sprite] [--scale N]
//! ```
//!
//! - `--entrance`: run the standby / entrance mode family instead of the page cycle
//! - `--no-sprite`: start without a globe sprite sheet
//! - `--scale N`: window pixel scale (default 3)
//!
//! Log level follows `RUST_LOG` (default `info`).

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]

mod actions;
mod display;
mod globe;
mod stats;
mod timing;

use std::process;
use std::rc::Rc;

use clap::Parser;
use embedded_graphics::geometry::Size;
use log::{error, info, warn};
use statpanel_common::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use statpanel_common::{ModeStrategy, Panel, PanelConfig, SpriteGeometry, SpriteSheet, Ticker};

use crate::actions::LoggedReboot;
use crate::display::{KeyState, SimInput, SimPresenter};
use crate::stats::FakeStats;
use crate::timing::StdTicker;

/// Desktop status panel simulator.
#[derive(Parser, Debug)]
#[command(name = "simulator", version, about = "Desktop simulator for the two-button status panel")]
struct Cli {
    /// Run the standby / entrance mode family instead of the page cycle
    #[arg(long)]
    entrance: bool,

    /// Start without a globe sprite sheet
    #[arg(long = "no-sprite")]
    no_sprite: bool,

    /// Window pixel scale
    #[arg(
        long,
        default_value_t = 3,
        value_name = "N",
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    scale: u32,
}

impl Cli {
    const fn strategy(&self) -> ModeStrategy {
        if self.entrance { ModeStrategy::Entrance } else { ModeStrategy::PageCycle }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let geometry = SpriteGeometry::GLOBE;
    let sheet_size = geometry.sheet_size();
    let sheet_data = if cli.no_sprite {
        Vec::new()
    } else {
        globe::render_sheet(geometry)
    };
    let sheet = match SpriteSheet::new(&sheet_data, sheet_size.width, sheet_size.height, geometry) {
        Ok(sheet) => Some(sheet),
        Err(err) => {
            warn!("{err}");
            None
        }
    };

    let keys = Rc::new(KeyState::default());
    let presenter = SimPresenter::new(
        Size::new(SCREEN_WIDTH, SCREEN_HEIGHT),
        cli.scale,
        sheet,
        Rc::clone(&keys),
    );

    let config = PanelConfig::DEFAULT.with_strategy(cli.strategy());
    let mut ticker = StdTicker::new();
    let mut panel = match Panel::new(
        config,
        sheet.map(|sheet| sheet.geometry()),
        SimInput::new(Rc::clone(&keys)),
        FakeStats::new(Rc::clone(&keys)),
        presenter,
        LoggedReboot::default(),
        ticker.now(),
    ) {
        Ok(panel) => panel,
        Err(err) => {
            error!("invalid configuration: {err}");
            process::exit(1);
        }
    };

    info!("keys: A = next page, B = display on/off, hold A+B = reboot, F = toggle stat failures");
    panel.run(&mut ticker)
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() { Cli::command().debug_assert(); }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["simulator"]).unwrap();
        assert_eq!(cli.strategy(), ModeStrategy::PageCycle);
        assert!(!cli.no_sprite);
        assert_eq!(cli.scale, 3);
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::try_parse_from(["simulator", "--entrance", "--no-sprite", "--scale", "2"]).unwrap();
        assert_eq!(cli.strategy(), ModeStrategy::Entrance);
        assert!(cli.no_sprite);
        assert_eq!(cli.scale, 2);
    }

    #[test]
    fn test_cli_rejects_zero_scale() {
        assert!(Cli::try_parse_from(["simulator", "--scale", "0"]).is_err());
    }
}
