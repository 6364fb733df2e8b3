//! Synthetic stat collector.
//!
//! Values sweep smoothly over time so every page has something moving, and
//! the CPU temperature crosses the warning threshold on each cycle.

use core::fmt::Write;
use std::rc::Rc;
use std::time::Instant;

use statpanel_common::stats::{StatText, stat_text};
use statpanel_common::{PanelError, PiholeStats, StatSource, StatsCollector, SystemStats};

use crate::display::KeyState;

pub struct FakeStats {
    start: Instant,
    keys: Rc<KeyState>,
}

impl FakeStats {
    pub fn new(keys: Rc<KeyState>) -> Self {
        Self {
            start: Instant::now(),
            keys,
        }
    }

    fn t(&self) -> f32 { self.start.elapsed().as_secs_f32() }
}

impl StatsCollector for FakeStats {
    fn fetch_pihole(&mut self) -> Result<PiholeStats, PanelError> {
        if self.keys.stats_failing() {
            return Err(PanelError::StatsUnavailable(StatSource::Pihole));
        }
        let t = self.t();

        let mut cpu_temp = StatText::new();
        let _ = write!(cpu_temp, "{:.1}°C", fake_signal(t, 45.0, 70.0, 0.2));

        Ok(PiholeStats {
            ip: stat_text("192.168.1.20"),
            ads_blocked: Some(12_000 + (t * 3.0) as u64),
            clients: Some(fake_signal(t, 4.0, 12.0, 0.05) as u64),
            cpu_temp,
        })
    }

    fn fetch_system(&mut self) -> Result<SystemStats, PanelError> {
        if self.keys.stats_failing() {
            return Err(PanelError::Timeout);
        }
        let t = self.t();

        let mut cpu = StatText::new();
        let _ = write!(cpu, "{:.1}%", fake_signal(t, 2.0, 85.0, 0.3));

        let used_mb = fake_signal(t, 250.0, 700.0, 0.07) as u32;
        let mut memory = StatText::new();
        let _ = write!(memory, "{used_mb}/924MB {}%", used_mb * 100 / 924);

        let mut uptime = StatText::new();
        let minutes = t as u32 / 60;
        let _ = write!(uptime, "3 days, {minutes} min");

        Ok(SystemStats {
            cpu,
            memory,
            disk: stat_text("5/29GB 17%"),
            uptime,
        })
    }
}

fn fake_signal(
    t: f32,
    min: f32,
    max: f32,
    freq: f32,
) -> f32 {
    let normalized = (t * freq).sin().mul_add(0.5, 0.5);
    min + normalized * (max - min)
}
