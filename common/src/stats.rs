//! Stat snapshots consumed by the compositor.
//!
//! Snapshots are fetched fresh every tick and never cached. Anything a
//! collector could not read is carried as [`UNAVAILABLE`] (text fields) or
//! `None` (counters), never as a stale value.

use core::fmt::Write;

use heapless::String;

/// Sentinel shown for any value that could not be read.
pub const UNAVAILABLE: &str = "N/A";

/// Capacity of a single stat string.
pub const STAT_TEXT_LEN: usize = 32;

/// Fixed-capacity stat string.
pub type StatText = String<STAT_TEXT_LEN>;

/// Copy `s` into a fixed-capacity string, dropping whole characters that do not fit.
pub fn bounded<const N: usize>(s: &str) -> String<N> {
    let mut out = String::new();
    for c in s.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

/// [`bounded`] at stat capacity.
#[inline]
pub fn stat_text(s: &str) -> StatText { bounded(s) }

/// Which collector a snapshot comes from.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StatSource {
    Pihole,
    System,
}

impl StatSource {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pihole => "pihole",
            Self::System => "system",
        }
    }
}

/// Pi-hole page values.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PiholeStats {
    pub ip: StatText,
    pub ads_blocked: Option<u64>,
    pub clients: Option<u64>,
    /// Temperature with unit suffix, e.g. `"48.3°C"`.
    pub cpu_temp: StatText,
}

impl PiholeStats {
    /// Every field set to the sentinel.
    pub fn unavailable() -> Self {
        Self {
            ip: stat_text(UNAVAILABLE),
            ads_blocked: None,
            clients: None,
            cpu_temp: stat_text(UNAVAILABLE),
        }
    }
}

/// System page values, preformatted by the collector.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SystemStats {
    pub cpu: StatText,
    pub memory: StatText,
    pub disk: StatText,
    pub uptime: StatText,
}

impl SystemStats {
    /// Every field set to the sentinel.
    pub fn unavailable() -> Self {
        Self {
            cpu: stat_text(UNAVAILABLE),
            memory: stat_text(UNAVAILABLE),
            disk: stat_text(UNAVAILABLE),
            uptime: stat_text(UNAVAILABLE),
        }
    }
}

/// Stats fetched for the current tick.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum StatSnapshot {
    /// Nothing fetched (the current mode needs no stats).
    None,
    Pihole(PiholeStats),
    System(SystemStats),
}

impl StatSnapshot {
    /// Sentinel snapshot for `source`, used when a fetch fails.
    pub fn unavailable(source: StatSource) -> Self {
        match source {
            StatSource::Pihole => Self::Pihole(PiholeStats::unavailable()),
            StatSource::System => Self::System(SystemStats::unavailable()),
        }
    }

    /// Pi-hole values, or sentinels if this snapshot holds something else.
    pub fn pihole_or_unavailable(&self) -> PiholeStats {
        match self {
            Self::Pihole(stats) => stats.clone(),
            _ => PiholeStats::unavailable(),
        }
    }

    /// System values, or sentinels if this snapshot holds something else.
    pub fn system_or_unavailable(&self) -> SystemStats {
        match self {
            Self::System(stats) => stats.clone(),
            _ => SystemStats::unavailable(),
        }
    }
}

/// Format an optional counter, using the sentinel for `None`.
pub fn format_count(value: Option<u64>) -> StatText {
    let mut out = StatText::new();
    match value {
        Some(n) => {
            write!(out, "{n}").ok();
        }
        None => {
            out.push_str(UNAVAILABLE).ok();
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounded_truncates_on_char_boundary() {
        let s: String<4> = bounded("48.3°C");
        assert_eq!(s.as_str(), "48.3");

        let s: String<6> = bounded("48.3°C");
        assert_eq!(s.as_str(), "48.3°");
    }

    #[test]
    fn test_bounded_keeps_short_input() {
        assert_eq!(stat_text("192.168.1.2").as_str(), "192.168.1.2");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(Some(12345)).as_str(), "12345");
        assert_eq!(format_count(Some(0)).as_str(), "0");
        assert_eq!(format_count(None).as_str(), UNAVAILABLE);
    }

    #[test]
    fn test_unavailable_snapshots() {
        let pihole = PiholeStats::unavailable();
        assert_eq!(pihole.ip.as_str(), UNAVAILABLE);
        assert_eq!(pihole.ads_blocked, None);

        let system = SystemStats::unavailable();
        assert_eq!(system.uptime.as_str(), UNAVAILABLE);

        assert_eq!(
            StatSnapshot::unavailable(StatSource::System),
            StatSnapshot::System(SystemStats::unavailable())
        );
    }

    #[test]
    fn test_mismatched_snapshot_degrades() {
        let snapshot = StatSnapshot::System(SystemStats {
            cpu: stat_text("12.5%"),
            memory: stat_text("40.0%"),
            disk: stat_text("3.1G"),
            uptime: stat_text("2 days"),
        });
        assert_eq!(snapshot.pihole_or_unavailable(), PiholeStats::unavailable());
        assert_eq!(snapshot.system_or_unavailable().cpu.as_str(), "12.5%");
        assert_eq!(StatSnapshot::None.system_or_unavailable(), SystemStats::unavailable());
    }
}
