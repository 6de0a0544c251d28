//! Logging setup: timestamped progress lines on stdout.

use std::env;
use std::fmt::{self, Write as _};

use time::OffsetDateTime;
use time::format_description::FormatItem;
use time::macros::format_description;
use tracing::Level;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;

const DEBUG_ENV: &str = "ASSEMBLYINFO_UPDATER_DEBUG";
const CLOCK_FORMAT: &[FormatItem<'static>] = format_description!("[hour]:[minute]:[second]");

/// Bracketed local time of day, e.g. `[14:03:27]`.
///
/// Falls back to UTC when the local offset cannot be determined.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClockTime;

impl ClockTime {
    fn stamp(now: OffsetDateTime) -> String {
        let clock = now
            .format(CLOCK_FORMAT)
            .unwrap_or_else(|_| "--:--:--".to_owned());
        format!("[{clock}]")
    }
}

impl FormatTime for ClockTime {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
        w.write_str(&Self::stamp(now))
    }
}

/// Install the global subscriber. Safe to call more than once.
pub fn init() {
    let level = match env::var(DEBUG_ENV) {
        Ok(value) if !value.is_empty() => Level::DEBUG,
        _ => Level::INFO,
    };

    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stdout)
        .with_timer(ClockTime)
        .with_max_level(level)
        .with_level(false)
        .with_target(false)
        .with_ansi(false)
        .try_init();
}
