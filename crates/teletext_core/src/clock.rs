//! Header clock.
//!
//! The clock is cosmetic: hosts redraw it every [`CLOCK_REFRESH_INTERVAL`] and
//! nothing else depends on its timing.

use chrono::NaiveDateTime;
use std::time::Duration;

pub const CLOCK_REFRESH_INTERVAL: Duration = Duration::from_millis(250);

/// Weekday plus wall-clock time, e.g. `Sun 14:03:22`.
pub fn format_clock(now: NaiveDateTime) -> String {
    now.format("%a %H:%M:%S").to_string()
}
