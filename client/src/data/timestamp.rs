//! Relative post timestamps ("45s", "3m", "2h", then a calendar date).

#[cfg(test)]
#[path = "timestamp_test.rs"]
mod timestamp_test;

use chrono::{DateTime, Local};

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;

/// Format `ts` relative to the current time.
pub fn format_timestamp(ts: &DateTime<Local>) -> String {
    format_timestamp_at(ts, &Local::now())
}

/// Format `ts` relative to `now`.
///
/// Under a day old the age is shown in whole seconds, minutes or hours.
/// Older posts show their local date as `M/D/YYYY`. A timestamp ahead of
/// `now` (clock skew between author and viewer) counts as zero seconds old,
/// so it reads `0s` rather than a negative age.
pub fn format_timestamp_at(ts: &DateTime<Local>, now: &DateTime<Local>) -> String {
    let age = (*now - *ts).num_seconds().max(0);
    if age < MINUTE {
        format!("{age}s")
    } else if age < HOUR {
        format!("{}m", age / MINUTE)
    } else if age < DAY {
        format!("{}h", age / HOUR)
    } else {
        ts.format("%-m/%-d/%Y").to_string()
    }
}
