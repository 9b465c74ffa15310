//! Day-delta computation and the terminal report

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::Resolution;

/// Whole-day difference from `start` to `end`. Negative when `end` precedes
/// `start`. Both dates are naive; parsing never populates a time of day.
pub fn day_delta(start: NaiveDate, end: NaiveDate) -> i64 {
    end.signed_duration_since(start).num_days()
}

/// Terminal value of a run, serialized verbatim to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DriftReport {
    #[serde(rename = "numberOfDaysBehindLCU")]
    pub number_of_days_behind_lcu: i64,
}

impl DriftReport {
    /// Days between the installed and latest release dates. Exactly zero
    /// when no comparable non-preview update exists: no comparison is
    /// possible, and zero drift is reported rather than an error.
    pub fn from_resolution(resolution: &Resolution) -> Self {
        let days = match &resolution.latest {
            Some(latest) => day_delta(
                resolution.installed.release_date(),
                latest.release_date,
            ),
            None => 0,
        };
        Self {
            number_of_days_behind_lcu: days,
        }
    }
}
