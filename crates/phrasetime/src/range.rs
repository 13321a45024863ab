//! The output interval type.

use chrono::{DateTime, Duration};
use chrono_tz::Tz;
use serde::Serialize;

/// An absolute time interval in the interpreter's configured zone.
///
/// Every successful parse produces one of these. The type itself enforces
/// no ordering between the ends: start modes (`after`, `since`, `from`)
/// put the resolved boundary in `from` and the call instant in `to`, while
/// end modes (`until`, `til`, `before`, `to`) do the reverse; a future
/// boundary is valid either way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeRange {
    /// Lower label of the interval (not necessarily the earlier instant).
    pub from: DateTime<Tz>,
    /// Upper label of the interval.
    pub to: DateTime<Tz>,
}

impl TimeRange {
    /// Signed elapsed time from `from` to `to`; negative when the resolved
    /// boundary lies in the future of the call instant.
    pub fn duration(&self) -> Duration {
        self.to - self.from
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono_tz::UTC;

    #[test]
    fn test_duration_is_signed() {
        let from = UTC.with_ymd_and_hms(2026, 2, 18, 11, 30, 0).unwrap();
        let to = UTC.with_ymd_and_hms(2026, 2, 18, 14, 30, 0).unwrap();
        let range = TimeRange { from, to };
        assert_eq!(range.duration(), Duration::hours(3));

        let flipped = TimeRange { from: to, to: from };
        assert_eq!(flipped.duration(), Duration::hours(-3));
    }
}
