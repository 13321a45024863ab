//! The compiled pattern bank for date and time sub-expressions.

use regex::Regex;

use crate::error::Result;

const AM: &str = r"^(\d{1,2})am$";
const PM: &str = r"^(\d{1,2})pm$";
const EXACT_TIME: &str = r"^(\d{1,2}):(\d{1,2})(?::(\d{1,2}))?$";
const DATE_SLASH: &str = r"^(\d{1,2})/(\d{1,2})/(\d{2,4})$";
const DATE_DASH: &str = r"^(\d{1,2})-(\d{1,2})-(\d{2,4})$";

/// The fixed bank of precompiled sub-expression patterns.
///
/// Compiled once per interpreter and shared read-only across calls. A
/// compile failure here is a programming-time invariant violation surfaced
/// through the interpreter constructor.
#[derive(Debug)]
pub(crate) struct PatternBank {
    /// Bare hour with `am` suffix, e.g. `2am`.
    pub am: Regex,
    /// Bare hour with `pm` suffix, e.g. `4pm`.
    pub pm: Regex,
    /// Explicit clock time `H:MM` or `H:MM:SS`.
    pub exact_time: Regex,
    /// Slash calendar date `M/D/YYYY`.
    pub date_slash: Regex,
    /// Dash calendar date `M-D-YYYY`.
    pub date_dash: Regex,
}

impl PatternBank {
    pub fn compile() -> Result<Self> {
        Ok(Self {
            am: Regex::new(AM)?,
            pm: Regex::new(PM)?,
            exact_time: Regex::new(EXACT_TIME)?,
            date_slash: Regex::new(DATE_SLASH)?,
            date_dash: Regex::new(DATE_DASH)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meridiem_patterns_anchor_whole_token() {
        let bank = PatternBank::compile().unwrap();
        assert!(bank.am.is_match("2am"));
        assert!(bank.am.is_match("11am"));
        assert!(!bank.am.is_match("2am-ish"));
        assert!(!bank.am.is_match("am"));
        assert!(bank.pm.is_match("4pm"));
        assert!(!bank.pm.is_match("4am"));
    }

    #[test]
    fn test_exact_time_with_optional_seconds() {
        let bank = PatternBank::compile().unwrap();
        assert!(bank.exact_time.is_match("13:34"));
        assert!(bank.exact_time.is_match("13:34:32"));
        assert!(bank.exact_time.is_match("4:05"));
        assert!(!bank.exact_time.is_match("13:34:32:10"));
        assert!(!bank.exact_time.is_match("1334"));
    }

    #[test]
    fn test_calendar_date_patterns() {
        let bank = PatternBank::compile().unwrap();
        assert!(bank.date_slash.is_match("3/15/2022"));
        assert!(bank.date_slash.is_match("12/1/99"));
        assert!(!bank.date_slash.is_match("3/15"));
        assert!(bank.date_dash.is_match("3-15-2022"));
        assert!(!bank.date_dash.is_match("2022-03-15-x"));
    }
}
