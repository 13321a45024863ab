//! Duration and named-day vocabularies.
//!
//! Unit words map to a canonical single-unit duration; plural scaling is a
//! checked multiplication of that canonical value, so singular and plural
//! forms of a unit can never drift apart. Calendar-fuzzy units are fixed
//! here by convention: a month is 30 days and a year is 365 days.

use chrono::Duration;

/// Canonical elapsed time for one instance of a unit word.
///
/// Singular and plural forms resolve to the same value. Returns `None` for
/// words outside the vocabulary.
pub fn unit_duration(word: &str) -> Option<Duration> {
    match word {
        "second" | "seconds" => Some(Duration::seconds(1)),
        "minute" | "minutes" => Some(Duration::minutes(1)),
        "hour" | "hours" => Some(Duration::hours(1)),
        "day" | "days" => Some(Duration::days(1)),
        "week" | "weeks" => Some(Duration::weeks(1)),
        "month" | "months" => Some(Duration::days(30)),
        "year" | "years" => Some(Duration::days(365)),
        _ => None,
    }
}

/// `multiplier` instances of a unit word, with checked arithmetic.
///
/// Returns `None` for an unknown word or when the product overflows.
pub fn scaled(word: &str, multiplier: i64) -> Option<Duration> {
    let unit = unit_duration(word)?;
    unit.num_seconds()
        .checked_mul(multiplier)
        .map(Duration::seconds)
}

/// Signed day offset for a relative day word, counted from the anchor day.
///
/// The midnight itself is constructed at call time by the interpreter, so
/// repeated calls track the current day boundary.
pub fn named_day_offset(word: &str) -> Option<i64> {
    match word {
        "yesterday" => Some(-1),
        "today" => Some(0),
        "tomorrow" => Some(1),
        _ => None,
    }
}
