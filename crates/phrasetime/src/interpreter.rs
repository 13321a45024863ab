//! Keyword-mode dispatch and boundary resolution for time phrases.
//!
//! A phrase selects its parsing mode through one of eight connector
//! keywords. `ago` consumes a leading `<count> <unit>` pair; every other
//! mode resolves the remainder of the phrase to a single absolute instant
//! through a precedence ladder of sub-pattern branches (named day, slash or
//! dash calendar date, long-form date, bare time of day).
//!
//! All functions resolve against an explicit anchor instant: the
//! wall-clock entry points read `Utc::now()` exactly once per call and
//! delegate to their `*_at` twins, which keeps both range ends consistent
//! within a call and the whole module testable against fixed anchors.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::{PhraseError, Result};
use crate::pattern::PatternBank;
use crate::range::TimeRange;
use crate::vocab;

// ── Connector keywords ──────────────────────────────────────────────────────

/// Parsing mode selected by a connector keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Since,
    Ago,
    Until,
    After,
    Before,
    From,
    To,
}

impl Mode {
    /// Complete keyword → mode table over the eight recognized connectors.
    fn from_keyword(word: &str) -> Option<Mode> {
        match word {
            "since" => Some(Mode::Since),
            "ago" => Some(Mode::Ago),
            "until" | "til" => Some(Mode::Until),
            "after" => Some(Mode::After),
            "before" => Some(Mode::Before),
            "from" => Some(Mode::From),
            "to" => Some(Mode::To),
            _ => None,
        }
    }

    /// Literal keywords a phrase in this mode may begin with.
    fn keywords(self) -> &'static [&'static str] {
        match self {
            Mode::Since => &["since"],
            Mode::Ago => &["ago"],
            Mode::Until => &["until", "til"],
            Mode::After => &["after"],
            Mode::Before => &["before"],
            Mode::From => &["from"],
            Mode::To => &["to"],
        }
    }

    /// Whether the resolved boundary labels the start of the range; the
    /// call instant labels the opposite end.
    fn starts_range(self) -> bool {
        matches!(self, Mode::Since | Mode::After | Mode::From)
    }
}

// ── Interpreter ─────────────────────────────────────────────────────────────

/// A phrase interpreter bound to an IANA time zone.
///
/// Construction compiles the sub-expression pattern bank once; the
/// interpreter is immutable afterwards and safe to share across threads.
/// Each parse call is independent and stateless beyond reading the shared
/// zone and patterns.
#[derive(Debug)]
pub struct Interpreter {
    zone: Tz,
    patterns: PatternBank,
}

impl Interpreter {
    /// Create an interpreter bound to `zone`.
    ///
    /// # Errors
    ///
    /// Returns [`PhraseError::Pattern`] if any sub-expression pattern fails
    /// to compile, which is a programming-time invariant violation rather
    /// than a condition callers should expect at runtime.
    pub fn new(zone: Tz) -> Result<Self> {
        Ok(Self {
            zone,
            patterns: PatternBank::compile()?,
        })
    }

    /// The configured zone.
    pub fn zone(&self) -> Tz {
        self.zone
    }

    /// Parse a phrase, dispatching on its connector keyword.
    ///
    /// # Errors
    ///
    /// Returns [`PhraseError::InvalidInput`] for inputs of fewer than two
    /// whitespace-separated fields and [`PhraseError::UnrecognizedMode`]
    /// when no field is a connector keyword, plus whatever the selected
    /// mode handler reports.
    pub fn parse(&self, input: &str) -> Result<TimeRange> {
        self.parse_at(input, Utc::now())
    }

    /// [`parse`](Self::parse) against an explicit anchor instant.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use phrasetime::Interpreter;
    ///
    /// let interpreter = Interpreter::new(chrono_tz::US::Eastern).unwrap();
    /// let anchor = Utc.with_ymd_and_hms(2026, 2, 18, 14, 30, 0).unwrap();
    /// let range = interpreter.parse_at("after 3/15/2022", anchor).unwrap();
    /// assert_eq!(range.from.to_rfc3339(), "2022-03-15T00:00:00-04:00");
    /// ```
    pub fn parse_at(&self, input: &str, anchor: DateTime<Utc>) -> Result<TimeRange> {
        let tokens: Vec<&str> = input.split_whitespace().collect();
        if tokens.len() < 2 {
            return Err(PhraseError::InvalidInput(
                "input must have at least two fields".into(),
            ));
        }
        let mode = tokens
            .iter()
            .find_map(|word| Mode::from_keyword(word))
            .ok_or_else(|| PhraseError::UnrecognizedMode(input.to_string()))?;
        self.resolve(mode, input, anchor)
    }

    /// Resolve an elapsed-time phrase like `3 hours ago`.
    ///
    /// The result always satisfies `from <= to`.
    pub fn ago(&self, input: &str) -> Result<TimeRange> {
        self.ago_at(input, Utc::now())
    }

    /// [`ago`](Self::ago) against an explicit anchor instant.
    pub fn ago_at(&self, input: &str, anchor: DateTime<Utc>) -> Result<TimeRange> {
        self.resolve(Mode::Ago, input, anchor)
    }

    /// Resolve a `since <expression>` phrase; the boundary lands in `from`.
    pub fn since(&self, input: &str) -> Result<TimeRange> {
        self.since_at(input, Utc::now())
    }

    /// [`since`](Self::since) against an explicit anchor instant.
    pub fn since_at(&self, input: &str, anchor: DateTime<Utc>) -> Result<TimeRange> {
        self.resolve(Mode::Since, input, anchor)
    }

    /// Resolve an `after <expression>` phrase; the boundary lands in `from`.
    ///
    /// `after` describes a boundary, not an ordered interval: a future date
    /// is a valid boundary, so no `from <= to` ordering is guaranteed.
    pub fn after(&self, input: &str) -> Result<TimeRange> {
        self.after_at(input, Utc::now())
    }

    /// [`after`](Self::after) against an explicit anchor instant.
    pub fn after_at(&self, input: &str, anchor: DateTime<Utc>) -> Result<TimeRange> {
        self.resolve(Mode::After, input, anchor)
    }

    /// Resolve an `until <expression>` (or `til`) phrase; the boundary
    /// lands in `to`.
    pub fn until(&self, input: &str) -> Result<TimeRange> {
        self.until_at(input, Utc::now())
    }

    /// [`until`](Self::until) against an explicit anchor instant.
    pub fn until_at(&self, input: &str, anchor: DateTime<Utc>) -> Result<TimeRange> {
        self.resolve(Mode::Until, input, anchor)
    }

    /// Resolve a `before <expression>` phrase; the boundary lands in `to`.
    pub fn before(&self, input: &str) -> Result<TimeRange> {
        self.before_at(input, Utc::now())
    }

    /// [`before`](Self::before) against an explicit anchor instant.
    pub fn before_at(&self, input: &str, anchor: DateTime<Utc>) -> Result<TimeRange> {
        self.resolve(Mode::Before, input, anchor)
    }

    // ── Mode handlers ───────────────────────────────────────────────────────

    fn resolve(&self, mode: Mode, input: &str, anchor: DateTime<Utc>) -> Result<TimeRange> {
        let now = anchor.with_timezone(&self.zone);
        if mode == Mode::Ago {
            return self.elapsed_range(input, now);
        }
        let boundary = self.boundary(mode, input, now)?;
        if mode.starts_range() {
            Ok(TimeRange { from: boundary, to: now })
        } else {
            Ok(TimeRange { from: now, to: boundary })
        }
    }

    /// The `ago` handler.
    ///
    /// Single-clause by contract: only the leading `<count> <unit>` pair
    /// contributes, and tokens between the unit word and the trailing `ago`
    /// are ignored; `8 days and three hours ago` resolves to eight days.
    fn elapsed_range(&self, input: &str, now: DateTime<Tz>) -> Result<TimeRange> {
        let tokens: Vec<&str> = input.split_whitespace().collect();
        if tokens.len() < 3 {
            return Err(PhraseError::InvalidInput(
                "input must have at least three fields".into(),
            ));
        }
        if tokens.last() != Some(&"ago") {
            return Err(PhraseError::InvalidInput(format!(
                "'{input}' does not end with 'ago'"
            )));
        }

        let multiplier: i64 = tokens[0]
            .parse()
            .map_err(|_| PhraseError::InvalidNumber(tokens[0].to_string()))?;
        if multiplier < 0 {
            return Err(PhraseError::InvalidNumber(format!(
                "multiplier must be non-negative, got {multiplier}"
            )));
        }
        if vocab::unit_duration(tokens[1]).is_none() {
            return Err(PhraseError::UnknownUnit(tokens[1].to_string()));
        }
        let elapsed = vocab::scaled(tokens[1], multiplier).ok_or_else(|| {
            PhraseError::InvalidNumber(format!("'{} {}' overflows", tokens[0], tokens[1]))
        })?;
        let from = now
            .checked_sub_signed(elapsed)
            .ok_or_else(|| PhraseError::InvalidInput(format!("'{input}' is out of range")))?;
        Ok(TimeRange { from, to: now })
    }

    /// Shared boundary resolution for every non-`ago` mode: validate the
    /// leading keyword, then resolve the remaining expression.
    fn boundary(&self, mode: Mode, input: &str, now: DateTime<Tz>) -> Result<DateTime<Tz>> {
        let tokens: Vec<&str> = input.split_whitespace().collect();
        let Some((head, expr)) = tokens.split_first() else {
            return Err(PhraseError::InvalidInput("empty input".into()));
        };
        if !mode.keywords().contains(head) {
            return Err(PhraseError::InvalidInput(format!(
                "'{input}' must begin with '{}'",
                mode.keywords()[0]
            )));
        }
        if expr.is_empty() {
            return Err(PhraseError::InvalidInput(format!(
                "missing expression after '{head}'"
            )));
        }
        self.resolve_point(expr, now)
    }

    // ── Boundary expression ladder ──────────────────────────────────────────

    /// Resolve a date/time sub-expression to an absolute instant, trying
    /// each branch in precedence order.
    fn resolve_point(&self, tokens: &[&str], now: DateTime<Tz>) -> Result<DateTime<Tz>> {
        if let Some(point) = self.named_day(tokens, now)? {
            return Ok(point);
        }
        if let Some(point) = self.calendar_date(tokens)? {
            return Ok(point);
        }
        if let Some(point) = self.long_form_date(tokens)? {
            return Ok(point);
        }
        if let Some(point) = self.bare_time(tokens, now)? {
            return Ok(point);
        }
        Err(PhraseError::InvalidInput(format!(
            "unrecognized date or time expression: '{}'",
            tokens.join(" ")
        )))
    }

    /// Relative day word, optionally with a time-of-day suffix; midnight
    /// of that day otherwise.
    fn named_day(&self, tokens: &[&str], now: DateTime<Tz>) -> Result<Option<DateTime<Tz>>> {
        let Some(offset) = vocab::named_day_offset(tokens[0]) else {
            return Ok(None);
        };
        let date = now.date_naive() + Duration::days(offset);
        let (hour, minute, second) = self.trailing_time(&tokens[1..])?.unwrap_or((0, 0, 0));
        self.instant(date, hour, minute, second).map(Some)
    }

    /// Slash (`M/D/YYYY`) or dash (`M-D-YYYY`) calendar date, defaulting
    /// to midnight unless a time-of-day follows. Two-digit years are
    /// 2000-based.
    fn calendar_date(&self, tokens: &[&str]) -> Result<Option<DateTime<Tz>>> {
        let token = tokens[0];
        let caps = self
            .patterns
            .date_slash
            .captures(token)
            .or_else(|| self.patterns.date_dash.captures(token));
        let Some(caps) = caps else { return Ok(None) };

        let month = parse_component(&caps[1], token)?;
        let day = parse_component(&caps[2], token)?;
        let mut year: i32 = caps[3]
            .parse()
            .map_err(|_| PhraseError::InvalidNumber(format!("'{}' in '{token}'", &caps[3])))?;
        if year < 100 {
            year += 2000;
        }
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| PhraseError::InvalidInput(format!("no such calendar date: '{token}'")))?;
        let (hour, minute, second) = self.trailing_time(&tokens[1..])?.unwrap_or((0, 0, 0));
        self.instant(date, hour, minute, second).map(Some)
    }

    /// Month-name dates like `May 8, 2009`, optionally with an embedded
    /// 12-hour `H:MM:SS AM/PM` suffix. English month names only.
    fn long_form_date(&self, tokens: &[&str]) -> Result<Option<DateTime<Tz>>> {
        let text = tokens.join(" ");
        let naive = NaiveDateTime::parse_from_str(&text, "%B %d, %Y %I:%M:%S %p")
            .ok()
            .or_else(|| {
                NaiveDate::parse_from_str(&text, "%B %d, %Y")
                    .ok()
                    .and_then(|date| date.and_hms_opt(0, 0, 0))
            });
        match naive {
            Some(naive) => self.localize(naive).map(Some),
            None => Ok(None),
        }
    }

    /// A lone time-of-day token applied to the anchor's calendar day.
    fn bare_time(&self, tokens: &[&str], now: DateTime<Tz>) -> Result<Option<DateTime<Tz>>> {
        let Some((hour, minute, second)) = self.time_of_day(tokens[0])? else {
            return Ok(None);
        };
        self.instant(now.date_naive(), hour, minute, second).map(Some)
    }

    /// Optional time-of-day following a resolved day: `at <time>` or a bare
    /// time token. Other trailing tokens are ignored (single-clause
    /// parsing), but `at` commits to a time and fails without one.
    fn trailing_time(&self, rest: &[&str]) -> Result<Option<(u32, u32, u32)>> {
        match rest.split_first() {
            Some((&"at", tail)) => {
                let token = *tail.first().ok_or_else(|| {
                    PhraseError::InvalidInput("expected a time after 'at'".into())
                })?;
                let tod = self.time_of_day(token)?.ok_or_else(|| {
                    PhraseError::InvalidInput(format!("unrecognized time of day: '{token}'"))
                })?;
                Ok(Some(tod))
            }
            Some((&token, _)) => self.time_of_day(token),
            None => Ok(None),
        }
    }

    /// Recognize a single time-of-day token against the pattern bank.
    ///
    /// Meridiem normalization: an `am` hour is used directly as the 24-hour
    /// hour; a `pm` hour gains twelve. Exact times split on `:` into hour,
    /// minute, and optional second.
    fn time_of_day(&self, token: &str) -> Result<Option<(u32, u32, u32)>> {
        if let Some(caps) = self.patterns.am.captures(token) {
            let hour = parse_component(&caps[1], token)?;
            return Ok(Some((hour, 0, 0)));
        }
        if let Some(caps) = self.patterns.pm.captures(token) {
            let hour = parse_component(&caps[1], token)?;
            return Ok(Some((hour + 12, 0, 0)));
        }
        if let Some(caps) = self.patterns.exact_time.captures(token) {
            let hour = parse_component(&caps[1], token)?;
            let minute = parse_component(&caps[2], token)?;
            let second = match caps.get(3) {
                Some(m) => parse_component(m.as_str(), token)?,
                None => 0,
            };
            return Ok(Some((hour, minute, second)));
        }
        Ok(None)
    }

    fn instant(&self, date: NaiveDate, hour: u32, minute: u32, second: u32) -> Result<DateTime<Tz>> {
        let naive = date.and_hms_opt(hour, minute, second).ok_or_else(|| {
            PhraseError::InvalidInput(format!(
                "no such time of day: {hour:02}:{minute:02}:{second:02}"
            ))
        })?;
        self.localize(naive)
    }

    fn localize(&self, naive: NaiveDateTime) -> Result<DateTime<Tz>> {
        self.zone
            .from_local_datetime(&naive)
            .single()
            .ok_or_else(|| {
                PhraseError::InvalidInput(format!("ambiguous or nonexistent local time: {naive}"))
            })
    }
}

/// Parse a numeric pattern capture, reporting the enclosing token on failure.
fn parse_component(text: &str, token: &str) -> Result<u32> {
    text.parse()
        .map_err(|_| PhraseError::InvalidNumber(format!("'{text}' in '{token}'")))
}

// ── Tests ───────────────────────────────────────────────────────────────────
