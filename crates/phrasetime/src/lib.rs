//! # phrasetime
//!
//! Short, human-phrased time expressions resolved into concrete,
//! zone-anchored time ranges.
//!
//! The interpreter recognizes a fixed vocabulary of connector keywords
//! (`since`, `ago`, `until`, `til`, `after`, `before`, `from`, `to`) and a
//! fixed bank of date/time sub-patterns. It is a phrase interpreter, not a
//! general natural-language parser: an expression outside the vocabulary is
//! an error, never a guess.
//!
//! ## Design Principle
//!
//! Resolution is deterministic computation. Every wall-clock entry point
//! has an anchored `*_at` twin taking an explicit `DateTime<Utc>` "now", so
//! callers and tests can pin the anchor; the wall-clock variants read the
//! system clock exactly once per call and use that single instant for both
//! range ends and all relative-day math.
//!
//! ## Modules
//!
//! - [`interpreter`] — keyword-mode dispatch and boundary resolution
//! - [`range`] — the `(from, to)` output pair
//! - [`vocab`] — duration and named-day vocabularies
//! - [`error`] — error types
//!
//! ## Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use phrasetime::Interpreter;
//!
//! let interpreter = Interpreter::new(chrono_tz::UTC)?;
//!
//! let anchor = Utc.with_ymd_and_hms(2026, 2, 18, 14, 30, 0).unwrap();
//! let range = interpreter.parse_at("after yesterday at 4pm", anchor)?;
//! assert_eq!(range.from.to_rfc3339(), "2026-02-17T16:00:00+00:00");
//! assert_eq!(range.to.to_rfc3339(), "2026-02-18T14:30:00+00:00");
//! # Ok::<(), phrasetime::PhraseError>(())
//! ```

mod pattern;

pub mod error;
pub mod interpreter;
pub mod range;
pub mod vocab;

pub use error::{PhraseError, Result};
pub use interpreter::Interpreter;
pub use range::TimeRange;
