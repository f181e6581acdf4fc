//! Calendar dates and activity periods shared by both datasets.
//!
//! # Responsibility
//! - Parse hand-authored `YYYY-M-D` date literals into `NaiveDate`.
//! - Model "ongoing" as an explicit `EntryEnd` variant instead of a missing field.
//! - Provide the approximate month arithmetic used for experience totals.
//!
//! # Invariants
//! - A constructed `EntryPeriod` always holds a valid start date.
//! - Dates are interpreted as UTC midnight.
//! - `end` may precede `start`; callers decide how to report it.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed month length used by experience totals (30 days, in milliseconds).
pub const APPROX_MONTH_MILLIS: i64 = 30 * 24 * 60 * 60 * 1000;

const WIRE_DATE_FORMAT: &str = "%Y-%m-%d";

static DATE_LITERAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4})-(\d{1,2})-(\d{1,2})$").expect("valid date literal regex"));

/// Date literal parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateParseError {
    Empty,
    /// Literal does not match `YYYY-M-D`.
    Malformed(String),
    /// Literal matches the shape but names no calendar day (e.g. `2024-02-30`).
    OutOfRange(String),
}

impl Display for DateParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "date literal cannot be empty"),
            Self::Malformed(value) => {
                write!(f, "malformed date literal `{value}`; expected YYYY-M-D")
            }
            Self::OutOfRange(value) => write!(f, "date literal `{value}` is not a calendar day"),
        }
    }
}

impl Error for DateParseError {}

/// Parses one hand-authored date literal.
///
/// Month and day accept one or two digits, so `2025-3-15` and `2025-03-15`
/// are the same date.
///
/// # Errors
/// - `Empty` for blank input.
/// - `Malformed` when the literal is not `YYYY-M-D`.
/// - `OutOfRange` when the components name no real day.
pub fn parse_entry_date(value: &str) -> Result<NaiveDate, DateParseError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DateParseError::Empty);
    }

    let malformed = || DateParseError::Malformed(trimmed.to_string());
    let captures = DATE_LITERAL_RE.captures(trimmed).ok_or_else(malformed)?;
    let year = captures[1].parse::<i32>().map_err(|_| malformed())?;
    let month = captures[2].parse::<u32>().map_err(|_| malformed())?;
    let day = captures[3].parse::<u32>().map_err(|_| malformed())?;

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| DateParseError::OutOfRange(trimmed.to_string()))
}

/// Formats a date in canonical zero-padded wire form.
pub fn format_entry_date(date: NaiveDate) -> String {
    date.format(WIRE_DATE_FORMAT).to_string()
}

fn midnight_millis(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp_millis()
}

/// End of an activity period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryEnd {
    /// Activity continues to the present.
    Ongoing,
    Ended(NaiveDate),
}

impl EntryEnd {
    pub fn date(self) -> Option<NaiveDate> {
        match self {
            Self::Ongoing => None,
            Self::Ended(date) => Some(date),
        }
    }
}

/// Start/end span of one dataset entry.
///
/// Serialized flat as `startDate` plus optional `endDate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "WirePeriod", into = "WirePeriod")]
pub struct EntryPeriod {
    pub start: NaiveDate,
    pub end: EntryEnd,
}

impl EntryPeriod {
    pub fn ongoing(start: NaiveDate) -> Self {
        Self {
            start,
            end: EntryEnd::Ongoing,
        }
    }

    pub fn ended(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start,
            end: EntryEnd::Ended(end),
        }
    }

    /// Parses a period from raw `startDate`/`endDate` literals.
    pub fn parse(start: &str, end: Option<&str>) -> Result<Self, PeriodError> {
        let start = parse_entry_date(start).map_err(|source| PeriodError {
            field: "startDate",
            source,
        })?;
        let end = match end {
            None => EntryEnd::Ongoing,
            Some(value) => EntryEnd::Ended(parse_entry_date(value).map_err(|source| {
                PeriodError {
                    field: "endDate",
                    source,
                }
            })?),
        };
        Ok(Self { start, end })
    }

    pub fn is_ongoing(&self) -> bool {
        matches!(self.end, EntryEnd::Ongoing)
    }

    /// Returns whether the recorded end precedes the start.
    pub fn is_reversed(&self) -> bool {
        matches!(self.end, EntryEnd::Ended(end) if end < self.start)
    }

    /// Absolute span in milliseconds; ongoing periods are measured up to `now`.
    pub fn elapsed_millis(&self, now: DateTime<Utc>) -> i64 {
        let start = midnight_millis(self.start);
        let end = match self.end {
            EntryEnd::Ongoing => now.timestamp_millis(),
            EntryEnd::Ended(date) => midnight_millis(date),
        };
        (end - start).abs()
    }

    /// Span in 30-day months, rounding any partial month up.
    pub fn approx_months(&self, now: DateTime<Utc>) -> u64 {
        let elapsed = self.elapsed_millis(now).unsigned_abs();
        elapsed.div_ceil(APPROX_MONTH_MILLIS.unsigned_abs())
    }
}

/// Rejected period literal, tagged with the wire field it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodError {
    pub field: &'static str,
    pub source: DateParseError,
}

impl Display for PeriodError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid {}: {}", self.field, self.source)
    }
}

impl Error for PeriodError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WirePeriod {
    start_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    end_date: Option<String>,
}

impl TryFrom<WirePeriod> for EntryPeriod {
    type Error = PeriodError;

    fn try_from(value: WirePeriod) -> Result<Self, Self::Error> {
        Self::parse(&value.start_date, value.end_date.as_deref())
    }
}

impl From<EntryPeriod> for WirePeriod {
    fn from(value: EntryPeriod) -> Self {
        Self {
            start_date: format_entry_date(value.start),
            end_date: value.end.date().map(format_entry_date),
        }
    }
}
