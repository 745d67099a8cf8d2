//! Canonical calendar-date identifier.
//!
//! # Responsibility
//! - Wrap a calendar date and render it as `YYYY-MM-DD`.
//! - Reject non-canonical strings at the boundary.
//!
//! # Invariants
//! - `DateKey::to_string()` is always a valid input for `DateKey::parse`.
//! - Keys carry no time-of-day or timezone component.

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

pub(crate) const CANONICAL_FORMAT: &str = "%Y-%m-%d";

/// Whether `date` renders as a canonical key (unsigned 4-digit year).
pub(crate) fn has_key_year(date: NaiveDate) -> bool {
    (0..=9999).contains(&date.year())
}

/// Whether `value` is exactly `len` ASCII digits, with `-` at each `dash_at`.
pub(crate) fn matches_digit_shape(value: &str, len: usize, dash_at: &[usize]) -> bool {
    value.len() == len
        && value.bytes().enumerate().all(|(idx, byte)| {
            if dash_at.contains(&idx) {
                byte == b'-'
            } else {
                byte.is_ascii_digit()
            }
        })
}

/// Identifier of one journal day, serialized as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateKey(NaiveDate);

impl DateKey {
    /// Key for the given calendar date.
    ///
    /// Callers keep dates within years 0000..=9999; `DayCursor` never
    /// leaves that range.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Key for the current local calendar date.
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    /// Parses a canonical `YYYY-MM-DD` key.
    ///
    /// Only the canonical 10-character form is accepted; use
    /// `calendar::parse_date_input` for the looser "jump to date" formats.
    pub fn parse(value: &str) -> Option<Self> {
        if !matches_digit_shape(value, 10, &[4, 7]) {
            return None;
        }
        NaiveDate::parse_from_str(value, CANONICAL_FORMAT)
            .ok()
            .map(Self)
    }
}

impl From<NaiveDate> for DateKey {
    fn from(value: NaiveDate) -> Self {
        Self(value)
    }
}

impl Display for DateKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(CANONICAL_FORMAT))
    }
}

/// Error returned when a string is not a canonical `YYYY-MM-DD` key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidDateKey(pub String);

impl Display for InvalidDateKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid date key `{}`; expected YYYY-MM-DD", self.0)
    }
}

impl Error for InvalidDateKey {}

impl FromStr for DateKey {
    type Err = InvalidDateKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| InvalidDateKey(s.to_string()))
    }
}
