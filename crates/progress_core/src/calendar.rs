//! Calendar helpers for date display and free-form date input.
//!
//! # Responsibility
//! - Render canonical date keys as human-readable titles.
//! - Parse the "jump to date" input formats accepted by the journal.
//!
//! # Invariants
//! - Input formats are tried in `DATE_INPUT_FORMATS` order; first match wins.
//! - Input must match a format's exact digit/dash layout before chrono sees
//!   it, so signs, short fields and inner spaces are rejected.
//! - Unparseable input yields `None`, never an error.

use crate::model::date_key::{matches_digit_shape, CANONICAL_FORMAT};
use chrono::NaiveDate;

/// One accepted "jump to date" layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateInputFormat {
    /// Human-readable layout, e.g. `YYYY-MM-DD`.
    pub label: &'static str,
    pattern: &'static str,
    dash_at: &'static [usize],
}

impl DateInputFormat {
    fn parse(&self, input: &str) -> Option<NaiveDate> {
        if !matches_digit_shape(input, self.label.len(), self.dash_at) {
            return None;
        }
        NaiveDate::parse_from_str(input, self.pattern).ok()
    }
}

/// Accepted "jump to date" input formats, in the order they are tried.
pub const DATE_INPUT_FORMATS: [DateInputFormat; 4] = [
    DateInputFormat {
        label: "YYYY-MM-DD",
        pattern: "%Y-%m-%d",
        dash_at: &[4, 7],
    },
    DateInputFormat {
        label: "YYYYMMDD",
        pattern: "%Y%m%d",
        dash_at: &[],
    },
    DateInputFormat {
        label: "YYYYMM-DD",
        pattern: "%Y%m-%d",
        dash_at: &[6],
    },
    DateInputFormat {
        label: "YYYY-MMDD",
        pattern: "%Y-%m%d",
        dash_at: &[4],
    },
];

const DISPLAY_FORMAT: &str = "%a, %b %-d, %Y";

/// Formats a `YYYY-MM-DD` key as `"Tue, Jul 29, 2025"`.
///
/// Returns `date_key` unchanged when it is not a valid canonical key.
pub fn display_date(date_key: &str) -> String {
    if !matches_digit_shape(date_key, 10, &[4, 7]) {
        return date_key.to_string();
    }
    match NaiveDate::parse_from_str(date_key, CANONICAL_FORMAT) {
        Ok(date) => date.format(DISPLAY_FORMAT).to_string(),
        Err(_) => date_key.to_string(),
    }
}

/// Parses free-form date input using the accepted formats.
///
/// Surrounding whitespace is ignored.
pub fn parse_date_input(input: &str) -> Option<NaiveDate> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    DATE_INPUT_FORMATS
        .iter()
        .find_map(|format| format.parse(trimmed))
}

/// Abbreviated weekday name (`Mon`, `Tue`, ...).
pub fn weekday_short(date: NaiveDate) -> String {
    date.format("%a").to_string()
}
