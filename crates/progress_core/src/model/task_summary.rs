//! Checklist statistics derived from plain note text.
//!
//! # Responsibility
//! - Detect markdown-style task lines (`- [ ]`, `- [x]`, `- [X]`).
//! - Produce `(total, done, remaining)` and the footer display string.
//!
//! # Invariants
//! - Pure function of the input text.
//! - `done <= total`, so `remaining` never underflows.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

// Matched against a trimmed line; text after the closing bracket is ignored.
static TASK_LINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*-\s*\[([ xX]?)\]").expect("valid task line regex"));

/// Checklist counts for one note.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSummary {
    pub total: u32,
    pub done: u32,
    pub remaining: u32,
}

impl Display for TaskSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} total, {} done, {} remain",
            self.total, self.done, self.remaining
        )
    }
}

/// Counts task lines in `text`.
///
/// Rules:
/// - Lines break on `\n`, `\r`, NEL, LINE SEPARATOR and PARAGRAPH SEPARATOR.
/// - Each line is trimmed before matching.
/// - A task line starts with `-`, optional whitespace, then `[]`, `[ ]`,
///   `[x]` or `[X]`.
/// - Only `x`/`X` marks a task as done.
pub fn summarize_tasks(text: &str) -> TaskSummary {
    let mut total = 0u32;
    let mut done = 0u32;

    for line in text.split(is_line_break) {
        let Some(caps) = TASK_LINE_RE.captures(line.trim()) else {
            continue;
        };
        total += 1;
        if caps
            .get(1)
            .is_some_and(|mark| mark.as_str().eq_ignore_ascii_case("x"))
        {
            done += 1;
        }
    }

    TaskSummary {
        total,
        done,
        remaining: total - done,
    }
}

fn is_line_break(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{85}' | '\u{2028}' | '\u{2029}')
}
