//! Journal note record.
//!
//! # Invariants
//! - `task_summary` is derived from `content`; writers recompute it together.
//! - `last_modified` is Unix epoch milliseconds of the latest write.

use crate::model::date_key::DateKey;
use crate::model::task_summary::{summarize_tasks, TaskSummary};
use serde::{Deserialize, Serialize};

/// One note per calendar day.
///
/// Serialized with the persisted record field names
/// (`dateKey`, `content`, `lastModified`, `taskSummary`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub date_key: DateKey,
    /// Free-form note body.
    pub content: String,
    pub last_modified: i64,
    /// Cached `"{total} total, {done} done, {remaining} remain"` string.
    pub task_summary: String,
}

impl Note {
    /// Builds a note with the summary computed from `content`.
    pub fn new(date_key: DateKey, content: impl Into<String>, last_modified: i64) -> Self {
        let content = content.into();
        let task_summary = summarize_tasks(content.as_str()).to_string();
        Self {
            date_key,
            content,
            last_modified,
            task_summary,
        }
    }

    /// Recomputes the task summary from the current content.
    pub fn summary(&self) -> TaskSummary {
        summarize_tasks(self.content.as_str())
    }
}
