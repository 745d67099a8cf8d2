//! Note use-case service.
//!
//! # Responsibility
//! - Provide date-keyed get/load/upsert APIs for the journal editor.
//! - Recompute the cached task summary on every write.
//!
//! # Invariants
//! - Every write stamps `last_modified` from the injected clock.
//! - Empty content never creates a note; it may still clear an existing one.

use crate::clock::{Clock, SystemClock};
use crate::model::date_key::DateKey;
use crate::model::note::Note;
use crate::repo::note_repo::{NoteRepository, RepoResult, UpsertKind};
use crate::model::task_summary::{summarize_tasks, TaskSummary};
use log::{error, info};
use std::time::Instant;

/// Result of one editor save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpsertOutcome {
    Created(Note),
    Updated(Note),
    /// Empty content for a day without a note; nothing was stored.
    Skipped,
}

impl UpsertOutcome {
    /// Note as persisted by this save, if any.
    pub fn note(&self) -> Option<&Note> {
        match self {
            Self::Created(note) | Self::Updated(note) => Some(note),
            Self::Skipped => None,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Created(_) => "created",
            Self::Updated(_) => "updated",
            Self::Skipped => "skipped",
        }
    }
}

/// Note service facade over repository implementations.
pub struct NoteService<R: NoteRepository, C: Clock = SystemClock> {
    repo: R,
    clock: C,
}

impl<R: NoteRepository> NoteService<R> {
    /// Creates a service stamping writes with the system clock.
    pub fn new(repo: R) -> Self {
        Self::with_clock(repo, SystemClock)
    }
}

impl<R: NoteRepository, C: Clock> NoteService<R, C> {
    pub fn with_clock(repo: R, clock: C) -> Self {
        Self { repo, clock }
    }

    /// Gets the stored note for one day.
    pub fn get_note(&self, date_key: &DateKey) -> RepoResult<Option<Note>> {
        self.repo.get_note(date_key)
    }

    /// Loads editor content for one day; a day without a note is empty.
    pub fn load_content(&self, date_key: &DateKey) -> RepoResult<String> {
        Ok(self
            .repo
            .get_note(date_key)?
            .map(|note| note.content)
            .unwrap_or_default())
    }

    /// Task summary for one day, recomputed from stored content.
    pub fn summary_for(&self, date_key: &DateKey) -> RepoResult<TaskSummary> {
        Ok(self
            .repo
            .get_note(date_key)?
            .map(|note| note.summary())
            .unwrap_or_default())
    }

    /// Saves editor content for one day.
    ///
    /// Updates the existing note in place, creates one when `content` is
    /// non-empty, and otherwise leaves storage untouched.
    pub fn upsert_note(
        &mut self,
        date_key: &DateKey,
        content: impl Into<String>,
    ) -> RepoResult<UpsertOutcome> {
        let started_at = Instant::now();
        let content = content.into();
        let summary = summarize_tasks(content.as_str());
        let note = Note {
            date_key: *date_key,
            content,
            last_modified: self.clock.now_epoch_ms(),
            task_summary: summary.to_string(),
        };

        let kind = match self.repo.upsert_note(&note) {
            Ok(kind) => kind,
            Err(err) => {
                error!(
                    "event=note_upsert module=service status=error date_key={} duration_ms={} error={}",
                    date_key,
                    started_at.elapsed().as_millis(),
                    err
                );
                return Err(err);
            }
        };

        let outcome = match kind {
            UpsertKind::Inserted => UpsertOutcome::Created(note),
            UpsertKind::Updated => UpsertOutcome::Updated(note),
            UpsertKind::Skipped => UpsertOutcome::Skipped,
        };
        info!(
            "event=note_upsert module=service status=ok outcome={} date_key={} tasks_total={} tasks_done={} duration_ms={}",
            outcome.label(),
            date_key,
            summary.total,
            summary.done,
            started_at.elapsed().as_millis()
        );
        Ok(outcome)
    }
}
