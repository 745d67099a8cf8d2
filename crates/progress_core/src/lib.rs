//! Core domain logic for the Progress daily journal.
//! This crate is the single source of truth for note and task-summary rules.

pub mod calendar;
pub mod clock;
pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use calendar::{
    display_date, parse_date_input, weekday_short, DateInputFormat, DATE_INPUT_FORMATS,
};
pub use clock::{Clock, SystemClock};
pub use config::{ConfigError, CoreConfig};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::date_key::DateKey;
pub use model::note::Note;
pub use model::task_summary::{summarize_tasks, TaskSummary};
pub use repo::note_repo::{
    NoteRepository, RepoError, RepoResult, SqliteNoteRepository, UpsertKind,
};
pub use service::day_cursor::DayCursor;
pub use service::note_service::{NoteService, UpsertOutcome};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
