//! Domain model for date-keyed journal notes.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//!
//! # Invariants
//! - Every note is identified by exactly one canonical `DateKey`.
//! - Notes are never deleted by core; emptied notes stay persisted.

pub mod date_key;
pub mod note;
pub mod task_summary;
