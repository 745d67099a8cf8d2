//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - At most one note row exists per date key (primary key).
//! - Read paths reject malformed persisted rows instead of masking them.

pub mod note_repo;
