//! Date-keyed note repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide exact-match lookup and upsert over `daily_notes`.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - A missing note is `Ok(None)`, never an error.
//! - Upsert never inserts a note with empty content.
//! - Upsert never deletes a row, even when content becomes empty.
//! - Existence check and write share one IMMEDIATE transaction.

use crate::db::DbError;
use crate::model::date_key::DateKey;
use crate::model::note::Note;
use rusqlite::{params, Connection, OptionalExtension, Row, TransactionBehavior};
use std::error::Error;
use std::fmt::{Display, Formatter};

const NOTES_TABLE: &str = "daily_notes";
const NOTES_COLUMNS: [&str; 4] = ["date_key", "content", "task_summary", "last_modified"];

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for note persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidData(String),
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted note data: {message}"),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing; run migrations first")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` is missing")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// What an upsert did to storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertKind {
    /// No row existed; a new one was created.
    Inserted,
    /// An existing row was overwritten.
    Updated,
    /// No row existed and content was empty; storage is unchanged.
    Skipped,
}

/// Repository interface for date-keyed notes.
pub trait NoteRepository {
    /// Gets the note stored for `date_key`, if any.
    fn get_note(&self, date_key: &DateKey) -> RepoResult<Option<Note>>;
    /// Updates the note for `note.date_key` or inserts it when non-empty.
    fn upsert_note(&mut self, note: &Note) -> RepoResult<UpsertKind>;
}

/// SQLite-backed note repository.
pub struct SqliteNoteRepository<'conn> {
    conn: &'conn mut Connection,
}

impl<'conn> SqliteNoteRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn mut Connection) -> RepoResult<Self> {
        ensure_note_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl NoteRepository for SqliteNoteRepository<'_> {
    fn get_note(&self, date_key: &DateKey) -> RepoResult<Option<Note>> {
        let note = self
            .conn
            .query_row(
                "SELECT
                    date_key,
                    content,
                    task_summary,
                    last_modified
                 FROM daily_notes
                 WHERE date_key = ?1;",
                [date_key.to_string()],
                |row| Ok(parse_note_row(row)),
            )
            .optional()?;

        note.transpose()
    }

    fn upsert_note(&mut self, note: &Note) -> RepoResult<UpsertKind> {
        let date_key = note.date_key.to_string();
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let changed = tx.execute(
            "UPDATE daily_notes
             SET
                content = ?2,
                task_summary = ?3,
                last_modified = ?4
             WHERE date_key = ?1;",
            params![
                date_key.as_str(),
                note.content.as_str(),
                note.task_summary.as_str(),
                note.last_modified,
            ],
        )?;

        let kind = if changed > 0 {
            UpsertKind::Updated
        } else if note.content.is_empty() {
            UpsertKind::Skipped
        } else {
            tx.execute(
                "INSERT INTO daily_notes (
                    date_key,
                    content,
                    task_summary,
                    last_modified
                ) VALUES (?1, ?2, ?3, ?4);",
                params![
                    date_key.as_str(),
                    note.content.as_str(),
                    note.task_summary.as_str(),
                    note.last_modified,
                ],
            )?;
            UpsertKind::Inserted
        };

        tx.commit()?;
        Ok(kind)
    }
}

fn parse_note_row(row: &Row<'_>) -> RepoResult<Note> {
    let key_text: String = row.get("date_key")?;
    let date_key = DateKey::parse(&key_text).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "invalid date key `{key_text}` in daily_notes.date_key"
        ))
    })?;

    Ok(Note {
        date_key,
        content: row.get("content")?,
        last_modified: row.get("last_modified")?,
        task_summary: row.get("task_summary")?,
    })
}

fn ensure_note_connection_ready(conn: &Connection) -> RepoResult<()> {
    if !table_exists(conn, NOTES_TABLE)? {
        return Err(RepoError::MissingRequiredTable(NOTES_TABLE));
    }

    for column in NOTES_COLUMNS {
        if !table_has_column(conn, NOTES_TABLE, column)? {
            return Err(RepoError::MissingRequiredColumn {
                table: NOTES_TABLE,
                column,
            });
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> RepoResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}
