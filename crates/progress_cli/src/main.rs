//! Command-line front end for the Progress daily journal.
//!
//! # Responsibility
//! - Pick the open day (today or `--date`), then load, save or summarize
//!   its note through `progress_core`.
//! - Keep all note rules inside core; this binary only wires and prints.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::warn;
use progress_core::db::open_db;
use progress_core::{
    core_version, init_logging, CoreConfig, DayCursor, NoteService, SqliteNoteRepository,
    UpsertOutcome,
};
use std::io::Read;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "progress",
    version = core_version(),
    about = "One plain-text note per day, with a running checklist summary"
)]
struct Args {
    /// Day to open: YYYY-MM-DD, YYYYMMDD, YYYYMM-DD or YYYY-MMDD. Defaults to today.
    #[arg(long, global = true)]
    date: Option<String>,

    /// SQLite database file (overrides PROGRESS_DB_PATH).
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Absolute directory for rolling logs (overrides PROGRESS_LOG_DIR).
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    /// trace|debug|info|warn|error (overrides PROGRESS_LOG_LEVEL).
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the day's title, note and task summary.
    Show,
    /// Save the day's note; reads stdin when --content is absent.
    Write {
        #[arg(long)]
        content: Option<String>,
    },
    /// Print only the task summary line.
    Summary,
    /// Step one day back or forward and print the navigation bar.
    Nav {
        #[arg(long, conflicts_with = "next")]
        prev: bool,
        #[arg(long)]
        next: bool,
    },
    /// Print the stored note as JSON; prints nothing for an empty day.
    Export,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = resolve_config(&args)?;

    if let Some(log_dir) = config.log_dir.as_ref() {
        if let Err(err) = init_logging(config.log_level, log_dir) {
            eprintln!("warning: logging disabled: {err}");
        }
    }

    let mut cursor = DayCursor::today();
    if let Some(input) = args.date.as_deref() {
        if !cursor.go_to(input) {
            warn!("event=date_jump module=cli status=ignored reason=unparseable_input");
            eprintln!("warning: unrecognized date `{input}`; staying on {}", cursor.date_key());
        }
    }

    let mut conn = open_db(&config.db_path)
        .with_context(|| format!("failed to open journal at {}", config.db_path.display()))?;
    let repo = SqliteNoteRepository::try_new(&mut conn).context("journal schema is not ready")?;
    let mut service = NoteService::new(repo);

    match args.command {
        Command::Show => {
            let key = cursor.date_key();
            let content = service.load_content(&key)?;
            println!("{}", cursor.title());
            println!();
            if !content.is_empty() {
                println!("{content}");
                println!();
            }
            println!("{}", service.summary_for(&key)?);
        }
        Command::Write { content } => {
            let content = match content {
                Some(content) => content,
                None => read_stdin()?,
            };
            let key = cursor.date_key();
            let outcome = service
                .upsert_note(&key, content)
                .with_context(|| format!("failed to save note for {key}"))?;
            match outcome {
                UpsertOutcome::Created(note) => {
                    println!("created {key}: {}", note.task_summary);
                }
                UpsertOutcome::Updated(note) => {
                    println!("updated {key}: {}", note.task_summary);
                }
                UpsertOutcome::Skipped => println!("nothing to save for {key}"),
            }
        }
        Command::Summary => {
            println!("{}", service.summary_for(&cursor.date_key())?);
        }
        Command::Nav { prev, next } => {
            if prev {
                cursor.previous_day();
            } else if next {
                cursor.next_day();
            }
            println!(
                "< {} | {} | {} >",
                cursor.previous_weekday_hint(),
                cursor.title(),
                cursor.next_weekday_hint()
            );
            println!("{}", service.summary_for(&cursor.date_key())?);
        }
        Command::Export => {
            if let Some(note) = service.get_note(&cursor.date_key())? {
                println!("{}", serde_json::to_string_pretty(&note)?);
            }
        }
    }

    Ok(())
}

fn resolve_config(args: &Args) -> Result<CoreConfig> {
    let mut config = CoreConfig::from_env().context("invalid environment configuration")?;
    if let Some(db) = args.db.clone() {
        config.db_path = db;
    }
    if let Some(log_dir) = args.log_dir.clone() {
        config.log_dir = Some(log_dir);
    }
    if let Some(level) = args.log_level.as_deref() {
        config
            .set_log_level(level)
            .context("invalid --log-level")?;
    }
    Ok(config)
}

fn read_stdin() -> Result<String> {
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("failed to read note content from stdin")?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::{Args, Command};
    use clap::Parser;

    #[test]
    fn global_flags_parse_after_subcommand() {
        let args = Args::try_parse_from(["progress", "show", "--date", "20250729"])
            .expect("show should parse");
        assert_eq!(args.date.as_deref(), Some("20250729"));
        assert!(matches!(args.command, Command::Show));
    }

    #[test]
    fn nav_rejects_prev_and_next_together() {
        assert!(Args::try_parse_from(["progress", "nav", "--prev", "--next"]).is_err());
        let args = Args::try_parse_from(["progress", "nav", "--next"]).expect("nav should parse");
        assert!(matches!(
            args.command,
            Command::Nav {
                prev: false,
                next: true
            }
        ));
    }
}
