//! Runtime configuration for the journal store and logging.
//!
//! # Responsibility
//! - Resolve database path, log directory and log level from the environment.
//!
//! # Invariants
//! - Blank environment values are treated as unset.
//! - `log_level` is always one of `trace|debug|info|warn|error`.

use crate::logging::{default_log_level, normalize_level};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const DB_PATH_ENV: &str = "PROGRESS_DB_PATH";
pub const LOG_DIR_ENV: &str = "PROGRESS_LOG_DIR";
pub const LOG_LEVEL_ENV: &str = "PROGRESS_LOG_LEVEL";

const DB_FILE_NAME: &str = "progress.sqlite3";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidLogLevel(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLogLevel(message) => write!(f, "invalid log level: {message}"),
        }
    }
}

impl Error for ConfigError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    /// SQLite file holding the notes.
    pub db_path: PathBuf,
    /// Rolling log directory; logging stays off when `None`.
    pub log_dir: Option<PathBuf>,
    pub log_level: &'static str,
}

impl CoreConfig {
    /// Resolves configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolves configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_blank = |name: &str| {
            lookup(name)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let db_path = non_blank(DB_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| default_db_path(non_blank("HOME")));
        let log_dir = non_blank(LOG_DIR_ENV).map(PathBuf::from);
        let log_level = match non_blank(LOG_LEVEL_ENV) {
            Some(raw) => normalize_level(&raw).map_err(ConfigError::InvalidLogLevel)?,
            None => default_log_level(),
        };

        Ok(Self {
            db_path,
            log_dir,
            log_level,
        })
    }

    /// Overrides the log level, e.g. from a command-line flag.
    pub fn set_log_level(&mut self, level: &str) -> Result<(), ConfigError> {
        self.log_level = normalize_level(level).map_err(ConfigError::InvalidLogLevel)?;
        Ok(())
    }
}

fn default_db_path(home: Option<String>) -> PathBuf {
    match home {
        Some(home) => PathBuf::from(home)
            .join(".local")
            .join("share")
            .join("progress")
            .join(DB_FILE_NAME),
        None => std::env::temp_dir().join(DB_FILE_NAME),
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, CoreConfig};
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn explicit_values_win() {
        let config = CoreConfig::from_lookup(lookup(&[
            ("PROGRESS_DB_PATH", "/data/journal.sqlite3"),
            ("PROGRESS_LOG_DIR", "/var/log/progress"),
            ("PROGRESS_LOG_LEVEL", "WARN"),
        ]))
        .expect("valid config");
        assert_eq!(config.db_path, PathBuf::from("/data/journal.sqlite3"));
        assert_eq!(config.log_dir, Some(PathBuf::from("/var/log/progress")));
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = CoreConfig::from_lookup(lookup(&[
            ("HOME", "/home/someone"),
            ("PROGRESS_DB_PATH", "  "),
            ("PROGRESS_LOG_DIR", ""),
        ]))
        .expect("valid config");
        assert_eq!(
            config.db_path,
            PathBuf::from("/home/someone/.local/share/progress/progress.sqlite3")
        );
        assert_eq!(config.log_dir, None);
    }

    #[test]
    fn unknown_log_level_is_rejected() {
        let err = CoreConfig::from_lookup(lookup(&[("PROGRESS_LOG_LEVEL", "loud")]))
            .expect_err("bad level");
        assert!(matches!(err, ConfigError::InvalidLogLevel(_)));
    }

    #[test]
    fn set_log_level_normalizes_override() {
        let mut config = CoreConfig::from_lookup(lookup(&[])).expect("defaults");
        config.set_log_level(" Error ").expect("valid level");
        assert_eq!(config.log_level, "error");
        assert!(config.set_log_level("chatty").is_err());
    }
}
