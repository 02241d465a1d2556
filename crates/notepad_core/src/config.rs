//! Host-supplied configuration.
//!
//! The embedding shell decides where data lives; core only derives paths.

use crate::logging::default_log_level;
use std::path::{Path, PathBuf};

pub const DEFAULT_DB_FILE_NAME: &str = "notepad.sqlite3";
const LOG_DIR_NAME: &str = "logs";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    /// Root directory for the storage database and logs.
    pub data_dir: PathBuf,
    pub db_file_name: String,
    /// One of `trace|debug|info|warn|error`.
    pub log_level: String,
}

impl CoreConfig {
    /// Defaults: `notepad.sqlite3`, build-mode log level.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            db_file_name: DEFAULT_DB_FILE_NAME.to_string(),
            log_level: default_log_level().to_string(),
        }
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    pub fn with_db_file_name(mut self, name: impl Into<String>) -> Self {
        self.db_file_name = name.into();
        self
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join(&self.db_file_name)
    }

    pub fn log_dir(&self) -> PathBuf {
        self.data_dir.join(LOG_DIR_NAME)
    }
}
