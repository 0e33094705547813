//! Command history settings and filtering.

use std::path::PathBuf;

use crate::config::AppConfig;

/// Configuration for command history.
#[derive(Debug, Clone)]
pub struct HistoryConfig {
    /// Path to the history file.
    pub path: PathBuf,
    /// Maximum number of entries to keep.
    pub max_entries: usize,
    /// Skip an entry identical to the previous one.
    pub ignore_dups: bool,
    /// Skip entries typed with a leading space.
    pub ignore_space: bool,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("history"),
            max_entries: 1000,
            ignore_dups: true,
            ignore_space: true,
        }
    }
}

impl HistoryConfig {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            ..Default::default()
        }
    }

    pub fn with_max_entries(mut self, max: usize) -> Self {
        self.max_entries = max;
        self
    }

    pub fn with_ignore_dups(mut self, ignore: bool) -> Self {
        self.ignore_dups = ignore;
        self
    }

    pub fn from_app_config(config: &AppConfig) -> Self {
        Self::new(config.history_file.clone()).with_max_entries(config.history_size)
    }
}

/// Decides which command lines are worth keeping in history.
pub struct HistoryFilter {
    config: HistoryConfig,
    last_entry: Option<String>,
}

impl HistoryFilter {
    pub fn new(config: HistoryConfig) -> Self {
        Self {
            config,
            last_entry: None,
        }
    }

    /// Takes the line as typed, before trimming.
    pub fn should_add(&mut self, raw: &str) -> bool {
        let entry = raw.trim();
        if entry.is_empty() {
            return false;
        }

        if self.config.ignore_space && raw.starts_with(char::is_whitespace) {
            return false;
        }

        if self.config.ignore_dups && self.last_entry.as_deref() == Some(entry) {
            return false;
        }

        self.last_entry = Some(entry.to_string());
        true
    }
}
