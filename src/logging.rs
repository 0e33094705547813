//! Logging for the phone book.
//!
//! Everything goes to a log file with timestamps; warnings and errors are
//! also echoed to the terminal when there is one.

use anyhow::{Result, anyhow};
use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, SharedLogger, TermLogger, TerminalMode, WriteLogger,
};
use std::fs::OpenOptions;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use crate::config::AppConfig;

/// Configuration for the logging system.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Path to the log file.
    pub path: PathBuf,
    /// Minimum level written to the file.
    pub level: LevelFilter,
    /// Size in bytes after which the file is rotated (0 = never).
    pub max_size: u64,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("phonebook.log"),
            level: LevelFilter::Info,
            max_size: 5 * 1024 * 1024,
        }
    }
}

impl LogConfig {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            ..Default::default()
        }
    }

    pub fn with_level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    pub fn with_max_size(mut self, max_size: u64) -> Self {
        self.max_size = max_size;
        self
    }

    /// Log settings taken from the application config.
    pub fn from_app_config(config: &AppConfig) -> Result<Self> {
        Ok(Self::new(config.log_file.clone()).with_level(config.log_level()?))
    }
}

/// Installs the global logger.
///
/// The file logger records at the configured level with RFC 3339
/// timestamps. The terminal logger only shows warnings and above, and only
/// when stderr is a terminal.
pub fn init_logging(config: &LogConfig) -> Result<()> {
    if let Some(parent) = config.path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    if needs_rotation(config) {
        rotate_log(&config.path)?;
    }

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.path)
        .map_err(|e| anyhow!("Failed to open log file: {}", e))?;

    let file_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Off)
        .set_location_level(LevelFilter::Debug)
        .build();

    let term_config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_location_level(LevelFilter::Off)
        .build();

    let mut loggers: Vec<Box<dyn SharedLogger>> =
        vec![WriteLogger::new(config.level, file_config, log_file)];

    if std::io::stderr().is_terminal() {
        loggers.push(TermLogger::new(
            LevelFilter::Warn,
            term_config,
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ));
    }

    CombinedLogger::init(loggers).map_err(|e| anyhow!("Failed to initialize logger: {}", e))?;

    log::info!("Logging initialized at level {:?}", config.level);
    log::debug!("Log file: {}", config.path.display());

    Ok(())
}

fn needs_rotation(config: &LogConfig) -> bool {
    config.max_size > 0
        && std::fs::metadata(&config.path).is_ok_and(|m| m.len() > config.max_size)
}

/// Renames the log file with a timestamp suffix.
fn rotate_log(path: &Path) -> Result<PathBuf> {
    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let rotated_name = format!(
        "{}.{}",
        path.file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("phonebook.log"),
        timestamp
    );

    let rotated_path = path.with_file_name(rotated_name);
    std::fs::rename(path, &rotated_path)?;
    Ok(rotated_path)
}

/// Runs `f` and logs how long it took.
pub fn timed<T, F: FnOnce() -> T>(operation: &str, f: F) -> T {
    let start = std::time::Instant::now();
    let result = f();
    log::debug!("{} completed in {:?}", operation, start.elapsed());
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_log_config_default() {
        let config = LogConfig::default();
        assert_eq!(config.level, LevelFilter::Info);
        assert_eq!(config.max_size, 5 * 1024 * 1024);
    }

    #[test]
    fn test_log_config_builder() {
        let config = LogConfig::new(PathBuf::from("/tmp/test.log"))
            .with_level(LevelFilter::Trace)
            .with_max_size(1024);

        assert_eq!(config.path, PathBuf::from("/tmp/test.log"));
        assert_eq!(config.level, LevelFilter::Trace);
        assert_eq!(config.max_size, 1024);
    }

    #[test]
    fn test_from_app_config() {
        let app = AppConfig {
            log_file: PathBuf::from("/tmp/pb.log"),
            log_level: "warn".to_string(),
            ..Default::default()
        };
        let config = LogConfig::from_app_config(&app).unwrap();
        assert_eq!(config.path, PathBuf::from("/tmp/pb.log"));
        assert_eq!(config.level, LevelFilter::Warn);
    }

    #[test]
    fn test_rotation() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("phonebook.log");
        std::fs::write(&path, "x".repeat(64)).unwrap();

        let config = LogConfig::new(path.clone()).with_max_size(16);
        assert!(needs_rotation(&config));

        let rotated = rotate_log(&path).unwrap();
        assert!(!path.exists());
        assert!(rotated.exists());
        assert!(!needs_rotation(&config));
    }

    #[test]
    fn test_timed_operation() {
        assert_eq!(timed("answer", || 42), 42);
    }
}
