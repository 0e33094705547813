use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the config file inside the data directory.
pub const CONFIG_FILE: &str = "config.json";

/// Application settings, read from `config.json` in the data directory.
///
/// Relative paths are resolved against the data directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub database: PathBuf,
    pub history_file: PathBuf,
    pub history_size: usize,
    pub log_file: PathBuf,
    pub log_level: String,
    /// Clear the terminal before each command.
    pub clear_screen: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database: PathBuf::from("phonebook.sqlite"),
            history_file: PathBuf::from("history"),
            history_size: 1000,
            log_file: PathBuf::from("phonebook.log"),
            log_level: "info".to_string(),
            clear_screen: true,
        }
    }
}

impl AppConfig {
    /// Reads the config at `path`, falling back to defaults when the file
    /// does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: AppConfig = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        Ok(config)
    }

    /// Makes every relative path absolute under `data_dir`.
    pub fn resolve(mut self, data_dir: &Path) -> Self {
        for path in [
            &mut self.database,
            &mut self.history_file,
            &mut self.log_file,
        ] {
            if path.is_relative() {
                *path = data_dir.join(&*path);
            }
        }
        self
    }

    pub fn log_level(&self) -> Result<log::LevelFilter> {
        self.log_level
            .parse()
            .map_err(|_| anyhow!("Unknown log level '{}'", self.log_level))
    }
}

/// `~/.phonebook`, created if missing.
pub fn data_dir() -> Result<PathBuf> {
    let home = dirs_next::home_dir().ok_or_else(|| anyhow!("Could not determine home directory"))?;
    let dir = home.join(".phonebook");
    if !dir.exists() {
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
    }
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = AppConfig::load(&temp_dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE);
        std::fs::write(&path, r#"{ "log_level": "debug", "clear_screen": false }"#).unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.log_level, "debug");
        assert!(!config.clear_screen);
        assert_eq!(config.history_size, 1000);
        assert_eq!(config.log_level().unwrap(), log::LevelFilter::Debug);
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "not json").unwrap();
        assert!(AppConfig::load(&path).is_err());
    }

    #[test]
    fn test_resolve_relative_paths() {
        let config = AppConfig {
            database: PathBuf::from("/var/book.sqlite"),
            ..Default::default()
        }
        .resolve(Path::new("/home/user/.phonebook"));

        assert_eq!(config.database, PathBuf::from("/var/book.sqlite"));
        assert_eq!(
            config.history_file,
            PathBuf::from("/home/user/.phonebook/history")
        );
    }

    #[test]
    fn test_bad_log_level() {
        let config = AppConfig {
            log_level: "loud".to_string(),
            ..Default::default()
        };
        assert!(config.log_level().is_err());
    }
}
