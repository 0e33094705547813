use clap::Parser;
use std::path::PathBuf;

use crate::config::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "phonebook")]
#[command(version = "0.1")]
#[command(about = "A personal phone book for the terminal", long_about = None)]
pub struct Cli {
    /// Config file (defaults to ~/.phonebook/config.json)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// SQLite database file
    #[arg(short, long)]
    pub database: Option<PathBuf>,

    /// Log level for the log file (error, warn, info, debug, trace)
    #[arg(short, long)]
    pub log_level: Option<String>,

    /// Do not clear the terminal between commands
    #[arg(long)]
    pub no_clear: bool,
}

impl Cli {
    /// Applies command-line overrides on top of the loaded config.
    pub fn apply(&self, mut config: AppConfig) -> AppConfig {
        if let Some(database) = &self.database {
            config.database = database.clone();
        }
        if let Some(level) = &self.log_level {
            config.log_level = level.clone();
        }
        if self.no_clear {
            config.clear_screen = false;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from(["phonebook", "--database", "/tmp/b.sqlite", "--no-clear"])
            .unwrap();
        let config = cli.apply(AppConfig::default());

        assert_eq!(config.database, PathBuf::from("/tmp/b.sqlite"));
        assert!(!config.clear_screen);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_no_overrides() {
        let cli = Cli::try_parse_from(["phonebook"]).unwrap();
        assert_eq!(cli.apply(AppConfig::default()), AppConfig::default());
    }
}
