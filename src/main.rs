use anyhow::{Context, Result};
use clap::Parser;
use std::process::ExitCode;

use phonebook::cli::Cli;
use phonebook::config::{self, AppConfig, CONFIG_FILE};
use phonebook::{LogConfig, PhoneBook, Shell, ShellConfig, init_logging};

fn load_config(cli: &Cli) -> Result<AppConfig> {
    let data_dir = config::data_dir()?;
    let path = cli
        .config
        .clone()
        .unwrap_or_else(|| data_dir.join(CONFIG_FILE));
    let config = AppConfig::load(&path)?.resolve(&data_dir);
    Ok(cli.apply(config))
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;

    match LogConfig::from_app_config(&config).and_then(|c| init_logging(&c)) {
        Ok(()) => log::info!("Starting phonebook, database {}", config.database.display()),
        Err(e) => eprintln!("Warning: logging disabled: {:#}", e),
    }

    let mut book = PhoneBook::open(&config.database)
        .with_context(|| format!("Failed to open {}", config.database.display()))?;

    Shell::with_config(ShellConfig::from_app_config(&config))
        .run(&mut book)
        .context("Shell stopped")?;

    log::info!("Phonebook closed");
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::from(1)
        }
    }
}
