//! Show command implementation.

use crate::error::Result;
use crate::shell::command::{Command, CommandResult, ShellContext};

use super::show_records;

/// Prints every record in storage order.
pub struct ShowCommand;

impl Command for ShowCommand {
    fn name(&self) -> &str {
        "show"
    }

    fn menu_number(&self) -> Option<u8> {
        Some(5)
    }

    fn aliases(&self) -> &[&str] {
        &["list", "ls"]
    }

    fn description(&self) -> &str {
        "Show all records"
    }

    fn usage(&self) -> &str {
        "show"
    }

    fn execute(&self, _args: &[&str], ctx: &mut ShellContext) -> Result<CommandResult> {
        let records = ctx.book.session()?.records()?;
        log::debug!("Showing {} records", records.len());

        let refs: Vec<_> = records.iter().collect();
        show_records(ctx.console, &refs);
        Ok(CommandResult::ok())
    }
}
