//! Quit command implementation.

use crate::error::Result;
use crate::shell::command::{Command, CommandResult, ShellContext};

/// Command to exit the shell.
pub struct QuitCommand;

impl Command for QuitCommand {
    fn name(&self) -> &str {
        "quit"
    }

    fn aliases(&self) -> &[&str] {
        &["exit", "q"]
    }

    fn description(&self) -> &str {
        "Exit the phonebook"
    }

    fn usage(&self) -> &str {
        "quit"
    }

    fn help(&self) -> &str {
        "Exit the phonebook. Every command saves its changes as it\n\
         finishes, so nothing is lost.\n\n\
         Examples:\n  \
           quit\n  \
           exit\n  \
           q"
    }

    fn execute(&self, _args: &[&str], _ctx: &mut ShellContext) -> Result<CommandResult> {
        log::info!("User requested exit");
        Ok(CommandResult::Exit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;
    use crate::storage::PhoneBook;

    #[test]
    fn test_quit_command() {
        let mut book = PhoneBook::open_in_memory().unwrap();
        let mut console = ScriptedConsole::default();
        let mut ctx = ShellContext::new(&mut book, &mut console);

        let result = QuitCommand.execute(&[], &mut ctx).unwrap();
        assert!(matches!(result, CommandResult::Exit));
    }
}
