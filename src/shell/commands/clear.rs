//! Clear command implementation.

use crate::error::Result;
use crate::shell::command::{Command, CommandResult, ShellContext};

const CONFIRM_PROMPT: &str = "Are you sure you want to remove all records? (yes/no) >> ";

/// Deletes every record after confirmation.
pub struct ClearCommand;

impl Command for ClearCommand {
    fn name(&self) -> &str {
        "clear"
    }

    fn menu_number(&self) -> Option<u8> {
        Some(12)
    }

    fn aliases(&self) -> &[&str] {
        &["wipe"]
    }

    fn description(&self) -> &str {
        "Remove all records"
    }

    fn usage(&self) -> &str {
        "clear"
    }

    fn help(&self) -> &str {
        "Remove every record from the phonebook.\n\n\
         Only an answer of 'yes' removes anything."
    }

    fn execute(&self, _args: &[&str], ctx: &mut ShellContext) -> Result<CommandResult> {
        let answer = ctx.console.read_line(CONFIRM_PROMPT)?;
        if !answer.eq_ignore_ascii_case("yes") {
            return Ok(CommandResult::success("Nothing was removed."));
        }

        let session = ctx.book.session()?;
        let removed = session.delete_all()?;
        session.commit()?;
        log::info!("Cleared phonebook ({} records)", removed);
        Ok(CommandResult::success(format!("{} records were removed.", removed)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;
    use crate::shell::commands::fixtures::{book_with, person};

    fn book() -> crate::storage::PhoneBook {
        book_with(&[
            person("Anna", "Lee", "89990000001", None),
            person("Bob", "Stone", "89990000002", None),
        ])
    }

    #[test]
    fn test_clear_confirmed() {
        let mut book = book();
        let mut console = ScriptedConsole::new(["YES"]);
        let mut ctx = ShellContext::new(&mut book, &mut console);

        let result = ClearCommand.execute(&[], &mut ctx).unwrap();
        assert_eq!(result, CommandResult::success("2 records were removed."));
        assert!(book.session().unwrap().records().unwrap().is_empty());
    }

    #[test]
    fn test_clear_declined() {
        for answer in ["no", "", "y"] {
            let mut book = book();
            let mut console = ScriptedConsole::new([answer]);
            let mut ctx = ShellContext::new(&mut book, &mut console);

            let result = ClearCommand.execute(&[], &mut ctx).unwrap();
            assert_eq!(result, CommandResult::success("Nothing was removed."));
            assert_eq!(book.session().unwrap().records().unwrap().len(), 2);
        }
    }
}
