//! Remove command implementation.

use crate::error::Result;
use crate::query::{Selection, names_criteria, select_one};
use crate::shell::command::{Command, CommandResult, ShellContext};

use super::{NOT_IN_BOOK, ask_names, choose_among};

/// Removes a person found by name and surname.
pub struct RemoveCommand;

impl Command for RemoveCommand {
    fn name(&self) -> &str {
        "remove"
    }

    fn menu_number(&self) -> Option<u8> {
        Some(3)
    }

    fn aliases(&self) -> &[&str] {
        &["rm", "delete"]
    }

    fn description(&self) -> &str {
        "Remove record by name and surname"
    }

    fn usage(&self) -> &str {
        "remove"
    }

    fn help(&self) -> &str {
        "Remove a person from the phonebook.\n\n\
         Asks for the name and surname. When several people share them\n\
         they are listed and you choose one by ID. An empty answer removes\n\
         nothing."
    }

    fn execute(&self, _args: &[&str], ctx: &mut ShellContext) -> Result<CommandResult> {
        ctx.say("You chose to remove a record. Provide the name and surname.\n");
        let (name, surname) = ask_names(ctx.console)?;

        let session = ctx.book.session()?;
        let records = session.records()?;
        let record = match select_one(&records, &names_criteria(&name, &surname)) {
            Selection::None => {
                log::debug!("Nothing to remove for {} {}", name, surname);
                return Ok(CommandResult::error(NOT_IN_BOOK));
            }
            Selection::One(record) => record,
            Selection::Many(matches) => {
                let notice = "Several people have this name. Choose the one to remove.";
                match choose_among(ctx.console, notice, &matches)? {
                    Some(record) => record,
                    None => return Ok(CommandResult::success("Nothing was removed.")),
                }
            }
        };

        session.delete(record.id)?;
        session.commit()?;
        log::info!("Removed record {}", record.id);
        Ok(CommandResult::success(format!(
            "{} was removed from your phonebook.",
            record.full_name()
        )))
    }
}
