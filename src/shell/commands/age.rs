//! Age command implementation.

use crate::error::Result;
use crate::query::{age_on, find_by_names};
use crate::shell::command::{Command, CommandResult, ShellContext};

use super::{NOT_IN_BOOK, ask_names};

pub struct AgeCommand;

impl Command for AgeCommand {
    fn name(&self) -> &str {
        "age"
    }

    fn menu_number(&self) -> Option<u8> {
        Some(4)
    }

    fn description(&self) -> &str {
        "Show the age of a person"
    }

    fn usage(&self) -> &str {
        "age"
    }

    fn execute(&self, _args: &[&str], ctx: &mut ShellContext) -> Result<CommandResult> {
        ctx.say("You chose to see someone's age. Provide the name and surname.\n");
        let (name, surname) = ask_names(ctx.console)?;

        let session = ctx.book.session()?;
        let records = session.records()?;
        let Some(record) = find_by_names(&records, &name, &surname) else {
            return Ok(CommandResult::error(NOT_IN_BOOK));
        };

        match record.birth_date {
            Some(birth) => Ok(CommandResult::success(format!(
                "{} is {} years old.",
                record.full_name(),
                age_on(birth, ctx.today)
            ))),
            None => Ok(CommandResult::success(format!(
                "{}'s birth date isn't specified.",
                record.full_name()
            ))),
        }
    }
}
