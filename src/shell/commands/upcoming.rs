//! Upcoming command implementation.

use crate::error::Result;
use crate::query::{UPCOMING_WINDOW_DAYS, days_until_birthday, upcoming_birthdays};
use crate::shell::command::{Command, CommandResult, ShellContext};
use crate::shell::table;

pub struct UpcomingCommand;

impl Command for UpcomingCommand {
    fn name(&self) -> &str {
        "upcoming"
    }

    fn menu_number(&self) -> Option<u8> {
        Some(10)
    }

    fn description(&self) -> &str {
        "Show birthdays in the next 30 days"
    }

    fn usage(&self) -> &str {
        "upcoming"
    }

    fn execute(&self, _args: &[&str], ctx: &mut ShellContext) -> Result<CommandResult> {
        let records = ctx.book.session()?.records()?;
        let mut upcoming = upcoming_birthdays(&records, ctx.today);
        if upcoming.is_empty() {
            return Ok(CommandResult::success(format!(
                "No birthdays in the next {} days.",
                UPCOMING_WINDOW_DAYS
            )));
        }

        // Soonest first; ties keep storage order.
        let today = ctx.today;
        upcoming.sort_by_key(|r| r.birth_date.and_then(|d| days_until_birthday(d, today)));
        Ok(CommandResult::success(table::render_birthdays(&upcoming)))
    }
}
