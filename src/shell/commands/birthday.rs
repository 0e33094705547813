//! Birthday command implementation.

use regex::Regex;
use std::sync::LazyLock;

use crate::collector::REJECTION_NOTICE;
use crate::error::Result;
use crate::query::birthday_matches;
use crate::shell::command::{Command, CommandResult, ShellContext};
use crate::shell::table;

static DAY_MONTH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(0[1-9]|[12][0-9]|3[01])\.(0[1-9]|1[012])$").expect("day-month pattern")
});

fn parse_day_month(input: &str) -> Option<(u32, u32)> {
    let caps = DAY_MONTH.captures(input)?;
    Some((caps[1].parse().ok()?, caps[2].parse().ok()?))
}

/// Lists people born on a given day and month.
pub struct BirthdayCommand;

impl Command for BirthdayCommand {
    fn name(&self) -> &str {
        "birthday"
    }

    fn menu_number(&self) -> Option<u8> {
        Some(7)
    }

    fn aliases(&self) -> &[&str] {
        &["bday"]
    }

    fn description(&self) -> &str {
        "Find people by birthday"
    }

    fn usage(&self) -> &str {
        "birthday [DD.MM]"
    }

    fn help(&self) -> &str {
        "List people whose birthday is on the given day, in any year.\n\n\
         Examples:\n  \
           birthday 15.03\n  \
           bday"
    }

    fn execute(&self, args: &[&str], ctx: &mut ShellContext) -> Result<CommandResult> {
        let mut day_month = args.first().and_then(|a| parse_day_month(a));
        let (day, month) = loop {
            if let Some(found) = day_month {
                break found;
            }
            let response = ctx.console.read_line("BIRTHDAY (DD.MM) >> ")?;
            day_month = parse_day_month(&response);
            if day_month.is_none() {
                ctx.say(&format!("\n{}\n", REJECTION_NOTICE));
            }
        };

        let records = ctx.book.session()?.records()?;
        let found = birthday_matches(&records, day, month);
        if found.is_empty() {
            return Ok(CommandResult::success(format!(
                "Nobody has a birthday on {:02}.{:02}.",
                day, month
            )));
        }
        Ok(CommandResult::success(table::render_birthdays(&found)))
    }

    fn max_args(&self) -> Option<usize> {
        Some(1)
    }
}
