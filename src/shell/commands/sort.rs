//! Sort command implementation.

use crate::error::Result;
use crate::query::{SortKey, SortOrder, sort_records};
use crate::shell::command::{Command, CommandResult, ShellContext, complete_from};

use super::show_records;

const INVALID_SORT: &str = "Invalid credential or sort order. Try again.";

/// Shows all records sorted by one field.
pub struct SortCommand;

fn parse_args(args: &[&str]) -> Option<(SortKey, SortOrder)> {
    match args {
        [key, order] => Some((key.parse().ok()?, order.parse().ok()?)),
        _ => None,
    }
}

impl Command for SortCommand {
    fn name(&self) -> &str {
        "sort"
    }

    fn menu_number(&self) -> Option<u8> {
        Some(9)
    }

    fn description(&self) -> &str {
        "Show records sorted by a field"
    }

    fn usage(&self) -> &str {
        "sort [field] [order]"
    }

    fn help(&self) -> &str {
        "Show all records sorted by name, surname or birth_date.\n\n\
         Order is ascending or descending (asc and desc work too).\n\
         Records with equal values keep their stored order. Missing\n\
         arguments are asked for.\n\n\
         Examples:\n  \
           sort surname ascending\n  \
           sort birth_date desc"
    }

    fn execute(&self, args: &[&str], ctx: &mut ShellContext) -> Result<CommandResult> {
        let (key, order) = match parse_args(args) {
            Some(parsed) => parsed,
            None => {
                if !args.is_empty() {
                    ctx.say(&format!("\n{}\n", INVALID_SORT));
                }
                loop {
                    let key = ctx.console.read_line(&format!(
                        "SORT BY ({}) >> ",
                        SortKey::NAMES.join("/")
                    ))?;
                    let order = ctx.console.read_line(&format!(
                        "ORDER ({}) >> ",
                        SortOrder::NAMES.join("/")
                    ))?;
                    match parse_args(&[key.as_str(), order.as_str()]) {
                        Some(parsed) => break parsed,
                        None => ctx.say(&format!("\n{}\n", INVALID_SORT)),
                    }
                }
            }
        };

        let records = ctx.book.session()?.records()?;
        log::debug!("Sorting {} records by {} {:?}", records.len(), key, order);
        show_records(ctx.console, &sort_records(&records, key, order));
        Ok(CommandResult::ok())
    }

    fn completions(&self, arg_index: usize, partial: &str) -> Vec<String> {
        match arg_index {
            0 => complete_from(&SortKey::NAMES, partial),
            1 => complete_from(&SortOrder::NAMES, partial),
            _ => vec![],
        }
    }

    fn max_args(&self) -> Option<usize> {
        Some(2)
    }
}
