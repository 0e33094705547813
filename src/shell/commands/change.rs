//! Change command implementation.

use crate::collector::collect;
use crate::error::Result;
use crate::normalizer::normalize_patch;
use crate::query::{Criteria, Selection, select_one};
use crate::schema::all_fields;
use crate::shell::command::{Command, CommandResult, ShellContext};

use super::{choose_among, report_warnings};

pub struct ChangeCommand;

impl Command for ChangeCommand {
    fn name(&self) -> &str {
        "change"
    }

    fn menu_number(&self) -> Option<u8> {
        Some(2)
    }

    fn aliases(&self) -> &[&str] {
        &["edit"]
    }

    fn description(&self) -> &str {
        "Change existing record"
    }

    fn usage(&self) -> &str {
        "change"
    }

    fn help(&self) -> &str {
        "Change a stored record.\n\n\
         First describe the record with any of its fields; empty answers\n\
         are ignored. When several records fit, pick one by its ID. Then\n\
         enter the new values. Fields left empty keep their current value."
    }

    fn execute(&self, _args: &[&str], ctx: &mut ShellContext) -> Result<CommandResult> {
        ctx.say("You chose to change a record. Describe the record you want to change.\n");
        let fields = all_fields();
        let criteria = Criteria::from_credentials(&collect(ctx.console, &fields, &[], false)?);

        let session = ctx.book.session()?;
        let records = session.records()?;

        let target = match select_one(&records, &criteria) {
            Selection::None => {
                return Ok(CommandResult::error("No records match this description."));
            }
            Selection::One(record) => record,
            Selection::Many(matches) => {
                let notice = "Several records match. Choose the one to change.";
                match choose_among(ctx.console, notice, &matches)? {
                    Some(record) => record,
                    None => return Ok(CommandResult::success("Nothing was changed.")),
                }
            }
        };

        ctx.console
            .write_text("\nEnter new values. Leave a field empty to keep it.\n");
        let (patch, warnings) = normalize_patch(&collect(ctx.console, &fields, &[], false)?);
        report_warnings(ctx.console, &warnings);
        if patch.is_empty() {
            return Ok(CommandResult::success("Nothing was changed."));
        }

        let mut updated = target.clone();
        updated.apply(&patch);
        session.update(&updated)?;
        session.commit()?;

        log::info!("Changed record {}", updated.id);
        Ok(CommandResult::success(format!(
            "Record {} was changed successfully.",
            updated.id
        )))
    }
}
