//! Remove-phone command implementation.

use crate::collector::collect;
use crate::error::{PhonebookError, Result};
use crate::normalizer::canonical_phone;
use crate::query::{Criteria, Selection, select_one};
use crate::schema::{Field, descriptors_for};
use crate::shell::command::{Command, CommandResult, ShellContext};

use super::choose_among;

/// Removes a record by its personal phone number.
pub struct RemovePhoneCommand;

impl Command for RemovePhoneCommand {
    fn name(&self) -> &str {
        "remove-phone"
    }

    fn menu_number(&self) -> Option<u8> {
        Some(8)
    }

    fn aliases(&self) -> &[&str] {
        &["rmp"]
    }

    fn description(&self) -> &str {
        "Remove record by phone number"
    }

    fn usage(&self) -> &str {
        "remove-phone"
    }

    fn help(&self) -> &str {
        "Remove a record by its personal phone number.\n\n\
         When several records share the number they are listed and you\n\
         choose one by ID. An empty answer removes nothing."
    }

    fn execute(&self, _args: &[&str], ctx: &mut ShellContext) -> Result<CommandResult> {
        ctx.say("You chose to remove a record by phone number.\n");
        let fields = [Field::Phone];
        let creds = collect(ctx.console, &descriptors_for(&fields), &fields, false)?;
        let phone = creds
            .get(Field::Phone)
            .ok_or(PhonebookError::MissingField(Field::Phone))?;
        let criteria = Criteria::new().with(Field::Phone, canonical_phone(phone));

        let session = ctx.book.session()?;
        let records = session.records()?;

        let target = match select_one(&records, &criteria) {
            Selection::None => {
                return Ok(CommandResult::error("There is no record with this phone number."));
            }
            Selection::One(record) => record,
            Selection::Many(matches) => {
                let notice = "Several records have this phone number.";
                match choose_among(ctx.console, notice, &matches)? {
                    Some(record) => record,
                    None => return Ok(CommandResult::success("Nothing was removed.")),
                }
            }
        };

        session.delete(target.id)?;
        session.commit()?;
        log::info!("Removed record {} by phone", target.id);
        Ok(CommandResult::success(format!(
            "{} was removed from your phonebook.",
            target.full_name()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;
    use crate::shell::commands::fixtures::{book_with, person};

    fn shared_phone_book() -> crate::storage::PhoneBook {
        book_with(&[
            person("Anna", "Lee", "89990000001", None),
            person("Bob", "Stone", "89990000002", None),
            person("Carl", "Moss", "89990000002", None),
        ])
    }

    #[test]
    fn test_remove_phone_single() {
        let mut book = shared_phone_book();
        let mut console = ScriptedConsole::new(["+79990000001"]);
        let mut ctx = ShellContext::new(&mut book, &mut console);

        let result = RemovePhoneCommand.execute(&[], &mut ctx).unwrap();
        assert_eq!(
            result,
            CommandResult::success("Anna Lee was removed from your phonebook.")
        );
        assert_eq!(book.session().unwrap().records().unwrap().len(), 2);
    }

    #[test]
    fn test_remove_phone_choice_is_limited_to_matches() {
        let mut book = shared_phone_book();
        // id 1 exists but does not have this phone
        let mut console = ScriptedConsole::new(["89990000002", "1", "3"]);
        let mut ctx = ShellContext::new(&mut book, &mut console);

        let result = RemovePhoneCommand.execute(&[], &mut ctx).unwrap();
        assert_eq!(
            result,
            CommandResult::success("Carl Moss was removed from your phonebook.")
        );

        let session = book.session().unwrap();
        assert!(session.get(1).unwrap().is_some());
        assert!(session.get(2).unwrap().is_some());
        assert!(session.get(3).unwrap().is_none());
    }

    #[test]
    fn test_remove_phone_cancelled() {
        let mut book = shared_phone_book();
        let mut console = ScriptedConsole::new(["89990000002", ""]);
        let mut ctx = ShellContext::new(&mut book, &mut console);

        let result = RemovePhoneCommand.execute(&[], &mut ctx).unwrap();
        assert_eq!(result, CommandResult::success("Nothing was removed."));
        assert_eq!(book.session().unwrap().records().unwrap().len(), 3);
    }

    #[test]
    fn test_remove_phone_not_found() {
        let mut book = shared_phone_book();
        let mut console = ScriptedConsole::new(["89995555555"]);
        let mut ctx = ShellContext::new(&mut book, &mut console);

        let result = RemovePhoneCommand.execute(&[], &mut ctx).unwrap();
        assert!(matches!(result, CommandResult::Error(_)));
    }
}
