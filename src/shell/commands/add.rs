//! Add command implementation.

use crate::collector::collect;
use crate::error::Result;
use crate::normalizer::normalize;
use crate::query::{filter, names_criteria};
use crate::schema::{Field, all_fields, descriptors_for};
use crate::shell::command::{Command, CommandResult, ShellContext};

use super::{choose_among, report_warnings};

pub struct AddCommand;

const REQUIRED: [Field; 3] = [Field::Name, Field::Surname, Field::Phone];

impl Command for AddCommand {
    fn name(&self) -> &str {
        "add"
    }

    fn menu_number(&self) -> Option<u8> {
        Some(1)
    }

    fn aliases(&self) -> &[&str] {
        &["new"]
    }

    fn description(&self) -> &str {
        "Add new record to the phonebook"
    }

    fn usage(&self) -> &str {
        "add"
    }

    fn help(&self) -> &str {
        "Add a new person to the phonebook.\n\n\
         Name, surname and personal phone are required; the other fields\n\
         may be left empty. If someone with the same name and surname is\n\
         already stored you can overwrite that record, change the name, or\n\
         go back to the menu. When several people share the name you pick\n\
         the one to overwrite by ID."
    }

    fn execute(&self, _args: &[&str], ctx: &mut ShellContext) -> Result<CommandResult> {
        ctx.say("You chose to add a new record. Provide credentials of the person.\n");

        let mut creds = collect(ctx.console, &all_fields(), &REQUIRED, true)?;

        'names: loop {
            let normalized = normalize(&creds)?;
            let record = normalized.record;

            let session = ctx.book.session()?;
            let records = session.records()?;

            let matches = filter(&records, &names_criteria(&record.name, &record.surname));
            if matches.is_empty() {
                let stored = session.insert(&record)?;
                session.commit()?;
                report_warnings(ctx.console, &normalized.warnings);
                log::info!("Added record {}", stored.id);
                return Ok(CommandResult::success(format!(
                    "{} was added to your phonebook.",
                    stored.full_name()
                )));
            }

            ctx.console.write_text(
                "\nThis person is already in the phonebook.\n\n\
                 Choose one of the options below:\n\
                 --- 'overwrite' to change the existing record\n\
                 --- 'change' to change your query\n\
                 --- 'menu' to return to the menu\n",
            );

            loop {
                let option = ctx.console.read_line("OPTION >> ")?;
                match option.to_lowercase().as_str() {
                    "overwrite" => {
                        let notice = "Several people have this name. Choose the one to overwrite.";
                        let target = match matches.as_slice() {
                            [only] => Some(*only),
                            _ => choose_among(ctx.console, notice, &matches)?,
                        };
                        let Some(target) = target else {
                            return Ok(CommandResult::success("Record was not added."));
                        };
                        session.update(&record.with_id(target.id))?;
                        session.commit()?;
                        report_warnings(ctx.console, &normalized.warnings);
                        log::info!("Overwrote record {}", target.id);
                        return Ok(CommandResult::success("Record was overwritten successfully."));
                    }
                    "change" => {
                        ctx.console.write_text("You chose to change your query. Provide credentials.\n");
                        let fields = [Field::Name, Field::Surname];
                        let renamed = collect(ctx.console, &descriptors_for(&fields), &fields, false)?;
                        creds.merge(renamed);
                        continue 'names;
                    }
                    "menu" => {
                        log::debug!("Add abandoned, {} record(s) share the name", matches.len());
                        return Ok(CommandResult::success("Record was not added."));
                    }
                    _ => ctx.console.write_text("\nInvalid option.\n"),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;
    use crate::shell::commands::fixtures::{book_with, person};
    use crate::storage::PhoneBook;

    #[test]
    fn test_add_record() {
        let mut book = PhoneBook::open_in_memory().unwrap();
        let mut console =
            ScriptedConsole::new(["anna", "lee", "15.03.1990", "+79991234567", "", ""]);
        let mut ctx = ShellContext::new(&mut book, &mut console);

        let result = AddCommand.execute(&[], &mut ctx).unwrap();
        assert_eq!(
            result,
            CommandResult::success("Anna Lee was added to your phonebook.")
        );

        let session = book.session().unwrap();
        let records = session.records().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].phone, "89991234567");
    }

    #[test]
    fn test_add_with_bad_date_warns() {
        let mut book = PhoneBook::open_in_memory().unwrap();
        let mut console =
            ScriptedConsole::new(["anna", "lee", "31.02.2021", "+79991234567", "", ""]);
        let mut ctx = ShellContext::new(&mut book, &mut console);

        let result = AddCommand.execute(&[], &mut ctx).unwrap();
        assert!(matches!(result, CommandResult::Success(Some(_))));
        assert!(console.transcript().contains("Record was added without it"));
    }

    #[test]
    fn test_overwrite_asks_which_namesake() {
        let mut book = book_with(&[
            person("Anna", "Lee", "89990000001", None),
            person("Anna", "Lee", "89990000002", None),
        ]);
        let mut console = ScriptedConsole::new([
            "anna",
            "lee",
            "01.02.2000",
            "89990000003",
            "",
            "",
            "overwrite",
            "2",
        ]);
        let mut ctx = ShellContext::new(&mut book, &mut console);

        let result = AddCommand.execute(&[], &mut ctx).unwrap();
        assert_eq!(
            result,
            CommandResult::success("Record was overwritten successfully.")
        );
        assert!(console.transcript().contains("Choose the one to overwrite."));

        let records = book.session().unwrap().records().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].phone, "89990000001");
        assert_eq!(records[0].birth_date, None);
        assert_eq!(records[1].phone, "89990000003");
        assert!(records[1].birth_date.is_some());
    }

    #[test]
    fn test_overwrite_namesake_cancelled() {
        let mut book = book_with(&[
            person("Anna", "Lee", "89990000001", None),
            person("Anna", "Lee", "89990000002", None),
        ]);
        let mut console =
            ScriptedConsole::new(["anna", "lee", "", "89990000003", "", "", "overwrite", ""]);
        let mut ctx = ShellContext::new(&mut book, &mut console);

        let result = AddCommand.execute(&[], &mut ctx).unwrap();
        assert_eq!(result, CommandResult::success("Record was not added."));

        let phones: Vec<String> = book
            .session()
            .unwrap()
            .records()
            .unwrap()
            .into_iter()
            .map(|r| r.phone)
            .collect();
        assert_eq!(phones, vec!["89990000001", "89990000002"]);
    }
}
