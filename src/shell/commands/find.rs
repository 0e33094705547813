//! Find command implementation.

use crate::collector::collect;
use crate::error::Result;
use crate::query::{Criteria, filter};
use crate::schema::all_fields;
use crate::shell::command::{Command, CommandResult, ShellContext};

use super::show_records;

pub struct FindCommand;

impl Command for FindCommand {
    fn name(&self) -> &str {
        "find"
    }

    fn menu_number(&self) -> Option<u8> {
        Some(6)
    }

    fn aliases(&self) -> &[&str] {
        &["search"]
    }

    fn description(&self) -> &str {
        "Find records by any fields"
    }

    fn usage(&self) -> &str {
        "find"
    }

    fn help(&self) -> &str {
        "Find records matching every field you fill in.\n\n\
         All fields are optional; leave a field empty to ignore it.\n\
         Leaving everything empty shows the whole phonebook."
    }

    fn execute(&self, _args: &[&str], ctx: &mut ShellContext) -> Result<CommandResult> {
        ctx.say("You chose to find records. Fill in what you know.\n");
        let creds = collect(ctx.console, &all_fields(), &[], false)?;
        let criteria = Criteria::from_credentials(&creds);

        let records = ctx.book.session()?.records()?;
        let found = filter(&records, &criteria);
        log::debug!("{} of {} records match {:?}", found.len(), records.len(), criteria);

        show_records(ctx.console, &found);
        Ok(CommandResult::ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;
    use crate::shell::commands::NO_RECORDS;
    use crate::shell::commands::fixtures::{book_with, person};

    #[test]
    fn test_find_by_surname() {
        let mut book = book_with(&[
            person("Anna", "Lee", "89990000001", None),
            person("Bob", "Stone", "89990000002", None),
            person("Carl", "Lee", "89990000003", None),
        ]);
        let mut console = ScriptedConsole::new(["", "LEE", "", "", "", ""]);
        let mut ctx = ShellContext::new(&mut book, &mut console);

        FindCommand.execute(&[], &mut ctx).unwrap();
        let transcript = console.transcript();
        assert!(transcript.contains("Anna"));
        assert!(transcript.contains("Carl"));
        assert!(!transcript.contains("Bob"));
    }

    #[test]
    fn test_find_by_birth_date() {
        let mut book = book_with(&[
            person("Anna", "Lee", "89990000001", Some((1990, 3, 15))),
            person("Bob", "Stone", "89990000002", Some((1991, 3, 15))),
        ]);
        let mut console = ScriptedConsole::new(["", "", "15.03.1990", "", "", ""]);
        let mut ctx = ShellContext::new(&mut book, &mut console);

        FindCommand.execute(&[], &mut ctx).unwrap();
        let transcript = console.transcript();
        assert!(transcript.contains("Anna"));
        assert!(!transcript.contains("Bob"));
    }

    #[test]
    fn test_find_nothing() {
        let mut book = book_with(&[person("Anna", "Lee", "89990000001", None)]);
        let mut console = ScriptedConsole::new(["zed", "", "", "", "", ""]);
        let mut ctx = ShellContext::new(&mut book, &mut console);

        FindCommand.execute(&[], &mut ctx).unwrap();
        assert!(console.output().iter().any(|l| l == NO_RECORDS));
    }
}
