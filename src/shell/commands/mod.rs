//! Individual command implementations.

mod add;
mod age;
mod ages;
mod birthday;
mod change;
mod clear;
mod find;
mod help;
mod quit;
mod remove;
mod remove_phone;
mod show;
mod sort;
mod upcoming;

pub use add::AddCommand;
pub use age::AgeCommand;
pub use ages::AgesCommand;
pub use birthday::BirthdayCommand;
pub use change::ChangeCommand;
pub use clear::ClearCommand;
pub use find::FindCommand;
pub use help::{HelpCommand, menu_text};
pub use quit::QuitCommand;
pub use remove::RemoveCommand;
pub use remove_phone::RemovePhoneCommand;
pub use show::ShowCommand;
pub use sort::SortCommand;
pub use upcoming::UpcomingCommand;

use std::sync::Arc;

use super::command::CommandRegistry;
use super::highlighter::OutputHighlighter;
use super::table;
use crate::collector::collect;
use crate::console::Console;
use crate::error::{PhonebookError, Result};
use crate::model::Record;
use crate::normalizer::NormalizeWarning;
use crate::schema::{Field, descriptors_for};

/// Registers all built-in commands with the registry.
pub fn register_all(registry: &mut CommandRegistry) {
    registry.register(Arc::new(AddCommand));
    registry.register(Arc::new(ChangeCommand));
    registry.register(Arc::new(RemoveCommand));
    registry.register(Arc::new(AgeCommand));
    registry.register(Arc::new(ShowCommand));
    registry.register(Arc::new(FindCommand));
    registry.register(Arc::new(BirthdayCommand));
    registry.register(Arc::new(RemovePhoneCommand));
    registry.register(Arc::new(SortCommand));
    registry.register(Arc::new(UpcomingCommand));
    registry.register(Arc::new(AgesCommand));
    registry.register(Arc::new(ClearCommand));
    registry.register(Arc::new(HelpCommand));
    registry.register(Arc::new(QuitCommand));
}

pub(crate) const NOT_IN_BOOK: &str = "This person isn't in the phonebook.";
pub(crate) const NO_RECORDS: &str = "No records found.";

/// Asks for a name and surname, both required. Returned as typed.
pub(crate) fn ask_names(console: &mut dyn Console) -> Result<(String, String)> {
    let fields = [Field::Name, Field::Surname];
    let creds = collect(console, &descriptors_for(&fields), &fields, false)?;
    let name = creds
        .get(Field::Name)
        .ok_or(PhonebookError::MissingField(Field::Name))?;
    let surname = creds
        .get(Field::Surname)
        .ok_or(PhonebookError::MissingField(Field::Surname))?;
    Ok((name.to_string(), surname.to_string()))
}

/// Prints records as a table, or a notice when there are none.
pub(crate) fn show_records(console: &mut dyn Console, records: &[&Record]) {
    console.write_line("");
    if records.is_empty() {
        console.write_line(NO_RECORDS);
    } else {
        console.write_text(&table::render(records));
    }
}

pub(crate) fn report_warnings(console: &mut dyn Console, warnings: &[NormalizeWarning]) {
    for warning in warnings {
        console.write_line(&OutputHighlighter::warning(&warning.to_string()));
    }
}

/// Lets the user pick one of `matches` by id.
///
/// Ids outside `matches` are refused. An empty answer returns `None`.
pub(crate) fn choose_record<'r>(
    console: &mut dyn Console,
    matches: &[&'r Record],
) -> Result<Option<&'r Record>> {
    loop {
        let response = console.read_line("ID (leftmost column), empty to cancel >> ")?;
        if response.is_empty() {
            return Ok(None);
        }
        let chosen = response
            .parse::<i64>()
            .ok()
            .and_then(|id| matches.iter().copied().find(|r| r.id == id));
        match chosen {
            Some(record) => return Ok(Some(record)),
            None => console.write_text("\nThere is no such ID among these records. Try again.\n"),
        }
    }
}

/// Shows `notice` and the matching records, then lets the user pick one.
pub(crate) fn choose_among<'r>(
    console: &mut dyn Console,
    notice: &str,
    matches: &[&'r Record],
) -> Result<Option<&'r Record>> {
    console.write_line(notice);
    show_records(console, matches);
    console.write_line("");
    choose_record(console, matches)
}
