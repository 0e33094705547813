//! Interactive collection of credentials.

use crate::console::Console;
use crate::credentials::Credentials;
use crate::error::Result;
use crate::schema::{Field, FieldDescriptor};
use crate::validator;

/// Shown when a value is rejected.
pub const REJECTION_NOTICE: &str = "It seems to be incorrect. Try again.";

/// Prompts for each descriptor in turn.
///
/// A field is accepted once the input matches its own pattern group. A field
/// outside `required` takes an absence for anything else; a required field
/// is asked again until it is valid, with no retry limit. Only console
/// errors (interrupt, closed input) end the loop early.
///
/// With `allow_null` false, absent fields are dropped from the result.
pub fn collect(
    console: &mut dyn Console,
    fields: &[&FieldDescriptor],
    required: &[Field],
    allow_null: bool,
) -> Result<Credentials> {
    let mut creds = Credentials::new();

    for descriptor in fields {
        let prompt = format!("{} >> ", descriptor.label);
        loop {
            let response = console.read_line(&prompt)?;

            if let Some(value) = validator::extract(&response, descriptor.group) {
                creds.set(descriptor.field, Some(value));
                break;
            }
            if !required.contains(&descriptor.field) {
                log::trace!("Leaving {} empty", descriptor.field);
                creds.set(descriptor.field, None);
                break;
            }

            log::debug!(
                "Rejected input for required field {} (read as {:?})",
                descriptor.field,
                validator::classify(&response)
            );
            console.write_line("");
            console.write_line(REJECTION_NOTICE);
            console.write_line("");
        }
    }

    if allow_null {
        Ok(creds)
    } else {
        Ok(creds.without_absent())
    }
}
