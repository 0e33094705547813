//! Inline hints while typing a command.

use rustyline::Context;
use rustyline::hint::Hinter;
use std::sync::Arc;

use crate::shell::command::CommandRegistry;

/// Hinter that completes command names and shows argument usage.
pub struct PhonebookHinter {
    registry: Arc<CommandRegistry>,
}

impl PhonebookHinter {
    pub fn new(registry: Arc<CommandRegistry>) -> Self {
        Self { registry }
    }

    pub(crate) fn get_hint(&self, line: &str) -> Option<String> {
        let has_trailing_space = line.ends_with(' ');
        let parts: Vec<&str> = line.split_whitespace().collect();
        let command = *parts.first()?;

        // Still typing the command: hint the rest of a unique completion.
        if parts.len() == 1 && !has_trailing_space {
            let completions = self.registry.completions(command);
            return match completions.as_slice() {
                [only] if only != command => Some(only[command.len()..].to_string()),
                _ => None,
            };
        }

        let cmd = self.registry.get(command)?;
        if cmd.max_args() == Some(0) {
            return None;
        }

        // Remaining placeholders from the usage line.
        let arg_count = parts.len() - 1;
        let placeholders: Vec<&str> = cmd
            .usage()
            .strip_prefix(cmd.name())?
            .split_whitespace()
            .collect();
        if arg_count >= placeholders.len() {
            return None;
        }

        let remaining = placeholders[arg_count..].join(" ");
        if has_trailing_space {
            Some(remaining)
        } else {
            Some(format!(" {}", remaining))
        }
    }
}

impl Hinter for PhonebookHinter {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<Self::Hint> {
        // Only hint if cursor is at end of line
        if pos < line.len() {
            return None;
        }

        self.get_hint(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::commands::register_all;

    fn setup_hinter() -> PhonebookHinter {
        let mut registry = CommandRegistry::new();
        register_all(&mut registry);
        PhonebookHinter::new(Arc::new(registry))
    }

    #[test]
    fn test_command_completion_hint() {
        let hinter = setup_hinter();
        assert_eq!(hinter.get_hint("upc"), Some("oming".to_string()));
    }

    #[test]
    fn test_ambiguous_prefix_has_no_hint() {
        let hinter = setup_hinter();
        // "remove" and "remove-phone"
        assert_eq!(hinter.get_hint("rem"), None);
    }

    #[test]
    fn test_usage_hint_for_arguments() {
        let hinter = setup_hinter();
        assert_eq!(
            hinter.get_hint("sort "),
            Some("[field] [order]".to_string())
        );
        assert_eq!(hinter.get_hint("sort name"), Some(" [order]".to_string()));
        assert_eq!(hinter.get_hint("sort name desc"), None);
    }

    #[test]
    fn test_no_hint_for_commands_without_arguments() {
        let hinter = setup_hinter();
        assert_eq!(hinter.get_hint("show "), None);
    }

    #[test]
    fn test_empty_line_no_hint() {
        let hinter = setup_hinter();
        assert!(hinter.get_hint("").is_none());
        assert!(hinter.get_hint("   ").is_none());
    }
}
