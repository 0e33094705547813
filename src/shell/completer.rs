//! Tab completion for command names and command arguments.

use rustyline::Context;
use rustyline::completion::{Completer, Pair};
use std::sync::Arc;

use crate::shell::command::CommandRegistry;

pub struct PhonebookCompleter {
    registry: Arc<CommandRegistry>,
}

/// What the cursor is currently on.
#[derive(Debug, PartialEq, Eq)]
enum CompletionContext<'a> {
    Command {
        partial: &'a str,
    },
    Argument {
        command: &'a str,
        arg_index: usize,
        partial: &'a str,
    },
}

fn pairs(candidates: Vec<String>) -> Vec<Pair> {
    candidates
        .into_iter()
        .map(|s| Pair {
            display: s.clone(),
            replacement: s,
        })
        .collect()
}

impl PhonebookCompleter {
    pub fn new(registry: Arc<CommandRegistry>) -> Self {
        Self { registry }
    }

    fn parse_context<'a>(&self, line: &'a str, pos: usize) -> CompletionContext<'a> {
        let line_to_pos = &line[..pos];
        let parts: Vec<&str> = line_to_pos.split_whitespace().collect();
        let ends_with_space = line_to_pos.ends_with(char::is_whitespace);

        match parts.as_slice() {
            [] => CompletionContext::Command { partial: "" },
            [command] if !ends_with_space => CompletionContext::Command { partial: *command },
            [command, rest @ ..] => {
                let (arg_index, partial) = if ends_with_space {
                    (rest.len(), "")
                } else {
                    (rest.len() - 1, rest[rest.len() - 1])
                };
                CompletionContext::Argument {
                    command: *command,
                    arg_index,
                    partial,
                }
            }
        }
    }

    fn candidates(&self, context: &CompletionContext<'_>) -> Vec<String> {
        match context {
            CompletionContext::Command { partial } => self.registry.completions(partial),
            CompletionContext::Argument {
                command,
                arg_index,
                partial,
            } => match self.registry.get(command) {
                Some(cmd) => {
                    if cmd.name() == "help" && *arg_index == 0 {
                        self.registry.completions(partial)
                    } else {
                        cmd.completions(*arg_index, partial)
                    }
                }
                None => vec![],
            },
        }
    }
}

impl Completer for PhonebookCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let context = self.parse_context(line, pos);
        let partial_len = match &context {
            CompletionContext::Command { partial } => partial.len(),
            CompletionContext::Argument { partial, .. } => partial.len(),
        };
        Ok((pos - partial_len, pairs(self.candidates(&context))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::commands::register_all;

    fn setup_completer() -> PhonebookCompleter {
        let mut registry = CommandRegistry::new();
        register_all(&mut registry);
        PhonebookCompleter::new(Arc::new(registry))
    }

    #[test]
    fn test_parse_context_command() {
        let completer = setup_completer();
        assert_eq!(
            completer.parse_context("so", 2),
            CompletionContext::Command { partial: "so" }
        );
        assert_eq!(
            completer.parse_context("", 0),
            CompletionContext::Command { partial: "" }
        );
    }

    #[test]
    fn test_parse_context_argument() {
        let completer = setup_completer();
        assert_eq!(
            completer.parse_context("sort su", 7),
            CompletionContext::Argument {
                command: "sort",
                arg_index: 0,
                partial: "su"
            }
        );
        assert_eq!(
            completer.parse_context("sort name ", 10),
            CompletionContext::Argument {
                command: "sort",
                arg_index: 1,
                partial: ""
            }
        );
    }

    #[test]
    fn test_complete_command() {
        let completer = setup_completer();
        let candidates = completer.candidates(&CompletionContext::Command { partial: "so" });
        assert_eq!(candidates, vec!["sort".to_string()]);
    }

    #[test]
    fn test_complete_sort_arguments() {
        let completer = setup_completer();
        let fields = completer.candidates(&completer.parse_context("sort b", 6));
        assert_eq!(fields, vec!["birth_date".to_string()]);

        let orders = completer.candidates(&completer.parse_context("sort name d", 11));
        assert_eq!(orders, vec!["descending".to_string()]);
    }

    #[test]
    fn test_complete_help_argument() {
        let completer = setup_completer();
        let candidates = completer.candidates(&completer.parse_context("help upc", 8));
        assert_eq!(candidates, vec!["upcoming".to_string()]);
    }

    #[test]
    fn test_unknown_command_has_no_argument_completions() {
        let completer = setup_completer();
        assert!(
            completer
                .candidates(&completer.parse_context("nope x", 6))
                .is_empty()
        );
    }
}
