//! Coloring for the command line and for shell output.

use rustyline::highlight::{CmdKind, Highlighter};
use std::borrow::Cow;
use std::sync::Arc;

use crate::shell::command::CommandRegistry;

/// ANSI color codes for highlighting.
pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";

    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const MAGENTA: &str = "\x1b[35m";
    pub const CYAN: &str = "\x1b[36m";

    pub const BRIGHT_RED: &str = "\x1b[91m";
    pub const BRIGHT_GREEN: &str = "\x1b[92m";
    pub const BRIGHT_CYAN: &str = "\x1b[96m";
}

/// Highlighter for the command prompt.
pub struct PhonebookHighlighter {
    registry: Arc<CommandRegistry>,
}

impl PhonebookHighlighter {
    pub fn new(registry: Arc<CommandRegistry>) -> Self {
        Self { registry }
    }

    /// Colors the command word by whether it is known, and its arguments.
    pub(crate) fn highlight_line(&self, line: &str) -> String {
        let trimmed = line.trim_start();
        let Some(command) = trimmed.split_whitespace().next() else {
            return line.to_string();
        };

        let leading_ws = &line[..line.len() - trimmed.len()];
        let rest = &trimmed[command.len()..];

        let command_color = if self.registry.get(command).is_some() {
            format!("{}{}", colors::BOLD, colors::CYAN)
        } else {
            colors::RED.to_string()
        };

        let mut result = String::with_capacity(line.len() + 16);
        result.push_str(leading_ws);
        result.push_str(&command_color);
        result.push_str(command);
        result.push_str(colors::RESET);
        result.push_str(&Self::highlight_arguments(rest));
        result
    }

    /// Arguments are colored, whitespace is kept as typed.
    fn highlight_arguments(args: &str) -> String {
        let mut result = String::new();
        let mut word = String::new();
        for ch in args.chars() {
            if ch.is_whitespace() {
                if !word.is_empty() {
                    result.push_str(&format!("{}{}{}", colors::MAGENTA, word, colors::RESET));
                    word.clear();
                }
                result.push(ch);
            } else {
                word.push(ch);
            }
        }
        if !word.is_empty() {
            result.push_str(&format!("{}{}{}", colors::MAGENTA, word, colors::RESET));
        }
        result
    }
}

impl Highlighter for PhonebookHighlighter {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        Cow::Owned(self.highlight_line(line))
    }

    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        _default: bool,
    ) -> Cow<'b, str> {
        Cow::Owned(format!(
            "{}{}{}{}",
            colors::BOLD,
            colors::BRIGHT_GREEN,
            prompt,
            colors::RESET
        ))
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(format!("{}{}{}", colors::DIM, hint, colors::RESET))
    }

    fn highlight_candidate<'c>(
        &self,
        candidate: &'c str,
        _completion: rustyline::CompletionType,
    ) -> Cow<'c, str> {
        Cow::Owned(format!(
            "{}{}{}",
            colors::BRIGHT_CYAN,
            candidate,
            colors::RESET
        ))
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        true
    }
}

/// Colors for messages printed by the shell.
pub struct OutputHighlighter;

impl OutputHighlighter {
    pub fn success(msg: &str) -> String {
        format!("{}{}{}", colors::GREEN, msg, colors::RESET)
    }

    pub fn error(msg: &str) -> String {
        format!("{}{}{}", colors::BRIGHT_RED, msg, colors::RESET)
    }

    pub fn warning(msg: &str) -> String {
        format!("{}{}{}", colors::YELLOW, msg, colors::RESET)
    }

    /// Section headings such as the menu title.
    pub fn heading(msg: &str) -> String {
        format!("{}{}{}", colors::BOLD, msg, colors::RESET)
    }
}
