//! Line-oriented console used by the collector and the shell commands.
//!
//! The interactive terminal implementation lives in [`crate::shell`]; this
//! module holds the trait and a scripted implementation that never blocks.

use std::collections::VecDeque;

use crate::error::{PhonebookError, Result};

/// Input line that [`ScriptedConsole`] turns into an interrupt.
pub const SCRIPTED_INTERRUPT: &str = "\x03";

pub trait Console {
    /// Shows `prompt` and blocks until a line is read. The line comes back
    /// without surrounding whitespace.
    fn read_line(&mut self, prompt: &str) -> Result<String>;

    /// Reads a shell command. Terminals may enable completion and history
    /// here; by default this is a plain [`Console::read_line`].
    fn read_command(&mut self, prompt: &str) -> Result<String> {
        self.read_line(prompt)
    }

    fn write_line(&mut self, line: &str);

    /// Writes each line of `text` separately.
    fn write_text(&mut self, text: &str) {
        for line in text.split('\n') {
            self.write_line(line);
        }
    }

    fn clear(&mut self);
}

/// Console fed from a fixed list of input lines.
///
/// Once the script runs out every read fails with
/// [`PhonebookError::InputClosed`], so loops that re-prompt on bad input end
/// instead of blocking.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    output: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<S: Into<String>>(lines: impl IntoIterator<Item = S>) -> Self {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            output: Vec::new(),
        }
    }

    /// Everything written so far, prompts included.
    pub fn output(&self) -> &[String] {
        &self.output
    }

    pub fn transcript(&self) -> String {
        self.output.join("\n")
    }

    /// Input lines not consumed yet.
    pub fn remaining(&self) -> usize {
        self.input.len()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        self.output.push(prompt.to_string());
        match self.input.pop_front() {
            Some(line) if line == SCRIPTED_INTERRUPT => Err(PhonebookError::Interrupted),
            Some(line) => Ok(line.trim().to_string()),
            None => Err(PhonebookError::InputClosed),
        }
    }

    fn write_line(&mut self, line: &str) {
        self.output.push(line.to_string());
    }

    fn clear(&mut self) {}
}
