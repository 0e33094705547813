//! Console backed by a rustyline editor.

use rustyline::Editor;
use rustyline::error::ReadlineError;
use rustyline::history::FileHistory;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use super::PhonebookHelper;
use super::history::HistoryFilter;
use crate::console::Console;
use crate::error::{PhonebookError, Result};

pub struct TerminalConsole {
    editor: Editor<PhonebookHelper, FileHistory>,
    /// Shared with the helper; completion and hints only apply to commands.
    command_mode: Arc<AtomicBool>,
    history_filter: HistoryFilter,
    clear_screen: bool,
}

fn map_readline_error(err: ReadlineError) -> PhonebookError {
    match err {
        ReadlineError::Interrupted => PhonebookError::Interrupted,
        ReadlineError::Eof => PhonebookError::InputClosed,
        ReadlineError::Io(e) => PhonebookError::Io(e),
        other => PhonebookError::Terminal(other.to_string()),
    }
}

impl TerminalConsole {
    pub fn new(
        editor: Editor<PhonebookHelper, FileHistory>,
        command_mode: Arc<AtomicBool>,
        history_filter: HistoryFilter,
        clear_screen: bool,
    ) -> Self {
        Self {
            editor,
            command_mode,
            history_filter,
            clear_screen,
        }
    }

    pub fn into_editor(self) -> Editor<PhonebookHelper, FileHistory> {
        self.editor
    }

    fn readline(&mut self, prompt: &str, command: bool) -> Result<String> {
        self.command_mode.store(command, Ordering::Relaxed);
        self.editor.readline(prompt).map_err(map_readline_error)
    }
}

impl Console for TerminalConsole {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        Ok(self.readline(prompt, false)?.trim().to_string())
    }

    fn read_command(&mut self, prompt: &str) -> Result<String> {
        let raw = self.readline(prompt, true)?;
        if self.history_filter.should_add(&raw) {
            if let Err(e) = self.editor.add_history_entry(raw.trim()) {
                log::warn!("Could not add history entry: {}", e);
            }
        }
        Ok(raw.trim().to_string())
    }

    fn write_line(&mut self, line: &str) {
        println!("{}", line);
    }

    fn clear(&mut self) {
        if !self.clear_screen {
            return;
        }
        if let Err(e) = self.editor.clear_screen() {
            log::debug!("Could not clear screen: {}", e);
        }
    }
}
