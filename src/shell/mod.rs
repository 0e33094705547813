//! Shell module - rustyline-based interactive shell.
//!
//! This module provides a shell-like interface with:
//! - A numbered menu of commands
//! - Command completion
//! - Syntax highlighting
//! - Command history
//! - Command hints

pub mod command;
pub mod commands;
pub mod completer;
pub mod highlighter;
pub mod hints;
pub mod history;
pub mod table;
pub mod terminal;

use rustyline::completion::Completer;
use rustyline::config::Configurer;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::FileHistory;
use rustyline::validate::{
    MatchingBracketValidator, ValidationContext, ValidationResult, Validator,
};
use rustyline::{Context, Editor, Helper};
use std::borrow::Cow;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::config::AppConfig;
use crate::console::Console;
use crate::error::{PhonebookError, Result};
use crate::logging;
use crate::storage::PhoneBook;

use command::{CommandRegistry, CommandResult, ShellContext};
use commands::{menu_text, register_all};
use completer::PhonebookCompleter;
use highlighter::{OutputHighlighter, PhonebookHighlighter};
use hints::PhonebookHinter;
use history::{HistoryConfig, HistoryFilter};
use terminal::TerminalConsole;

/// The prompt displayed to the user.
const PROMPT: &str = "phonebook> ";

const BACK_TO_MENU: &str = "Going back to the menu...";
const FAREWELL: &str = "Thanks for using this phonebook!";

/// Combined helper for rustyline that provides all shell features.
///
/// Everything is switched off while a field prompt is active.
pub struct PhonebookHelper {
    completer: PhonebookCompleter,
    highlighter: PhonebookHighlighter,
    hinter: PhonebookHinter,
    validator: MatchingBracketValidator,
    command_mode: Arc<AtomicBool>,
}

impl PhonebookHelper {
    pub fn new(registry: Arc<CommandRegistry>, command_mode: Arc<AtomicBool>) -> Self {
        Self {
            completer: PhonebookCompleter::new(Arc::clone(&registry)),
            highlighter: PhonebookHighlighter::new(Arc::clone(&registry)),
            hinter: PhonebookHinter::new(registry),
            validator: MatchingBracketValidator::new(),
            command_mode,
        }
    }

    fn active(&self) -> bool {
        self.command_mode.load(Ordering::Relaxed)
    }
}

impl Completer for PhonebookHelper {
    type Candidate = rustyline::completion::Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Self::Candidate>)> {
        if !self.active() {
            return Ok((pos, vec![]));
        }
        self.completer.complete(line, pos, ctx)
    }
}

impl Highlighter for PhonebookHelper {
    fn highlight<'l>(&self, line: &'l str, pos: usize) -> Cow<'l, str> {
        if !self.active() {
            return Cow::Borrowed(line);
        }
        self.highlighter.highlight(line, pos)
    }

    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        self.highlighter.highlight_prompt(prompt, default)
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        self.highlighter.highlight_hint(hint)
    }

    fn highlight_candidate<'c>(
        &self,
        candidate: &'c str,
        completion: rustyline::CompletionType,
    ) -> Cow<'c, str> {
        self.highlighter.highlight_candidate(candidate, completion)
    }

    fn highlight_char(&self, line: &str, pos: usize, kind: rustyline::highlight::CmdKind) -> bool {
        self.active() && self.highlighter.highlight_char(line, pos, kind)
    }
}

impl Hinter for PhonebookHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, ctx: &Context<'_>) -> Option<Self::Hint> {
        if !self.active() {
            return None;
        }
        self.hinter.hint(line, pos, ctx)
    }
}

impl Validator for PhonebookHelper {
    fn validate(&self, ctx: &mut ValidationContext<'_>) -> rustyline::Result<ValidationResult> {
        if !self.active() {
            return Ok(ValidationResult::Valid(None));
        }
        self.validator.validate(ctx)
    }
}

impl Helper for PhonebookHelper {}

/// Configuration for the shell.
pub struct ShellConfig {
    /// History configuration.
    pub history: HistoryConfig,
    /// Whether to show the menu on start.
    pub show_welcome: bool,
    /// Clear the terminal before each command.
    pub clear_screen: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            history: HistoryConfig::default(),
            show_welcome: true,
            clear_screen: true,
        }
    }
}

impl ShellConfig {
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            history: HistoryConfig::from_app_config(config),
            show_welcome: true,
            clear_screen: config.clear_screen,
        }
    }
}

/// The interactive shell.
pub struct Shell {
    /// Command registry.
    registry: Arc<CommandRegistry>,
    /// Shell configuration.
    config: ShellConfig,
}

impl Shell {
    /// Creates a new shell with default configuration.
    pub fn new() -> Self {
        Self::with_config(ShellConfig::default())
    }

    /// Creates a shell with custom configuration.
    pub fn with_config(config: ShellConfig) -> Self {
        let mut registry = CommandRegistry::new();
        register_all(&mut registry);

        Self {
            registry: Arc::new(registry),
            config,
        }
    }

    /// Runs the interactive shell on the terminal.
    pub fn run(&self, book: &mut PhoneBook) -> Result<()> {
        let command_mode = Arc::new(AtomicBool::new(true));
        let helper = PhonebookHelper::new(Arc::clone(&self.registry), Arc::clone(&command_mode));

        let mut editor: Editor<PhonebookHelper, FileHistory> =
            Editor::new().map_err(|e| PhonebookError::Terminal(e.to_string()))?;
        editor.set_helper(Some(helper));

        if let Err(e) = editor.set_max_history_size(self.config.history.max_entries) {
            log::warn!("Could not set history size: {}", e);
        }

        let history_path = &self.config.history.path;
        if history_path.exists() {
            if let Err(e) = editor.load_history(history_path) {
                log::warn!("Could not load history: {}", e);
            } else {
                log::debug!("Loaded history from {}", history_path.display());
            }
        }

        let mut console = TerminalConsole::new(
            editor,
            command_mode,
            HistoryFilter::new(self.config.history.clone()),
            self.config.clear_screen,
        );
        let outcome = self.run_loop(book, &mut console);

        let mut editor = console.into_editor();
        if let Some(parent) = history_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                let _ = std::fs::create_dir_all(parent);
            }
        }
        if let Err(e) = editor.save_history(history_path) {
            log::warn!("Failed to save history: {}", e);
        } else {
            log::debug!("Saved history to {}", history_path.display());
        }

        outcome
    }

    /// The command loop, on any console.
    ///
    /// Returns when the user quits or input ends. Storage failures end the
    /// loop with an error.
    pub fn run_loop(&self, book: &mut PhoneBook, console: &mut dyn Console) -> Result<()> {
        if self.config.show_welcome {
            console.write_text(&menu_text(&self.registry));
        }
        log::info!("Shell started");

        loop {
            let line = match console.read_command(PROMPT) {
                Ok(line) => line,
                Err(PhonebookError::Interrupted) => {
                    log::debug!("Interrupted at command prompt");
                    self.back_to_menu(console);
                    continue;
                }
                Err(PhonebookError::InputClosed) => {
                    log::info!("EOF received");
                    console.write_line(FAREWELL);
                    break;
                }
                Err(e) => return Err(e),
            };

            if line.is_empty() {
                continue;
            }
            console.clear();

            let mut ctx = ShellContext::new(book, console).with_registry(&self.registry);
            match self.execute_with_context(&line, &mut ctx) {
                Ok(CommandResult::Success(Some(msg))) => console.write_text(&msg),
                Ok(CommandResult::Success(None)) => {}
                Ok(CommandResult::Error(msg)) => {
                    console.write_text(&OutputHighlighter::error(&msg));
                }
                Ok(CommandResult::Exit) => {
                    console.write_line(FAREWELL);
                    break;
                }
                Err(PhonebookError::Interrupted) => {
                    log::debug!("Command '{}' interrupted", line);
                    self.back_to_menu(console);
                }
                Err(PhonebookError::InputClosed) => {
                    log::info!("Input closed during '{}'", line);
                    break;
                }
                Err(e) => {
                    log::error!("Command '{}' failed: {}", line, e);
                    return Err(e);
                }
            }
        }

        log::info!("Shell exited");
        Ok(())
    }

    fn back_to_menu(&self, console: &mut dyn Console) {
        console.write_line("");
        console.write_line(BACK_TO_MENU);
        console.write_line("");
        console.write_text(&menu_text(&self.registry));
    }

    /// Parses and executes a single command line.
    pub fn execute_line(
        &self,
        line: &str,
        book: &mut PhoneBook,
        console: &mut dyn Console,
    ) -> Result<CommandResult> {
        let mut ctx = ShellContext::new(book, console).with_registry(&self.registry);
        self.execute_with_context(line, &mut ctx)
    }

    /// Executes a command with the given context.
    fn execute_with_context(&self, line: &str, ctx: &mut ShellContext) -> Result<CommandResult> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some((cmd_name, args)) = parts.split_first() else {
            return Ok(CommandResult::ok());
        };

        log::debug!("Executing command: {} with args: {:?}", cmd_name, args);

        let Some(cmd) = self.registry.get(cmd_name) else {
            return Ok(CommandResult::error(format!(
                "Unknown command: '{}'\nType 'help' to see available commands.",
                cmd_name
            )));
        };

        if cmd.max_args().is_some_and(|max| args.len() > max) {
            return Ok(CommandResult::error(format!("Usage: {}", cmd.usage())));
        }

        logging::timed(cmd.name(), || cmd.execute(args, ctx))
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}
