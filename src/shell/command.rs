//! Command trait and registry for the shell.

use chrono::NaiveDate;
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::sync::Arc;

use crate::console::Console;
use crate::error::Result;
use crate::storage::PhoneBook;

/// Result of executing a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    /// Command executed successfully with optional message.
    Success(Option<String>),
    /// Command could not do what was asked; the message says why.
    Error(String),
    /// Signal to exit the shell.
    Exit,
}

impl CommandResult {
    pub fn success(msg: impl Into<String>) -> Self {
        CommandResult::Success(Some(msg.into()))
    }

    pub fn ok() -> Self {
        CommandResult::Success(None)
    }

    pub fn error(msg: impl Into<String>) -> Self {
        CommandResult::Error(msg.into())
    }
}

/// Everything a command may touch while it runs.
pub struct ShellContext<'a> {
    pub book: &'a mut PhoneBook,
    pub console: &'a mut dyn Console,
    /// Present when running inside a shell; the help command needs it.
    pub registry: Option<&'a CommandRegistry>,
    /// Reference date for age and birthday calculations.
    pub today: NaiveDate,
}

impl<'a> ShellContext<'a> {
    pub fn new(book: &'a mut PhoneBook, console: &'a mut dyn Console) -> Self {
        Self {
            book,
            console,
            registry: None,
            today: chrono::Local::now().date_naive(),
        }
    }

    pub fn with_registry(mut self, registry: &'a CommandRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Writes each line of `text` to the console.
    pub fn say(&mut self, text: &str) {
        self.console.write_text(text);
    }
}

/// A command that can be executed in the shell.
pub trait Command: Send + Sync {
    /// Returns the primary name of the command.
    fn name(&self) -> &str;

    /// Position in the numbered menu. The number also works as an alias.
    fn menu_number(&self) -> Option<u8> {
        None
    }

    fn aliases(&self) -> &[&str] {
        &[]
    }

    /// One-line description, also used as the menu entry.
    fn description(&self) -> &str;

    /// Usage information (e.g., "sort [field] [order]").
    fn usage(&self) -> &str;

    /// Detailed help text.
    fn help(&self) -> &str {
        self.description()
    }

    /// Runs the command.
    ///
    /// User-facing failures come back as [`CommandResult::Error`]; `Err` is
    /// reserved for interrupted or closed input and storage failures.
    fn execute(&self, args: &[&str], ctx: &mut ShellContext) -> Result<CommandResult>;

    /// Completions for the argument at `arg_index` starting with `partial`.
    fn completions(&self, _arg_index: usize, _partial: &str) -> Vec<String> {
        vec![]
    }

    /// Maximum number of arguments (None = unlimited).
    fn max_args(&self) -> Option<usize> {
        Some(0)
    }
}

impl fmt::Debug for dyn Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name())
            .field("description", &self.description())
            .finish()
    }
}

/// Keeps the candidates from `options` that start with `partial`.
pub fn complete_from(options: &[&str], partial: &str) -> Vec<String> {
    options
        .iter()
        .filter(|o| o.starts_with(partial))
        .map(|o| o.to_string())
        .collect()
}

/// Registry of all available commands.
pub struct CommandRegistry {
    /// Commands indexed by their primary name.
    commands: HashMap<String, Arc<dyn Command>>,
    /// Alias (including menu number) to primary name.
    aliases: HashMap<String, String>,
    /// Every name and alias, sorted, for completion.
    names: BTreeSet<String>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
            aliases: HashMap::new(),
            names: BTreeSet::new(),
        }
    }

    pub fn register(&mut self, command: Arc<dyn Command>) {
        let name = command.name().to_string();
        self.names.insert(name.clone());

        let number = command.menu_number().map(|n| n.to_string());
        let aliases = command.aliases().iter().map(|a| a.to_string()).chain(number);
        for alias in aliases {
            self.names.insert(alias.clone());
            self.aliases.insert(alias, name.clone());
        }

        self.commands.insert(name, command);
    }

    /// Looks up a command by name, alias or menu number. Case-insensitive.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Command>> {
        let name = name.to_lowercase();
        if let Some(cmd) = self.commands.get(&name) {
            return Some(Arc::clone(cmd));
        }
        self.aliases
            .get(&name)
            .and_then(|primary| self.commands.get(primary))
            .map(Arc::clone)
    }

    pub fn commands(&self) -> impl Iterator<Item = &Arc<dyn Command>> {
        self.commands.values()
    }

    /// Numbered commands in menu order, followed by the rest by name.
    pub fn menu(&self) -> Vec<&Arc<dyn Command>> {
        let mut commands: Vec<_> = self.commands.values().collect();
        commands.sort_by_key(|c| (c.menu_number().unwrap_or(u8::MAX), c.name().to_string()));
        commands
    }

    /// Names and aliases starting with `prefix`, sorted.
    pub fn completions(&self, prefix: &str) -> Vec<String> {
        self.names
            .range(prefix.to_string()..)
            .take_while(|n| n.starts_with(prefix))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
