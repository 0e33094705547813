//! Phonebook - a personal contact directory for the terminal.
//!
//! This library provides validation and normalization of contact fields,
//! interactive collection of credentials, filtering and sorting of stored
//! records, SQLite storage, and a shell-like interactive interface.

pub mod cli;
pub mod collector;
pub mod config;
pub mod console;
pub mod credentials;
pub mod error;
pub mod logging;
pub mod model;
pub mod normalizer;
pub mod query;
pub mod schema;
pub mod shell;
pub mod storage;
pub mod validator;

// Re-export commonly used types
pub use config::AppConfig;
pub use console::{Console, ScriptedConsole};
pub use credentials::Credentials;
pub use error::{PhonebookError, Result};
pub use logging::{LogConfig, init_logging};
pub use model::{NewRecord, Record, RecordPatch};
pub use query::Criteria;
pub use schema::{Field, FieldDescriptor};
pub use shell::{Shell, ShellConfig};
pub use storage::PhoneBook;
