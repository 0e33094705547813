use thiserror::Error;

use crate::schema::Field;

#[derive(Error, Debug)]
pub enum PhonebookError {
    /// Ctrl-C at a prompt.
    #[error("Input interrupted")]
    Interrupted,

    /// End of input: Ctrl-D or an exhausted script.
    #[error("Input closed")]
    InputClosed,

    #[error("Missing required field: {0}")]
    MissingField(Field),

    #[error("Record not found: {0}")]
    RecordNotFound(i64),

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("Terminal error: {0}")]
    Terminal(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PhonebookError>;
