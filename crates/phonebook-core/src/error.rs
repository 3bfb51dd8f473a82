//! Error types for the phonebook

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PhonebookError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PhonebookError {
    #[error("name or number missing")]
    MissingField,

    /// A field was present but rejected; the message is shown to the client as-is.
    #[error("{0}")]
    Validation(String),

    #[error("malformatted id")]
    MalformedId(String),

    #[error("Name {0} already exists")]
    DuplicateName(String),

    #[error("contact not found")]
    NotFound,

    #[error("Storage error: {0}")]
    Storage(String),
}
