//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors a single command can fail with.
///
/// None of these end the REPL; the dispatcher turns each one into a one-line reply.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Bad field input (name, phone or birthday)
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Missing contact or phone number
    #[error("Not found: {0}")]
    NotFound(String),

    /// Too few arguments for the command
    #[error("Command '{command}' expects at least {expected} argument(s)")]
    ArgumentCount { command: String, expected: usize },
}

/// Errors that can occur while loading or saving the address book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the file failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The file exists but does not hold a valid address book
    #[error("Corrupt address book {path}: {source}")]
    Corrupt {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Serializing the address book failed
    #[error("Failed to serialize address book: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
