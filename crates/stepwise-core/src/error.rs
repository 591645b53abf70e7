//! Error types for the stepwise library.
//!
//! The roadmap engine itself is total and never returns these; they surface
//! only from the storage adapter and the [`crate::Planner`] facade.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for store and planner operations.
#[derive(Error, Debug)]
pub enum StepwiseError {
    /// Opening the store or running a statement failed
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// No thought with this id in the project
    #[error("Thought with ID {id} not found")]
    ThoughtNotFound { id: String },
    /// Creating the database directory failed
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The XDG data directory could not be resolved
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// A parameter or imported document was rejected
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// A document could not be encoded
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Invalid canvas configuration or a failed background task
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Pairs a database error message with its rusqlite source.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn with_source(self, source: rusqlite::Error) -> StepwiseError {
        StepwiseError::Database {
            message: self.message,
            source,
        }
    }
}

/// Names the rejected field before the reason is known.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    pub fn with_reason(self, reason: impl Into<String>) -> StepwiseError {
        StepwiseError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl StepwiseError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Wraps a blocking-task join failure.
    pub(crate) fn join(error: tokio::task::JoinError) -> Self {
        Self::Configuration {
            message: format!("Task join error: {error}"),
        }
    }
}

/// Attaches a message to rusqlite results.
pub trait DatabaseResultExt<T> {
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| StepwiseError::database(message).with_source(e))
    }
}

pub type Result<T> = std::result::Result<T, StepwiseError>;
