//! Error types for the trip planning library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all trip planning operations.
#[derive(Error, Debug)]
pub enum TripError {
    /// Input rejected by a guard before any state was mutated
    #[error("Invalid input for field '{field}': {reason}")]
    Validation { field: String, reason: String },
    /// Candidate guest address does not look like an e-mail
    #[error("'{email}' is not a valid e-mail address")]
    InvalidEmail { email: String },
    /// Candidate guest address is already on the invite list
    #[error("'{email}' has already been invited")]
    DuplicateEmail { email: String },
    /// Trip not found for the given ID
    #[error("Trip with ID {id} not found")]
    TripNotFound { id: u64 },
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// A collaborator call failed or rejected
    #[error("Remote operation failed: {message}")]
    Remote { message: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

impl TripError {
    /// Creates a validation error for a named field.
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        TripError::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates a remote failure with a message describing the call site.
    pub fn remote(message: impl Into<String>) -> Self {
        TripError::Remote {
            message: message.into(),
        }
    }

    /// Creates a database error with additional context.
    pub fn database(message: &str, source: rusqlite::Error) -> Self {
        TripError::Database {
            message: message.to_string(),
            source,
        }
    }

    /// True for errors a guard produced before any mutation happened.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            TripError::Validation { .. }
                | TripError::InvalidEmail { .. }
                | TripError::DuplicateEmail { .. }
        )
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| TripError::database(message, e))
    }
}

/// Result type alias for trip planning operations
pub type Result<T> = std::result::Result<T, TripError>;
