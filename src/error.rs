//! Error types for gitrig.
//!
//! A non-zero exit from git is not an error here: it comes back as data in
//! [`crate::git::GitOutput`]. Errors cover the cases where no result exists.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for gitrig operations.
#[derive(Error, Debug)]
pub enum SessionError {
    /// The session was destroyed; no further commands may run against it.
    #[error("session '{0}' already destroyed")]
    Destroyed(String),

    /// Invalid input or state (missing directory, bad quoting, bad config).
    #[error("{0}")]
    UserError(String),

    /// Git could not be started.
    #[error("Git operation failed: {0}")]
    GitError(String),

    /// Filesystem operation failed.
    #[error("Filesystem operation failed: {0}")]
    IoError(String),
}

impl SessionError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            SessionError::Destroyed(_) => exit_codes::SESSION_DESTROYED,
            SessionError::UserError(_) => exit_codes::USER_ERROR,
            SessionError::GitError(_) => exit_codes::GIT_FAILURE,
            SessionError::IoError(_) => exit_codes::IO_FAILURE,
        }
    }
}

/// Result type alias for gitrig operations.
pub type Result<T> = std::result::Result<T, SessionError>;
