//! Error types for subnet operations.
//!
//! Every failure here is local to one request and reported as a
//! structured outcome; nothing is transient, nothing is retried, and
//! none of these are fatal to the process.

use thiserror::Error;

/// Main error type for registry and orchestrator operations.
#[derive(Error, Debug)]
pub enum SubnetError {
    /// Unknown scenario key, miner uid, or validator uid
    #[error("Not found: {0}")]
    NotFound(String),

    /// Duplicate hotkey on registration
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Operation rejected because a required precondition fails
    #[error("Precondition failed: {0}")]
    Precondition(String),
}

/// Result type alias for subnet operations.
pub type Result<T> = std::result::Result<T, SubnetError>;

impl SubnetError {
    /// Creates a new not-found error.
    #[must_use]
    pub fn not_found<S: Into<String>>(resource: S) -> Self {
        Self::NotFound(resource.into())
    }

    /// Creates a new conflict error.
    #[must_use]
    pub fn conflict<S: Into<String>>(msg: S) -> Self {
        Self::Conflict(msg.into())
    }

    /// Creates a new precondition error.
    #[must_use]
    pub fn precondition<S: Into<String>>(msg: S) -> Self {
        Self::Precondition(msg.into())
    }
}
