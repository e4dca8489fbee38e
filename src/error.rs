//! Error types for the property storage subsystem.
//!
//! The taxonomy is deliberately narrow: a missing property is not an error
//! (lookups return `Option`, deletes are no-ops), and allocation failure is
//! left to the allocator. What remains is misuse, reported as a TypeError
//! the way the embedding interpreter expects.

use thiserror::Error;

/// Main error type for property storage operations.
#[derive(Debug, Error)]
pub enum JsError {
    #[error("TypeError: {message}")]
    TypeError { message: String },

    /// Unexpected internal states; these indicate a bug in the caller or
    /// in this crate, never a recoverable condition.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl JsError {
    pub fn type_error(message: impl Into<String>) -> Self {
        JsError::TypeError {
            message: message.into(),
        }
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        JsError::Internal(message.into())
    }
}
