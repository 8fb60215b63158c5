//! Core error types for nanobanana domain logic
//!
//! Most mutations degrade to a no-op or a default instead of failing;
//! these errors cover the few operations that are refused outright.

use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Task {0} not found")]
    TaskNotFound(u64),

    #[error("List '{0}' not found")]
    ListNotFound(String),

    #[error("Validation error: {field} - {message}")]
    Validation { field: String, message: String },
}

impl CoreError {
    /// Create a validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
