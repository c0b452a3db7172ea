//! Shared Error Types
//!
//! This module defines the error types used across the client.
//!
//! # Error Categories
//!
//! - `Validation` - Field-level input validation failures, recovered locally
//! - `NotFound` - A requested record does not exist (single-document fetches
//!   convert this into `Ok(None)` rather than an error)
//! - `Remote` - Any other backend failure, wrapped with context by the store
//! - `Auth` - Sign-in/sign-up failures, surfaced as `AuthResponse` data
//!
//! # Usage
//!
//! ```rust
//! use quillpad::shared::error::SharedError;
//!
//! let error = SharedError::validation("password", "Password must be at least 6 characters");
//! ```
use thiserror::Error;

/// Error types shared across the client subsystem
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Input validation error
    #[error("Validation error in field '{field}': {message}")]
    Validation {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },

    /// The requested record does not exist
    #[error("Resource not found")]
    NotFound,

    /// Backend or transport failure
    #[error("Remote error: {message}")]
    Remote {
        /// Human-readable error message
        message: String,
    },

    /// Authentication failure
    #[error("Auth error: {message}")]
    Auth {
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new remote error
    pub fn remote(message: impl Into<String>) -> Self {
        Self::Remote {
            message: message.into(),
        }
    }

    /// Create a new auth error
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth {
            message: message.into(),
        }
    }

    /// The bare message, without the category prefix
    ///
    /// This is what the session store writes into its shared error slot.
    pub fn message(&self) -> String {
        match self {
            SharedError::Validation { message, .. } => message.clone(),
            SharedError::NotFound => "Resource not found".to_string(),
            SharedError::Remote { message } => message.clone(),
            SharedError::Auth { message } => message.clone(),
        }
    }
}

impl From<reqwest::Error> for SharedError {
    fn from(err: reqwest::Error) -> Self {
        Self::remote(format!("Network error: {}", err))
    }
}

impl From<serde_json::Error> for SharedError {
    fn from(err: serde_json::Error) -> Self {
        Self::remote(format!("JSON error: {}", err))
    }
}

/// Result alias used across the client
pub type Result<T> = std::result::Result<T, SharedError>;
