//! Shared Module
//!
//! This module contains the types and data structures exchanged with the
//! remote document backend. Everything here is plain data designed for
//! serialization and transmission over HTTP.

/// Document types and update shapes
pub mod document;

/// Document version types
pub mod version;

/// User and authentication types
pub mod user;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
pub use document::{CreateDocumentInput, Document, DocumentPermission, DocumentUpdate};
pub use error::SharedError;
pub use user::{AuthResponse, User};
pub use version::{DocumentVersion, VersionChangeType};
