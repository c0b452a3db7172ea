//! User and Authentication Types
//!
//! Account types and the request/response shapes for the auth endpoints.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An authenticated user account
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    /// Unique user ID
    pub id: Uuid,
    /// Account email address
    pub email: String,
    /// When the account was created (RFC3339 string)
    pub created_at: String,
    /// When the account was last modified (RFC3339 string)
    pub updated_at: String,
}

/// Authentication outcome
///
/// Sign-in/up failures are carried in `error` rather than raised, so the
/// caller can render the message next to the form.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AuthResponse {
    pub user: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AuthResponse {
    /// Successful authentication
    pub fn ok(user: User) -> Self {
        Self {
            user: Some(user),
            error: None,
        }
    }

    /// Failed authentication with a message for the form
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            user: None,
            error: Some(error.into()),
        }
    }
}

/// Request body for signing in
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

/// Request body for signing up
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
}
