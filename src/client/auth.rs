//! Authentication
//!
//! Auth state over the remote auth primitives, plus the local input
//! validators the sign-in/sign-up forms run before anything reaches the
//! network.

use crate::client::remote::RemoteStore;
use crate::shared::error::SharedError;
use crate::shared::user::User;
use regex::Regex;
use std::sync::OnceLock;
use uuid::Uuid;

static EMAIL: OnceLock<Regex> = OnceLock::new();

fn email_pattern() -> &'static Regex {
    EMAIL.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"))
}

/// Check email shape
pub fn validate_email(email: &str) -> bool {
    email_pattern().is_match(email)
}

/// Check password strength
///
/// At least 6 characters, one lowercase and one uppercase letter. Failures
/// are field-level validation errors, recovered locally by the form — they
/// never reach the session store.
pub fn validate_password(password: &str) -> Result<(), SharedError> {
    if password.chars().count() < 6 {
        return Err(SharedError::validation(
            "password",
            "Password must be at least 6 characters",
        ));
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Err(SharedError::validation(
            "password",
            "Password must contain at least one lowercase letter",
        ));
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(SharedError::validation(
            "password",
            "Password must contain at least one uppercase letter",
        ));
    }
    Ok(())
}

/// Authentication state over a remote store
pub struct AuthStore<R: RemoteStore> {
    remote: R,
    /// The signed-in user, if any
    pub user: Option<User>,
    /// Whether an auth operation is in flight
    pub loading: bool,
    /// Message from the most recent failed operation
    pub error: Option<String>,
}

impl<R: RemoteStore> AuthStore<R> {
    pub fn new(remote: R) -> Self {
        Self {
            remote,
            user: None,
            loading: false,
            error: None,
        }
    }

    /// Access the remote store this session talks to
    pub fn remote(&self) -> &R {
        &self.remote
    }

    /// ID of the signed-in user, if any
    pub fn user_id(&self) -> Option<Uuid> {
        self.user.as_ref().map(|user| user.id)
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Sign in with email and password
    ///
    /// Failures land in `error`; nothing is thrown across the store
    /// boundary.
    pub async fn sign_in(&mut self, email: &str, password: &str) {
        self.loading = true;
        self.error = None;

        match self.remote.sign_in(email, password).await {
            Ok(response) => {
                if let Some(error) = response.error {
                    self.error = Some(error);
                } else {
                    self.user = response.user;
                }
            }
            Err(err) => {
                tracing::warn!("sign in failed: {}", err);
                self.error = Some(err.message());
            }
        }
        self.loading = false;
    }

    /// Sign up with email and password
    pub async fn sign_up(&mut self, email: &str, password: &str) {
        self.loading = true;
        self.error = None;

        match self.remote.sign_up(email, password).await {
            Ok(response) => {
                if let Some(error) = response.error {
                    self.error = Some(error);
                } else {
                    self.user = response.user;
                }
            }
            Err(err) => {
                tracing::warn!("sign up failed: {}", err);
                self.error = Some(err.message());
            }
        }
        self.loading = false;
    }

    /// Sign out the current user
    ///
    /// Local auth state is cleared even when the remote call fails.
    pub async fn sign_out(&mut self) {
        self.loading = true;

        match self.remote.sign_out().await {
            Ok(()) => {
                self.user = None;
                self.error = None;
            }
            Err(err) => {
                tracing::warn!("sign out failed: {}", err);
                self.user = None;
                self.error = Some(err.message());
            }
        }
        self.loading = false;
    }

    /// Refresh the signed-in user from the backend session
    pub async fn load_current_user(&mut self) {
        if self.user.is_some() {
            return;
        }
        if let Ok(user) = self.remote.current_user().await {
            self.user = user;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email_accepts_plain_addresses() {
        assert!(validate_email("user@example.com"));
        assert!(validate_email("first.last@sub.domain.org"));
    }

    #[test]
    fn test_validate_email_rejects_bad_shapes() {
        assert!(!validate_email("not-an-email"));
        assert!(!validate_email("a b@example.com"));
        assert!(!validate_email("user@nodot"));
        assert!(!validate_email("@example.com"));
    }

    #[test]
    fn test_validate_password_length() {
        let err = validate_password("Ab1").unwrap_err();
        match err {
            SharedError::Validation { field, message } => {
                assert_eq!(field, "password");
                assert_eq!(message, "Password must be at least 6 characters");
            }
            _ => panic!("Expected Validation"),
        }
    }

    #[test]
    fn test_validate_password_requires_lowercase() {
        let err = validate_password("ABCDEF").unwrap_err();
        assert!(matches!(err, SharedError::Validation { .. }));
        assert!(err.message().contains("lowercase"));
    }

    #[test]
    fn test_validate_password_requires_uppercase() {
        let err = validate_password("abcdef").unwrap_err();
        assert!(err.message().contains("uppercase"));
    }

    #[test]
    fn test_validate_password_accepts_mixed_case() {
        assert!(validate_password("Abcdef").is_ok());
    }
}
