//! Remote Store Client
//!
//! The seam to the hosted document backend. The session store only ever
//! talks to the backend through the [`RemoteStore`] trait, so tests can
//! inject an in-memory double and the transport can change without touching
//! the store.
//!
//! Persistence schema and transport are owned entirely by the backend; this
//! module only fixes the operation semantics:
//!
//! - `fetch_document` treats not-found as `Ok(None)`, never as an error
//! - `create_document` also durably records version 1
//! - `restore_document_version` overwrites the live document and records a
//!   `Restored` version
//! - auth failures come back as [`AuthResponse`] data, not as `Err`

pub mod http;

use crate::shared::document::{Document, DocumentUpdate};
use crate::shared::error::Result;
use crate::shared::user::{AuthResponse, User};
use crate::shared::version::{DocumentVersion, VersionChangeType};
use async_trait::async_trait;
use uuid::Uuid;

pub use http::HttpRemoteStore;

/// Operations the hosted backend must expose
#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// Create a document and record version 1 for it
    async fn create_document(&self, title: &str, content: &str, user_id: Uuid)
        -> Result<Document>;

    /// All documents owned by the user, ordered by `updated_at` descending
    async fn fetch_documents(&self, user_id: Uuid) -> Result<Vec<Document>>;

    /// A single document, or `None` if it does not exist
    async fn fetch_document(&self, id: Uuid, user_id: Uuid) -> Result<Option<Document>>;

    /// Apply a partial update; the backend sets `updated_at`
    async fn update_document(&self, id: Uuid, update: &DocumentUpdate, user_id: Uuid)
        -> Result<()>;

    /// Delete a document
    async fn delete_document(&self, id: Uuid, user_id: Uuid) -> Result<()>;

    /// Record a new version snapshot for a document
    ///
    /// The version number is assigned by the sequencer immediately before
    /// the insert; the description is derived from `change_type`.
    async fn create_document_version(
        &self,
        document_id: Uuid,
        title: &str,
        content: &str,
        user_id: Uuid,
        change_type: VersionChangeType,
    ) -> Result<DocumentVersion>;

    /// A document's versions, ordered by `created_at` descending
    async fn fetch_document_versions(&self, document_id: Uuid) -> Result<Vec<DocumentVersion>>;

    /// Highest existing version number for a document, if any
    ///
    /// Ordering: `version_number` descending, take 1.
    async fn latest_version_number(&self, document_id: Uuid) -> Result<Option<i64>>;

    /// Restore a past version over the live document
    ///
    /// Fetches the version, applies its title/content as a document update,
    /// and records a `Restored` version.
    async fn restore_document_version(
        &self,
        document_id: Uuid,
        version_id: Uuid,
        user_id: Uuid,
    ) -> Result<()>;

    /// Sign in with email and password
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthResponse>;

    /// Sign up with email and password
    async fn sign_up(&self, email: &str, password: &str) -> Result<AuthResponse>;

    /// Sign out the current user
    async fn sign_out(&self) -> Result<()>;

    /// The currently authenticated user, if any
    async fn current_user(&self) -> Result<Option<User>>;
}

/// A shared remote can back several stores at once (e.g. the document
/// session store and the auth store of one client session).
#[async_trait]
impl<R: RemoteStore + ?Sized> RemoteStore for std::sync::Arc<R> {
    async fn create_document(
        &self,
        title: &str,
        content: &str,
        user_id: Uuid,
    ) -> Result<Document> {
        (**self).create_document(title, content, user_id).await
    }

    async fn fetch_documents(&self, user_id: Uuid) -> Result<Vec<Document>> {
        (**self).fetch_documents(user_id).await
    }

    async fn fetch_document(&self, id: Uuid, user_id: Uuid) -> Result<Option<Document>> {
        (**self).fetch_document(id, user_id).await
    }

    async fn update_document(
        &self,
        id: Uuid,
        update: &DocumentUpdate,
        user_id: Uuid,
    ) -> Result<()> {
        (**self).update_document(id, update, user_id).await
    }

    async fn delete_document(&self, id: Uuid, user_id: Uuid) -> Result<()> {
        (**self).delete_document(id, user_id).await
    }

    async fn create_document_version(
        &self,
        document_id: Uuid,
        title: &str,
        content: &str,
        user_id: Uuid,
        change_type: VersionChangeType,
    ) -> Result<DocumentVersion> {
        (**self)
            .create_document_version(document_id, title, content, user_id, change_type)
            .await
    }

    async fn fetch_document_versions(&self, document_id: Uuid) -> Result<Vec<DocumentVersion>> {
        (**self).fetch_document_versions(document_id).await
    }

    async fn latest_version_number(&self, document_id: Uuid) -> Result<Option<i64>> {
        (**self).latest_version_number(document_id).await
    }

    async fn restore_document_version(
        &self,
        document_id: Uuid,
        version_id: Uuid,
        user_id: Uuid,
    ) -> Result<()> {
        (**self)
            .restore_document_version(document_id, version_id, user_id)
            .await
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthResponse> {
        (**self).sign_in(email, password).await
    }

    async fn sign_up(&self, email: &str, password: &str) -> Result<AuthResponse> {
        (**self).sign_up(email, password).await
    }

    async fn sign_out(&self) -> Result<()> {
        (**self).sign_out().await
    }

    async fn current_user(&self) -> Result<Option<User>> {
        (**self).current_user().await
    }
}
