//! In-memory remote store double
//!
//! Implements the full `RemoteStore` contract against in-process maps, with
//! a deterministic logical clock, remote-call counters for cache
//! assertions, and one-shot failure injection.

use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};
use quillpad::client::remote::RemoteStore;
use quillpad::client::sequencer;
use quillpad::shared::document::{Document, DocumentPermission, DocumentUpdate};
use quillpad::shared::error::{Result, SharedError};
use quillpad::shared::user::{AuthResponse, User};
use quillpad::shared::version::{DocumentVersion, VersionChangeType};
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::Mutex;
use uuid::Uuid;

/// Account record: password + user row
type Account = (String, User);

#[derive(Default)]
pub struct InMemoryRemoteStore {
    documents: Mutex<HashMap<Uuid, Document>>,
    versions: Mutex<Vec<DocumentVersion>>,
    accounts: Mutex<HashMap<String, Account>>,
    signed_in: Mutex<Option<User>>,
    clock: AtomicI64,
    fail_next: Mutex<Option<String>>,
    pub fetch_document_calls: AtomicUsize,
    pub fetch_versions_calls: AtomicUsize,
}

impl InMemoryRemoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next document/version operation fail with a remote error
    pub fn fail_next(&self, message: &str) {
        *self.fail_next.lock().unwrap() = Some(message.to_string());
    }

    fn take_failure(&self) -> Result<()> {
        match self.fail_next.lock().unwrap().take() {
            Some(message) => Err(SharedError::remote(message)),
            None => Ok(()),
        }
    }

    /// Strictly increasing RFC3339 timestamps, one second apart
    fn next_timestamp(&self) -> String {
        let tick = self.clock.fetch_add(1, Ordering::SeqCst);
        let base = Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap();
        (base + Duration::seconds(tick)).to_rfc3339()
    }

    fn email_for(&self, user_id: Uuid) -> String {
        self.accounts
            .lock()
            .unwrap()
            .values()
            .find(|(_, user)| user.id == user_id)
            .map(|(_, user)| user.email.clone())
            .unwrap_or_else(|| format!("{}@example.com", user_id))
    }

    pub fn document_count(&self) -> usize {
        self.documents.lock().unwrap().len()
    }

    pub fn version_count(&self, document_id: Uuid) -> usize {
        self.versions
            .lock()
            .unwrap()
            .iter()
            .filter(|v| v.document_id == document_id)
            .count()
    }
}

#[async_trait]
impl RemoteStore for InMemoryRemoteStore {
    async fn create_document(
        &self,
        title: &str,
        content: &str,
        user_id: Uuid,
    ) -> Result<Document> {
        self.take_failure()?;
        let now = self.next_timestamp();
        let document = Document {
            id: Uuid::new_v4(),
            title: title.to_string(),
            content: content.to_string(),
            user_id,
            created_at: now.clone(),
            updated_at: now,
            permission: DocumentPermission::Owner,
        };
        self.documents
            .lock()
            .unwrap()
            .insert(document.id, document.clone());

        self.create_document_version(document.id, title, content, user_id, VersionChangeType::Created)
            .await?;
        Ok(document)
    }

    async fn fetch_documents(&self, user_id: Uuid) -> Result<Vec<Document>> {
        self.take_failure()?;
        let mut documents: Vec<Document> = self
            .documents
            .lock()
            .unwrap()
            .values()
            .filter(|doc| doc.user_id == user_id)
            .cloned()
            .collect();
        documents.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(documents)
    }

    async fn fetch_document(&self, id: Uuid, user_id: Uuid) -> Result<Option<Document>> {
        self.take_failure()?;
        self.fetch_document_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .documents
            .lock()
            .unwrap()
            .get(&id)
            .filter(|doc| doc.user_id == user_id)
            .cloned())
    }

    async fn update_document(
        &self,
        id: Uuid,
        update: &DocumentUpdate,
        user_id: Uuid,
    ) -> Result<()> {
        self.take_failure()?;
        let now = self.next_timestamp();
        let mut documents = self.documents.lock().unwrap();
        let doc = documents
            .get_mut(&id)
            .filter(|doc| doc.user_id == user_id)
            .ok_or(SharedError::NotFound)?;
        doc.apply(update);
        doc.updated_at = now;
        Ok(())
    }

    async fn delete_document(&self, id: Uuid, user_id: Uuid) -> Result<()> {
        self.take_failure()?;
        let removed = self
            .documents
            .lock()
            .unwrap()
            .get(&id)
            .filter(|doc| doc.user_id == user_id)
            .is_some();
        if removed {
            self.documents.lock().unwrap().remove(&id);
            self.versions
                .lock()
                .unwrap()
                .retain(|v| v.document_id != id);
        }
        Ok(())
    }

    async fn create_document_version(
        &self,
        document_id: Uuid,
        title: &str,
        content: &str,
        user_id: Uuid,
        change_type: VersionChangeType,
    ) -> Result<DocumentVersion> {
        self.take_failure()?;
        let version_number = sequencer::next_version_number(self, document_id).await?;
        let version = DocumentVersion {
            id: Uuid::new_v4(),
            document_id,
            title: title.to_string(),
            content: content.to_string(),
            version_number,
            change_description: sequencer::change_description(change_type).to_string(),
            created_at: self.next_timestamp(),
            created_by: user_id,
            created_by_email: self.email_for(user_id),
        };
        self.versions.lock().unwrap().push(version.clone());
        Ok(version)
    }

    async fn fetch_document_versions(&self, document_id: Uuid) -> Result<Vec<DocumentVersion>> {
        self.take_failure()?;
        self.fetch_versions_calls.fetch_add(1, Ordering::SeqCst);
        let mut versions: Vec<DocumentVersion> = self
            .versions
            .lock()
            .unwrap()
            .iter()
            .filter(|v| v.document_id == document_id)
            .cloned()
            .collect();
        versions.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(versions)
    }

    async fn latest_version_number(&self, document_id: Uuid) -> Result<Option<i64>> {
        self.take_failure()?;
        Ok(self
            .versions
            .lock()
            .unwrap()
            .iter()
            .filter(|v| v.document_id == document_id)
            .map(|v| v.version_number)
            .max())
    }

    async fn restore_document_version(
        &self,
        document_id: Uuid,
        version_id: Uuid,
        user_id: Uuid,
    ) -> Result<()> {
        self.take_failure()?;
        let version = self
            .versions
            .lock()
            .unwrap()
            .iter()
            .find(|v| v.id == version_id && v.document_id == document_id)
            .cloned()
            .ok_or(SharedError::NotFound)?;

        let update = DocumentUpdate {
            title: Some(version.title.clone()),
            content: Some(version.content.clone()),
            permission: None,
        };
        self.update_document(document_id, &update, user_id).await?;
        self.create_document_version(
            document_id,
            &version.title,
            &version.content,
            user_id,
            VersionChangeType::Restored,
        )
        .await?;
        Ok(())
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthResponse> {
        let accounts = self.accounts.lock().unwrap();
        match accounts.get(email) {
            Some((stored, user)) if stored == password => {
                let user = user.clone();
                drop(accounts);
                *self.signed_in.lock().unwrap() = Some(user.clone());
                Ok(AuthResponse::ok(user))
            }
            _ => Ok(AuthResponse::failed("Invalid login credentials")),
        }
    }

    async fn sign_up(&self, email: &str, password: &str) -> Result<AuthResponse> {
        let mut accounts = self.accounts.lock().unwrap();
        if accounts.contains_key(email) {
            return Ok(AuthResponse::failed("User already registered"));
        }
        let now = self.next_timestamp();
        let user = User {
            id: Uuid::new_v4(),
            email: email.to_string(),
            created_at: now.clone(),
            updated_at: now,
        };
        accounts.insert(email.to_string(), (password.to_string(), user.clone()));
        drop(accounts);
        *self.signed_in.lock().unwrap() = Some(user.clone());
        Ok(AuthResponse::ok(user))
    }

    async fn sign_out(&self) -> Result<()> {
        *self.signed_in.lock().unwrap() = None;
        Ok(())
    }

    async fn current_user(&self) -> Result<Option<User>> {
        Ok(self.signed_in.lock().unwrap().clone())
    }
}
