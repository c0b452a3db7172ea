//! Document Session Store
//!
//! The single source of truth the UI observes: document list, current
//! document, version history, loading flags, and the shared error slot.
//! Reconciles the caches, the sequencer, and the remote store into one
//! consistent view.
//!
//! Failures never escape an operation uncaught: every method captures them
//! into `error` with a contextual prefix, and the store stays usable after
//! any failure. `create_document` additionally returns the outcome so the
//! caller can decide navigation.

use crate::client::cache::{DocumentCache, VersionCache};
use crate::client::remote::RemoteStore;
use crate::client::sanitize::{sanitize_content, sanitize_title};
use crate::client::sequencer::classify_update;
use crate::shared::document::{Document, DocumentUpdate};
use crate::shared::error::{Result, SharedError};
use crate::shared::version::DocumentVersion;
use std::time::Duration;
use uuid::Uuid;

/// Session store over a remote document backend
pub struct DocumentStore<R: RemoteStore> {
    remote: R,
    doc_cache: DocumentCache,
    version_cache: VersionCache,

    /// Documents owned by the user, ordered by `updated_at` descending
    pub documents: Vec<Document>,
    /// The document open in the editor, if any
    pub current_document: Option<Document>,
    /// Version history for the last requested document, newest first
    pub versions: Vec<DocumentVersion>,
    /// Whether a document operation is in flight
    pub loading: bool,
    /// Whether a version-history fetch is in flight
    ///
    /// Tracked separately so the editor view is not blocked by history
    /// panel fetches.
    pub versions_loading: bool,
    /// Message from the most recent failed operation
    pub error: Option<String>,
}

impl<R: RemoteStore> DocumentStore<R> {
    /// Create a store with the default cache freshness window
    pub fn new(remote: R) -> Self {
        Self::with_document_cache(remote, DocumentCache::new())
    }

    /// Create a store with an explicit cache freshness window
    pub fn with_freshness_window(remote: R, window: Duration) -> Self {
        Self::with_document_cache(remote, DocumentCache::with_freshness_window(window))
    }

    fn with_document_cache(remote: R, doc_cache: DocumentCache) -> Self {
        Self {
            remote,
            doc_cache,
            version_cache: VersionCache::new(),
            documents: Vec::new(),
            current_document: None,
            versions: Vec::new(),
            loading: false,
            versions_loading: false,
            error: None,
        }
    }

    /// Access the remote store this session talks to
    pub fn remote(&self) -> &R {
        &self.remote
    }

    /// Dismiss the current error message
    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Close the current document
    pub fn clear_current_document(&mut self) {
        self.current_document = None;
    }

    fn fail(&mut self, context: &str, err: SharedError) {
        let message = format!("{}: {}", context, err.message());
        tracing::warn!("{}", message);
        self.error = Some(message);
    }

    /// Replace the document list with the user's documents
    ///
    /// On failure the previous list is left untouched and the error is
    /// surfaced.
    pub async fn fetch_documents(&mut self, user_id: Uuid) {
        self.loading = true;
        self.error = None;

        match self.remote.fetch_documents(user_id).await {
            Ok(documents) => {
                for doc in &documents {
                    self.doc_cache.put(doc.clone());
                }
                self.doc_cache.mark_refreshed();
                self.documents = documents;
            }
            Err(err) => self.fail("Failed to fetch documents", err),
        }
        self.loading = false;
    }

    /// Open a document as the current one
    ///
    /// A cache hit within the freshness window is served without a remote
    /// call. A missing document resolves to `None`, not an error.
    pub async fn fetch_document(&mut self, id: Uuid, user_id: Uuid) {
        self.loading = true;
        self.error = None;

        if let Some(cached) = self.doc_cache.get_fresh(id) {
            tracing::debug!("serving document {} from cache", id);
            self.current_document = Some(cached.clone());
            self.loading = false;
            return;
        }

        match self.remote.fetch_document(id, user_id).await {
            Ok(Some(document)) => {
                self.doc_cache.put(document.clone());
                self.current_document = Some(document);
            }
            Ok(None) => {
                self.current_document = None;
            }
            Err(err) => self.fail("Failed to fetch document", err),
        }
        self.loading = false;
    }

    /// Create a document and prepend it to the list
    ///
    /// Inputs are sanitized before persistence; version 1 is recorded by
    /// the remote collaborator. Returns the created document so the caller
    /// can navigate to it.
    pub async fn create_document(
        &mut self,
        title: &str,
        content: &str,
        user_id: Uuid,
    ) -> Result<Document> {
        self.loading = true;
        self.error = None;

        let title = sanitize_title(title);
        let content = sanitize_content(content);

        let result = self.remote.create_document(&title, &content, user_id).await;
        let outcome = match result {
            Ok(document) => {
                tracing::info!("created document {}", document.id);
                self.doc_cache.put(document.clone());
                self.documents.insert(0, document.clone());
                Ok(document)
            }
            Err(err) => {
                let message = format!("Failed to create document: {}", err.message());
                self.error = Some(message.clone());
                tracing::warn!("{}", message);
                Err(SharedError::remote(message))
            }
        };
        self.loading = false;
        outcome
    }

    /// Apply a partial update to a document
    ///
    /// Provided title/content are sanitized. Whether the mutation warrants
    /// a version record is decided by diffing against the previously known
    /// copy (cache, else fetched first); permission-only updates create no
    /// version. The document's version cache entry is always invalidated.
    pub async fn update_document(&mut self, id: Uuid, updates: DocumentUpdate, user_id: Uuid) {
        self.loading = true;
        self.error = None;

        let update = DocumentUpdate {
            title: updates.title.map(|t| sanitize_title(&t)),
            content: updates.content.map(|c| sanitize_content(&c)),
            permission: updates.permission,
        };

        // The diff basis is the last copy this client saw. It may itself
        // be stale relative to the backend; see the sequencer docs.
        let previous = match self.doc_cache.get(id).cloned() {
            Some(doc) => Some(doc),
            None => match self.remote.fetch_document(id, user_id).await {
                Ok(doc) => doc,
                Err(err) => {
                    self.fail("Failed to update document", err);
                    self.loading = false;
                    return;
                }
            },
        };
        let change = previous
            .as_ref()
            .and_then(|prev| classify_update(prev, &update));

        if let Err(err) = self.remote.update_document(id, &update, user_id).await {
            self.fail("Failed to update document", err);
            self.loading = false;
            return;
        }

        if let (Some(change_type), Some(previous)) = (change, previous) {
            let mut snapshot = previous;
            snapshot.apply(&update);
            if let Err(err) = self
                .remote
                .create_document_version(id, &snapshot.title, &snapshot.content, user_id, change_type)
                .await
            {
                self.fail("Failed to record document version", err);
            }
        }

        for doc in &mut self.documents {
            if doc.id == id {
                doc.apply(&update);
            }
        }
        if let Some(current) = &mut self.current_document {
            if current.id == id {
                current.apply(&update);
            }
        }
        if let Some(cached) = self.doc_cache.get(id).cloned() {
            let mut updated = cached;
            updated.apply(&update);
            self.doc_cache.put(updated);
        }
        self.version_cache.invalidate(id);
        self.loading = false;
    }

    /// Delete a document and forget every local trace of it
    pub async fn delete_document(&mut self, id: Uuid, user_id: Uuid) {
        self.loading = true;
        self.error = None;

        match self.remote.delete_document(id, user_id).await {
            Ok(()) => {
                tracing::info!("deleted document {}", id);
                self.documents.retain(|doc| doc.id != id);
                if self
                    .current_document
                    .as_ref()
                    .is_some_and(|doc| doc.id == id)
                {
                    self.current_document = None;
                }
                self.doc_cache.invalidate(id);
                self.version_cache.invalidate(id);
            }
            Err(err) => self.fail("Failed to delete document", err),
        }
        self.loading = false;
    }

    /// Load the version history for a document
    ///
    /// Served from the version cache when a list is held; only the
    /// `versions_loading` flag is toggled.
    pub async fn fetch_document_versions(&mut self, document_id: Uuid) {
        self.versions_loading = true;
        self.error = None;

        if let Some(cached) = self.version_cache.get(document_id) {
            tracing::debug!("serving versions for {} from cache", document_id);
            self.versions = cached.to_vec();
            self.versions_loading = false;
            return;
        }

        match self.remote.fetch_document_versions(document_id).await {
            Ok(versions) => {
                self.version_cache.put(document_id, versions.clone());
                self.versions = versions;
            }
            Err(err) => self.fail("Failed to fetch document versions", err),
        }
        self.versions_loading = false;
    }

    /// Restore a past version over the live document
    ///
    /// The collaborator overwrites the live title/content and records a
    /// `Restored` version; both caches are then dropped for the document
    /// and the document and its history are re-fetched, so the observed
    /// state always reflects the applied restoration.
    pub async fn restore_document_version(
        &mut self,
        document_id: Uuid,
        version_id: Uuid,
        user_id: Uuid,
    ) {
        self.loading = true;
        self.error = None;

        if let Err(err) = self
            .remote
            .restore_document_version(document_id, version_id, user_id)
            .await
        {
            self.fail("Failed to restore document version", err);
            self.loading = false;
            return;
        }
        self.loading = false;

        // Drop stale copies so the refetch below cannot be served locally.
        self.doc_cache.invalidate(document_id);
        self.version_cache.invalidate(document_id);

        self.fetch_document(document_id, user_id).await;
        self.fetch_document_versions(document_id).await;

        if let Some(restored) = self.current_document.clone() {
            for doc in &mut self.documents {
                if doc.id == restored.id {
                    *doc = restored.clone();
                }
            }
        }
    }

    /// Whether the user may open the document
    ///
    /// Owner-only for now. Any failure answers `false`; the state and
    /// error slot are left untouched.
    pub async fn validate_document_access(&mut self, document_id: Uuid, user_id: Uuid) -> bool {
        if let Some(cached) = self.doc_cache.get_fresh(document_id) {
            return cached.is_owned_by(user_id);
        }
        match self.remote.fetch_document(document_id, user_id).await {
            Ok(Some(document)) => {
                self.doc_cache.put(document.clone());
                document.is_owned_by(user_id)
            }
            Ok(None) => false,
            Err(_) => false,
        }
    }
}
