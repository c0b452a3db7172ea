//! Document and Version Caches
//!
//! In-memory mirrors of the remote store, owned by the session store. The
//! caches are an optimization only: they are always reconcilable from the
//! backend and are never the sole source of truth.

use crate::shared::document::Document;
use crate::shared::version::DocumentVersion;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Default staleness window for cached document reads
pub const DEFAULT_FRESHNESS_WINDOW: Duration = Duration::from_secs(30);

/// Read-through cache of document snapshots
///
/// A single shared freshness timestamp gates read validity, not per-entry
/// age: a fetch after the window closes treats every cached entry as stale,
/// even ones written moments ago. Writes (create/update) always land in the
/// cache regardless of the window.
#[derive(Debug)]
pub struct DocumentCache {
    entries: HashMap<Uuid, Document>,
    last_refresh: Option<Instant>,
    freshness_window: Duration,
}

impl Default for DocumentCache {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentCache {
    /// Create a cache with the default 30-second freshness window
    pub fn new() -> Self {
        Self::with_freshness_window(DEFAULT_FRESHNESS_WINDOW)
    }

    /// Create a cache with an explicit freshness window
    pub fn with_freshness_window(freshness_window: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            last_refresh: None,
            freshness_window,
        }
    }

    /// Look up a cached document, ignoring freshness
    pub fn get(&self, id: Uuid) -> Option<&Document> {
        self.entries.get(&id)
    }

    /// Look up a cached document, only if the cache is still fresh
    pub fn get_fresh(&self, id: Uuid) -> Option<&Document> {
        if self.is_fresh() {
            self.entries.get(&id)
        } else {
            None
        }
    }

    /// Insert or replace a document snapshot
    pub fn put(&mut self, doc: Document) {
        self.entries.insert(doc.id, doc);
    }

    /// Remove a single entry
    pub fn invalidate(&mut self, id: Uuid) {
        self.entries.remove(&id);
    }

    /// Drop all entries and the freshness stamp
    pub fn clear(&mut self) {
        self.entries.clear();
        self.last_refresh = None;
    }

    /// Record that a full refresh just completed
    pub fn mark_refreshed(&mut self) {
        self.last_refresh = Some(Instant::now());
    }

    /// Whether cached reads may still be served without a remote call
    pub fn is_fresh(&self) -> bool {
        match self.last_refresh {
            Some(at) => at.elapsed() <= self.freshness_window,
            None => false,
        }
    }

    /// Number of cached snapshots
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Per-document cache of version lists, newest first
///
/// Invalidated whenever the owning document is updated, deleted, or
/// restored, so the next history view refetches the authoritative list
/// instead of showing one missing the just-created entry.
#[derive(Debug, Default)]
pub struct VersionCache {
    entries: HashMap<Uuid, Vec<DocumentVersion>>,
}

impl VersionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached version list for a document, newest first
    pub fn get(&self, document_id: Uuid) -> Option<&[DocumentVersion]> {
        self.entries.get(&document_id).map(|v| v.as_slice())
    }

    /// Store the version list for a document
    pub fn put(&mut self, document_id: Uuid, versions: Vec<DocumentVersion>) {
        self.entries.insert(document_id, versions);
    }

    /// Drop the cached list for a document
    pub fn invalidate(&mut self, document_id: Uuid) {
        self.entries.remove(&document_id);
    }

    /// Drop all cached lists
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
