//! Common test utilities and helpers
//!
//! Shared fixtures for the integration tests: the in-memory remote store
//! double and store constructors.

pub mod memory_store;

pub use memory_store::InMemoryRemoteStore;

use quillpad::client::DocumentStore;
use std::time::Duration;
use uuid::Uuid;

/// A session store over a fresh in-memory remote
pub fn store() -> DocumentStore<InMemoryRemoteStore> {
    DocumentStore::new(InMemoryRemoteStore::new())
}

/// A session store whose document cache goes stale immediately
pub fn store_with_stale_cache() -> DocumentStore<InMemoryRemoteStore> {
    DocumentStore::with_freshness_window(InMemoryRemoteStore::new(), Duration::from_millis(0))
}

pub fn user() -> Uuid {
    Uuid::new_v4()
}
