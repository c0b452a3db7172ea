//! Quillpad - Main Library
//!
//! Quillpad is the client core of a collaborative document editor: users
//! authenticate, create and edit rich-text documents, and inspect and
//! restore prior versions. This crate implements the document version/cache
//! subsystem that keeps the client's view of a remote document store
//! consistent across edits, restores, and cache invalidation.
//!
//! # Overview
//!
//! The library provides:
//! - A document session store exposing the state the UI observes
//!   (document list, current document, version history, loading/error
//!   flags)
//! - Version sequencing: gap-free version numbers and derived change
//!   descriptions, with a diff-based trigger policy deciding which
//!   mutations warrant a version record
//! - A read-through document cache with a shared 30-second freshness
//!   window, and a per-document version cache invalidated on mutation
//! - Title/content sanitization applied before anything is persisted
//! - An authentication store with local email/password validation
//!
//! # Module Structure
//!
//! - **`shared`** - Types exchanged with the backend
//!   - Document, version, and user records
//!   - Error types and application configuration
//! - **`client`** - The client subsystem
//!   - `RemoteStore` trait + HTTP implementation (the backend seam)
//!   - Caches, sequencer, session store, auth, time utilities
//!
//! # Usage
//!
//! ```rust,no_run
//! use quillpad::client::{Config, DocumentStore, HttpRemoteStore};
//! # async fn example(user_id: uuid::Uuid) {
//! let remote = HttpRemoteStore::new(Config::new());
//! let mut store = DocumentStore::new(remote);
//!
//! store.fetch_documents(user_id).await;
//! let doc = store
//!     .create_document("Meeting notes", "<p>Agenda</p>", user_id)
//!     .await;
//! # let _ = doc;
//! # }
//! ```
//!
//! # Concurrency
//!
//! The stores are single-writer by design: methods take `&mut self` and
//! suspend cooperatively at each remote-call boundary. Two operations
//! triggered before one another completes race on the shared loading/error
//! flags (last writer wins); completion order across independently
//! triggered chains is not guaranteed to match trigger order.
//!
//! # Error Handling
//!
//! All I/O-backed store operations capture failures into the store's
//! shared error slot instead of propagating them; `create_document` also
//! returns the outcome so the caller can decide navigation. Sanitization,
//! sequencing descriptions, and time utilities are pure and total.

/// Shared types and data structures
pub mod shared;

/// Client subsystem: session store, caches, remote seam
pub mod client;
