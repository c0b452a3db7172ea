//! Client Subsystem
//!
//! The document editor's client core: session state over a remote document
//! backend.
//!
//! # Module Structure
//!
//! ```text
//! client/
//! ├── mod.rs        - Module exports
//! ├── config.rs     - Server URL + token configuration
//! ├── remote/       - RemoteStore trait and the HTTP implementation
//! ├── sanitize.rs   - Title/content sanitization
//! ├── cache.rs      - Document cache (freshness window) and version cache
//! ├── sequencer.rs  - Version numbering and change classification
//! ├── store.rs      - Document session store
//! ├── auth.rs       - Auth store and input validators
//! └── time_utils.rs - Timestamp formatting and day grouping
//! ```

pub mod auth;
pub mod cache;
pub mod config;
pub mod remote;
pub mod sanitize;
pub mod sequencer;
pub mod store;
pub mod time_utils;

// Re-export commonly used types
pub use auth::AuthStore;
pub use cache::{DocumentCache, VersionCache};
pub use config::Config;
pub use remote::{HttpRemoteStore, RemoteStore};
pub use store::DocumentStore;
