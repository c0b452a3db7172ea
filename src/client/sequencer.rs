//! Version Sequencer
//!
//! Decides version numbers and change descriptions for document mutations,
//! and classifies which mutations warrant a version record at all.

use crate::client::remote::RemoteStore;
use crate::shared::document::{Document, DocumentUpdate};
use crate::shared::error::Result;
use crate::shared::version::VersionChangeType;
use uuid::Uuid;

/// Next version number for a document
///
/// Reads the highest existing number from the remote store and returns
/// `max + 1`, or 1 when no versions exist yet. The read and the subsequent
/// insert are not guarded by a transaction: two near-simultaneous saves
/// from the same session can race on the increment. Known limitation,
/// inherited from the original design and deliberately not papered over
/// here; fixing it requires a server-side atomic counter or a uniqueness
/// constraint on `(document_id, version_number)` with retry-on-conflict.
pub async fn next_version_number<R: RemoteStore + ?Sized>(
    remote: &R,
    document_id: Uuid,
) -> Result<i64> {
    let latest = remote.latest_version_number(document_id).await?;
    Ok(latest.unwrap_or(0) + 1)
}

/// Human-readable description for a change type
pub fn change_description(change_type: VersionChangeType) -> &'static str {
    match change_type {
        VersionChangeType::Created => "Document created",
        VersionChangeType::TitleUpdated => "Title updated",
        VersionChangeType::ContentModified => "Content modified",
        VersionChangeType::Restored => "Document restored from version",
    }
}

/// Classify an update against the previously known document state
///
/// A version is recorded only when the mutation changes `title` and/or
/// `content` relative to `previous`. Content changes win over title
/// changes; field-only updates (permission and the like) produce no
/// version. `previous` is the last copy this client fetched, which may
/// itself be stale relative to the backend.
pub fn classify_update(previous: &Document, update: &DocumentUpdate) -> Option<VersionChangeType> {
    let content_changed = update
        .content
        .as_ref()
        .is_some_and(|content| *content != previous.content);
    let title_changed = update
        .title
        .as_ref()
        .is_some_and(|title| *title != previous.title);

    if content_changed {
        Some(VersionChangeType::ContentModified)
    } else if title_changed {
        Some(VersionChangeType::TitleUpdated)
    } else {
        None
    }
}
