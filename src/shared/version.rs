//! Document Version Data Structure
//!
//! Represents an immutable, sequentially numbered snapshot of a document's
//! title and content at a point in its mutation history.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What kind of change produced a version
///
/// Derived from the mutation itself, never chosen by the caller.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum VersionChangeType {
    /// Initial version recorded at document creation
    Created,
    /// Only the title changed
    TitleUpdated,
    /// The content changed (title may have changed too)
    ContentModified,
    /// A past version was restored over the live document
    Restored,
}

impl VersionChangeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VersionChangeType::Created => "created",
            VersionChangeType::TitleUpdated => "title_updated",
            VersionChangeType::ContentModified => "content_modified",
            VersionChangeType::Restored => "restored",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "created" => Some(VersionChangeType::Created),
            "title_updated" => Some(VersionChangeType::TitleUpdated),
            "content_modified" => Some(VersionChangeType::ContentModified),
            "restored" => Some(VersionChangeType::Restored),
            _ => None,
        }
    }
}

/// Represents a document version
///
/// Versions are immutable once created: for a fixed `document_id` the
/// `version_number` sequence starts at 1, is gap-free, and is never reused.
/// Restoring does not rewrite history; it appends a new version.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DocumentVersion {
    /// Unique version ID
    pub id: Uuid,
    /// Document this version belongs to
    pub document_id: Uuid,
    /// Title snapshot
    pub title: String,
    /// Content snapshot (sanitized HTML)
    pub content: String,
    /// Position in the document's version sequence, starting at 1
    pub version_number: i64,
    /// Human-readable description of the change
    pub change_description: String,
    /// When the version was recorded (RFC3339 string)
    pub created_at: String,
    /// User who made the change
    pub created_by: Uuid,
    /// Email of the user who made the change (for history display)
    pub created_by_email: String,
}

impl DocumentVersion {
    /// Plain-text excerpt of the content for history lists
    ///
    /// Strips HTML tags and truncates to `max_len` characters with a
    /// trailing ellipsis.
    pub fn content_preview(&self, max_len: usize) -> String {
        let mut plain = String::with_capacity(self.content.len());
        let mut in_tag = false;
        for c in self.content.chars() {
            match c {
                '<' => in_tag = true,
                '>' => in_tag = false,
                c if !in_tag => plain.push(c),
                _ => {}
            }
        }
        if plain.chars().count() > max_len {
            let truncated: String = plain.chars().take(max_len).collect();
            format!("{}...", truncated)
        } else {
            plain
        }
    }
}

/// Request body for recording a version
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateVersionRequest {
    pub title: String,
    pub content: String,
    pub user_id: Uuid,
    pub version_number: i64,
    pub change_description: String,
}

/// Response for listing a document's versions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListVersionsResponse {
    pub versions: Vec<DocumentVersion>,
}

/// Request body for restoring a version
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestoreVersionRequest {
    pub version_id: Uuid,
    pub user_id: Uuid,
}
