//! Document Data Structure
//!
//! Represents a titled rich-text document owned by a user.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Permission level a user holds on a document
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DocumentPermission {
    /// Full control, assigned to the creator
    Owner,
    /// Can edit title and content
    Editor,
    /// Read-only access
    Viewer,
}

impl Default for DocumentPermission {
    fn default() -> Self {
        DocumentPermission::Owner
    }
}

impl DocumentPermission {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentPermission::Owner => "owner",
            DocumentPermission::Editor => "editor",
            DocumentPermission::Viewer => "viewer",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "owner" => Some(DocumentPermission::Owner),
            "editor" => Some(DocumentPermission::Editor),
            "viewer" => Some(DocumentPermission::Viewer),
            _ => None,
        }
    }
}

/// Represents a document
///
/// `user_id` is fixed at creation and never changes; `updated_at` is set
/// server-side on every write and is monotonically non-decreasing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Document {
    /// Unique document ID
    pub id: Uuid,
    /// Document title (sanitized)
    pub title: String,
    /// Document content as sanitized HTML
    pub content: String,
    /// Owning user's ID
    pub user_id: Uuid,
    /// When the document was created (RFC3339 string)
    pub created_at: String,
    /// When the document was last modified (RFC3339 string)
    pub updated_at: String,
    /// Caller's permission on the document
    #[serde(default)]
    pub permission: DocumentPermission,
}

impl Document {
    /// Check if the given user owns this document
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.user_id == user_id
    }

    /// Apply a partial update to the in-memory copy
    ///
    /// Mirrors what the backend does to the stored row, so cached copies
    /// stay consistent without a refetch.
    pub fn apply(&mut self, update: &DocumentUpdate) {
        if let Some(title) = &update.title {
            self.title = title.clone();
        }
        if let Some(content) = &update.content {
            self.content = content.clone();
        }
        if let Some(permission) = update.permission {
            self.permission = permission;
        }
    }
}

/// Partial document update
///
/// Absent fields are left untouched by the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DocumentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission: Option<DocumentPermission>,
}

impl DocumentUpdate {
    /// Update carrying only a title change
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Update carrying only a content change
    pub fn content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::default()
        }
    }

    /// Whether the update carries no fields at all
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.permission.is_none()
    }
}

/// Input for creating a new document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDocumentInput {
    pub title: String,
    pub content: String,
}

/// Request body for creating a document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDocumentRequest {
    pub title: String,
    pub content: String,
    pub user_id: Uuid,
}

/// Response for listing documents
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListDocumentsResponse {
    pub documents: Vec<Document>,
}
