//! HTTP Remote Store
//!
//! [`RemoteStore`] implementation speaking JSON over REST to the hosted
//! backend. Version inserts and restores are client-orchestrated: the
//! sequencer picks the number immediately before the insert, mirroring how
//! the backend's own API composes.

use super::RemoteStore;
use crate::client::config::Config;
use crate::client::sequencer;
use crate::shared::document::{CreateDocumentRequest, Document, DocumentUpdate, ListDocumentsResponse};
use crate::shared::error::{Result, SharedError};
use crate::shared::user::{AuthResponse, SignInRequest, SignUpRequest, User};
use crate::shared::version::{
    CreateVersionRequest, DocumentVersion, ListVersionsResponse, VersionChangeType,
};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use std::sync::RwLock;
use uuid::Uuid;

/// Successful auth payload from the backend
#[derive(Debug, Deserialize)]
struct AuthSession {
    user: User,
    token: String,
}

/// Error payload from the backend
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Remote store client over HTTP
pub struct HttpRemoteStore {
    config: Config,
    client: Client,
    token: RwLock<Option<String>>,
}

impl HttpRemoteStore {
    pub fn new(config: Config) -> Self {
        let token = config.get_token().cloned();
        Self {
            config,
            client: Client::new(),
            token: RwLock::new(token),
        }
    }

    fn url(&self, path: &str) -> String {
        self.config.api_url(path)
    }

    /// Attach the bearer token when one is held
    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        let token = self.token.read().expect("token lock poisoned").clone();
        match token {
            Some(token) => request.header("Authorization", format!("Bearer {}", token)),
            None => request,
        }
    }

    fn store_token(&self, token: Option<String>) {
        *self.token.write().expect("token lock poisoned") = token;
    }

    /// Convert a non-success response into a remote error
    async fn response_error(response: Response) -> SharedError {
        let status = response.status();
        let text = response.text().await.unwrap_or_else(|_| status.to_string());
        let message = serde_json::from_str::<ErrorBody>(&text)
            .map(|body| body.error)
            .unwrap_or(text);
        SharedError::remote(format!("Request failed: {} - {}", status, message))
    }

    /// Auth endpoints report failures as form messages, not remote errors
    async fn auth_failure(response: Response) -> Result<AuthResponse> {
        let status = response.status();
        let text = response.text().await.unwrap_or_else(|_| status.to_string());
        let message = serde_json::from_str::<ErrorBody>(&text)
            .map(|body| body.error)
            .unwrap_or(text);
        Ok(AuthResponse::failed(message))
    }
}

#[async_trait]
impl RemoteStore for HttpRemoteStore {
    async fn create_document(
        &self,
        title: &str,
        content: &str,
        user_id: Uuid,
    ) -> Result<Document> {
        let url = self.url("/api/documents");
        let request = CreateDocumentRequest {
            title: title.to_string(),
            content: content.to_string(),
            user_id,
        };

        let response = self
            .authorized(self.client.post(&url))
            .json(&request)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::response_error(response).await);
        }
        let document: Document = response.json().await?;
        tracing::debug!("created document {}", document.id);

        // Version 1 is recorded immediately after the insert.
        self.create_document_version(document.id, title, content, user_id, VersionChangeType::Created)
            .await?;

        Ok(document)
    }

    async fn fetch_documents(&self, user_id: Uuid) -> Result<Vec<Document>> {
        let url = self.url(&format!("/api/documents?user_id={}", user_id));

        let response = self.authorized(self.client.get(&url)).send().await?;
        if !response.status().is_success() {
            return Err(Self::response_error(response).await);
        }
        let list: ListDocumentsResponse = response.json().await?;
        Ok(list.documents)
    }

    async fn fetch_document(&self, id: Uuid, user_id: Uuid) -> Result<Option<Document>> {
        let url = self.url(&format!("/api/documents/{}?user_id={}", id, user_id));

        let response = self.authorized(self.client.get(&url)).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(Self::response_error(response).await);
        }
        let document: Document = response.json().await?;
        Ok(Some(document))
    }

    async fn update_document(
        &self,
        id: Uuid,
        update: &DocumentUpdate,
        user_id: Uuid,
    ) -> Result<()> {
        let url = self.url(&format!("/api/documents/{}?user_id={}", id, user_id));

        let response = self
            .authorized(self.client.patch(&url))
            .json(update)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::response_error(response).await);
        }
        Ok(())
    }

    async fn delete_document(&self, id: Uuid, user_id: Uuid) -> Result<()> {
        let url = self.url(&format!("/api/documents/{}?user_id={}", id, user_id));

        let response = self.authorized(self.client.delete(&url)).send().await?;
        if !response.status().is_success() {
            return Err(Self::response_error(response).await);
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
        // Read-then-insert with no transactional guard; see the sequencer
        // docs for the accepted race.
        let version_number = sequencer::next_version_number(self, document_id).await?;
        let url = self.url(&format!("/api/documents/{}/versions", document_id));
        let request = CreateVersionRequest {
            title: title.to_string(),
            content: content.to_string(),
            user_id,
            version_number,
            change_description: sequencer::change_description(change_type).to_string(),
        };

        let response = self
            .authorized(self.client.post(&url))
            .json(&request)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::response_error(response).await);
        }
        let version: DocumentVersion = response.json().await?;
        tracing::debug!(
            "recorded version {} for document {}",
            version.version_number,
            document_id
        );
        Ok(version)
    }

    async fn fetch_document_versions(&self, document_id: Uuid) -> Result<Vec<DocumentVersion>> {
        let url = self.url(&format!("/api/documents/{}/versions", document_id));

        let response = self.authorized(self.client.get(&url)).send().await?;
        if !response.status().is_success() {
            return Err(Self::response_error(response).await);
        }
        let list: ListVersionsResponse = response.json().await?;
        Ok(list.versions)
    }

    async fn latest_version_number(&self, document_id: Uuid) -> Result<Option<i64>> {
        let url = self.url(&format!(
            "/api/documents/{}/versions?order=version_number&limit=1",
            document_id
        ));

        let response = self.authorized(self.client.get(&url)).send().await?;
        if !response.status().is_success() {
            return Err(Self::response_error(response).await);
        }
        let list: ListVersionsResponse = response.json().await?;
        Ok(list.versions.first().map(|v| v.version_number))
    }

    async fn restore_document_version(
        &self,
        document_id: Uuid,
        version_id: Uuid,
        user_id: Uuid,
    ) -> Result<()> {
        let versions = self.fetch_document_versions(document_id).await?;
        let version = versions
            .into_iter()
            .find(|v| v.id == version_id)
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

        tracing::info!(
            "restored document {} from version {}",
            document_id,
            version.version_number
        );
        Ok(())
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthResponse> {
        let url = self.url("/api/auth/login");
        let request = SignInRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let response = self.client.post(&url).json(&request).send().await?;
        let status = response.status();
        if status.is_success() {
            let session: AuthSession = response.json().await?;
            self.store_token(Some(session.token));
            return Ok(AuthResponse::ok(session.user));
        }
        Self::auth_failure(response).await
    }

    async fn sign_up(&self, email: &str, password: &str) -> Result<AuthResponse> {
        let url = self.url("/api/auth/signup");
        let request = SignUpRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let response = self.client.post(&url).json(&request).send().await?;
        let status = response.status();
        if status.is_success() {
            let session: AuthSession = response.json().await?;
            self.store_token(Some(session.token));
            return Ok(AuthResponse::ok(session.user));
        }
        Self::auth_failure(response).await
    }

    async fn sign_out(&self) -> Result<()> {
        let url = self.url("/api/auth/logout");

        let response = self.authorized(self.client.post(&url)).send().await?;
        self.store_token(None);
        if !response.status().is_success() {
            return Err(Self::response_error(response).await);
        }
        Ok(())
    }

    async fn current_user(&self) -> Result<Option<User>> {
        if self.token.read().expect("token lock poisoned").is_none() {
            return Ok(None);
        }
        let url = self.url("/api/auth/me");

        let response = self.authorized(self.client.get(&url)).send().await?;
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(Self::response_error(response).await);
        }
        let user: User = response.json().await?;
        Ok(Some(user))
    }
}
