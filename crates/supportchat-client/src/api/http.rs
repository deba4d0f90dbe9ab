//! `ChatApi` over HTTP via reqwest.

use async_trait::async_trait;
use tracing::debug;

use crate::{ChatApi, ClientError, Message};

use super::types::{ChatReply, ChatRequest, HistoryResponse};

/// Longest slice of an error body kept in `ClientError::ApiError`.
const ERROR_BODY_LIMIT: usize = 200;

/// Chat server client.
///
/// No request timeout is configured: a hung request is bounded only by
/// the transport's own defaults.
pub struct HttpChatApi {
    base_url: String,
    http: reqwest::Client,
}

impl HttpChatApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    pub fn with_client(base_url: impl Into<String>, http: reqwest::Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, http }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn history_url(&self, session_id: &str) -> String {
        format!("{}/api/sessions/{}", self.base_url, session_id)
    }

    pub(crate) fn chat_url(&self) -> String {
        format!("{}/api/chat", self.base_url)
    }

    async fn error_for_status(response: reqwest::Response) -> ClientError {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        let text = text.chars().take(ERROR_BODY_LIMIT).collect::<String>();
        ClientError::ApiError(format!("HTTP {status}: {text}"))
    }
}

#[async_trait]
impl ChatApi for HttpChatApi {
    async fn fetch_history(&self, session_id: &str) -> Result<Vec<Message>, ClientError> {
        let url = self.history_url(session_id);
        debug!(%url, "Fetching chat history");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ClientError::NetworkError(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound);
        }
        if !status.is_success() {
            return Err(Self::error_for_status(response).await);
        }

        let body: HistoryResponse = response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(e.to_string()))?;

        Ok(body.messages)
    }

    async fn send_message(&self, request: &ChatRequest) -> Result<ChatReply, ClientError> {
        let url = self.chat_url();
        debug!(%url, len = request.message.len(), "Sending chat message");

        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| ClientError::NetworkError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::error_for_status(response).await);
        }

        response
            .json::<ChatReply>()
            .await
            .map_err(|e| ClientError::ParseError(e.to_string()))
    }
}
