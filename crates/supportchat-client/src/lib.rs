//! Chat client core for the support-bot API.
//!
//! Provides:
//! - Durable session identifiers over a pluggable key/value store
//! - One-shot history loading for the session
//! - The idle/sending message pipeline with a fallback reply on failure
//! - Terminal presentation helpers for the transcript

pub mod api;
pub mod controller;
pub mod history;
pub mod pipeline;
pub mod presentation;
pub mod session;
pub mod storage;

#[cfg(test)]
pub(crate) mod testing;

use async_trait::async_trait;

pub use api::{ChatReply, ChatRequest, HttpChatApi, ReplyAction};
pub use controller::ChatSession;
pub use pipeline::{ChatState, PipelinePhase, FALLBACK_REPLY};
pub use presentation::TranscriptView;
pub use session::{resolve_session_id, SESSION_STORAGE_KEY};
pub use storage::{FileStore, KeyValueStore, MemoryStore};

/// Remote chat endpoints used by the client.
#[async_trait]
pub trait ChatApi: Send + Sync {
    /// Fetch the stored transcript for a session.
    /// Returns `ClientError::NotFound` when the server has no such session.
    async fn fetch_history(&self, session_id: &str) -> Result<Vec<Message>, ClientError>;

    async fn send_message(&self, request: &ChatRequest) -> Result<ChatReply, ClientError>;
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Not found")]
    NotFound,
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
}
