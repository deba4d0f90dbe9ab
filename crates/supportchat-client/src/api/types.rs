//! JSON bodies exchanged with the chat server.

use serde::{Deserialize, Serialize};

use crate::Message;

/// Body of `POST /api/chat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub session_id: String,
}

/// What the server wants the client to do with a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplyAction {
    Reply,
    /// Conversation should be handed to a human.
    Escalate,
    #[serde(other)]
    Other,
}

/// Body returned by `POST /api/chat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub response: String,
    #[serde(default)]
    pub action: Option<ReplyAction>,
    /// Echo of the session the server filed the exchange under.
    #[serde(default)]
    pub session_id: Option<String>,
}

impl ChatReply {
    pub fn is_escalation(&self) -> bool {
        self.action == Some(ReplyAction::Escalate)
    }
}

/// Body returned by `GET /api/sessions/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryResponse {
    pub messages: Vec<Message>,
}
