//! Chat state and its transitions.

use supportchat_common::SessionId;
use tracing::{debug, error, warn};

use crate::api::{ChatReply, ChatRequest};
use crate::{ClientError, Message};

use super::FALLBACK_REPLY;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelinePhase {
    Idle,
    Sending,
}

/// Everything the presentation layer projects.
#[derive(Debug, Clone)]
pub struct ChatState {
    session_id: SessionId,
    messages: Vec<Message>,
    input_draft: String,
    busy: bool,
}

impl ChatState {
    pub fn new(session_id: SessionId) -> Self {
        Self {
            session_id,
            messages: Vec::new(),
            input_draft: String::new(),
            busy: false,
        }
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn draft(&self) -> &str {
        &self.input_draft
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn phase(&self) -> PipelinePhase {
        if self.busy {
            PipelinePhase::Sending
        } else {
            PipelinePhase::Idle
        }
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.input_draft = text.into();
    }

    /// Replace the whole transcript (history load).
    pub fn replace_messages(&mut self, messages: Vec<Message>) {
        self.messages = messages;
    }

    /// `idle -> sending`.
    ///
    /// Appends the draft as a user entry, clears the draft and sets busy.
    /// Returns `None` (changing nothing) if the draft is blank or a send
    /// is already in flight. The message is sent as typed, untrimmed.
    pub fn begin_send(&mut self) -> Option<ChatRequest> {
        if self.busy {
            debug!("Submit ignored, a send is already in flight");
            return None;
        }
        if self.input_draft.trim().is_empty() {
            return None;
        }

        let content = std::mem::take(&mut self.input_draft);
        self.messages.push(Message::user(content.clone()));
        self.busy = true;

        Some(ChatRequest {
            message: content,
            session_id: self.session_id.as_str().to_string(),
        })
    }

    /// `sending -> idle`.
    ///
    /// Appends exactly one assistant entry and clears busy regardless of
    /// the outcome. Any error, including a non-2xx status or a reply body
    /// without `response`, yields [`FALLBACK_REPLY`].
    pub fn finish_send(&mut self, outcome: Result<ChatReply, ClientError>) -> &Message {
        if !self.busy {
            warn!("Reply settled with no send in flight");
        }

        let content = match outcome {
            Ok(reply) => {
                if reply.is_escalation() {
                    warn!(session = %self.session_id, "Escalation triggered");
                }
                if let Some(echo) = reply.session_id.as_deref() {
                    if echo != self.session_id.as_str() {
                        debug!(local = %self.session_id, server = echo, "Server filed reply under a different session");
                    }
                }
                reply.response
            }
            Err(e) => {
                error!(error = %e, "Error sending message");
                FALLBACK_REPLY.to_string()
            }
        };

        self.messages.push(Message::assistant(content));
        self.busy = false;
        &self.messages[self.messages.len() - 1]
    }
}
