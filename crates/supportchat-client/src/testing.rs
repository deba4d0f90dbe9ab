//! In-memory fakes shared by unit tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use supportchat_common::StorageError;

use crate::api::{ChatReply, ChatRequest, ReplyAction};
use crate::storage::KeyValueStore;
use crate::{ChatApi, ClientError, Message};

/// Scripted `ChatApi`: history and replies are consumed in order, and
/// every request is recorded.
#[derive(Default)]
pub(crate) struct FakeApi {
    history: Mutex<Option<Result<Vec<Message>, ClientError>>>,
    replies: Mutex<VecDeque<Result<ChatReply, ClientError>>>,
    pub(crate) history_calls: Mutex<Vec<String>>,
    pub(crate) sent: Mutex<Vec<ChatRequest>>,
}

impl FakeApi {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_history(self, history: Result<Vec<Message>, ClientError>) -> Self {
        *self.history.lock().unwrap() = Some(history);
        self
    }

    pub(crate) fn with_reply(self, reply: Result<ChatReply, ClientError>) -> Self {
        self.replies.lock().unwrap().push_back(reply);
        self
    }

    pub(crate) fn sent(&self) -> Vec<ChatRequest> {
        self.sent.lock().unwrap().clone()
    }
}

pub(crate) fn reply(text: &str) -> ChatReply {
    ChatReply {
        response: text.into(),
        action: Some(ReplyAction::Reply),
        session_id: None,
    }
}

pub(crate) fn escalation(text: &str) -> ChatReply {
    ChatReply {
        response: text.into(),
        action: Some(ReplyAction::Escalate),
        session_id: None,
    }
}

#[async_trait]
impl ChatApi for FakeApi {
    async fn fetch_history(&self, session_id: &str) -> Result<Vec<Message>, ClientError> {
        self.history_calls.lock().unwrap().push(session_id.to_string());
        self.history
            .lock()
            .unwrap()
            .take()
            .unwrap_or(Err(ClientError::NotFound))
    }

    async fn send_message(&self, request: &ChatRequest) -> Result<ChatReply, ClientError> {
        self.sent.lock().unwrap().push(request.clone());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ClientError::NetworkError("no scripted reply".into())))
    }
}

/// Store whose reads and writes can be made to fail.
pub(crate) struct FailingStore {
    pub(crate) fail_get: bool,
    pub(crate) fail_set: bool,
    pub(crate) writes: Mutex<Vec<(String, String)>>,
}

impl FailingStore {
    pub(crate) fn new(fail_get: bool, fail_set: bool) -> Self {
        Self {
            fail_get,
            fail_set,
            writes: Mutex::new(Vec::new()),
        }
    }
}

impl KeyValueStore for FailingStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        if self.fail_get {
            return Err(StorageError::Unavailable("storage disabled".into()));
        }
        Ok(None)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.writes
            .lock()
            .unwrap()
            .push((key.to_string(), value.to_string()));
        if self.fail_set {
            return Err(StorageError::Unavailable("quota exceeded".into()));
        }
        Ok(())
    }
}
