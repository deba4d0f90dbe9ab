//! The chat control unit: session manager, history loader and message
//! pipeline composed over one `ChatState`.

use std::sync::Arc;

use tracing::debug;

use crate::api::{ChatReply, ChatRequest};
use crate::history::load_history;
use crate::pipeline::ChatState;
use crate::session::resolve_session_id;
use crate::storage::KeyValueStore;
use crate::{ChatApi, ClientError, Message};

pub struct ChatSession {
    api: Arc<dyn ChatApi>,
    state: ChatState,
}

impl ChatSession {
    /// Resolve the session id from `store`, then fetch its history once.
    pub async fn activate(
        api: Arc<dyn ChatApi>,
        store: &dyn KeyValueStore,
        session_key: &str,
    ) -> Self {
        let session_id = resolve_session_id(store, session_key);
        let mut state = ChatState::new(session_id);

        if let Some(history) = load_history(api.as_ref(), state.session_id().as_str()).await {
            state.replace_messages(history);
        }

        Self { api, state }
    }

    pub fn state(&self) -> &ChatState {
        &self.state
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.state.set_draft(text);
    }

    /// First half of a submit: see [`ChatState::begin_send`].
    pub fn begin_submit(&mut self) -> Option<ChatRequest> {
        self.state.begin_send()
    }

    /// Perform the network call for a request from [`Self::begin_submit`].
    pub async fn dispatch(&self, request: &ChatRequest) -> Result<ChatReply, ClientError> {
        self.api.send_message(request).await
    }

    /// Second half of a submit: see [`ChatState::finish_send`].
    pub fn finish_submit(&mut self, outcome: Result<ChatReply, ClientError>) -> &Message {
        self.state.finish_send(outcome)
    }

    /// Submit the current draft and wait for the exchange to settle.
    /// Returns `false` if the draft was blank or a send was in flight.
    pub async fn submit(&mut self) -> bool {
        let Some(request) = self.begin_submit() else {
            return false;
        };
        debug!(session = %self.state.session_id(), "Submitting message");
        let outcome = self.dispatch(&request).await;
        self.finish_submit(outcome);
        true
    }
}
