//! Terminal projection of `ChatState`.
//!
//! Pure formatting: no state of its own beyond how much of the
//! transcript has already been printed.

use supportchat_common::SessionId;

use crate::pipeline::ChatState;
use crate::Message;

/// Shown while a send is in flight.
pub const TYPING_INDICATOR: &str = "AI is typing...";

/// Header line with the title and a truncated session id.
pub fn header(title: &str, session_id: &SessionId, prefix_len: usize) -> String {
    format!("{title}\nSession: {}...", session_id.prefix(prefix_len))
}

/// One role-tagged transcript entry.
pub fn format_message(message: &Message) -> String {
    format!("[{}] {}", message.role.as_str(), message.content)
}

pub fn typing_indicator(state: &ChatState, enabled: bool) -> Option<&'static str> {
    (enabled && state.is_busy()).then_some(TYPING_INDICATOR)
}

/// Tracks the printed prefix of the transcript so each render emits only
/// the newest entries, keeping the view at the bottom.
#[derive(Debug, Default)]
pub struct TranscriptView {
    shown: usize,
}

impl TranscriptView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Formatted entries not yet rendered. A transcript shorter than what
    /// was already shown was replaced wholesale and re-renders from the top.
    pub fn take_new_lines(&mut self, messages: &[Message]) -> Vec<String> {
        if messages.len() < self.shown {
            self.shown = 0;
        }
        let lines = messages[self.shown..].iter().map(format_message).collect();
        self.shown = messages.len();
        lines
    }

    pub fn reset(&mut self) {
        self.shown = 0;
    }
}
