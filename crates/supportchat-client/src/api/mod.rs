//! Chat server wire types and the HTTP client.
//!
//! Endpoints (relative to the configured base URL):
//! - `GET /api/sessions/{session_id}` -> `{ messages: [...] }` or 404
//! - `POST /api/chat` with `{ message, session_id }` -> `{ response, action? }`

mod http;
mod types;


pub use http::HttpChatApi;
pub use types::{ChatReply, ChatRequest, HistoryResponse, ReplyAction};
