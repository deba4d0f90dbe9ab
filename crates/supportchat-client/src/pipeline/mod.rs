//! Message pipeline: the idle/sending state machine around one exchange.
//!
//! `begin_send` moves `idle -> sending` (appending the user entry),
//! `finish_send` moves back to `idle` (appending exactly one assistant
//! entry, either the reply or [`FALLBACK_REPLY`]).

mod state;


pub use state::{ChatState, PipelinePhase};

/// Assistant entry appended when a send fails.
pub const FALLBACK_REPLY: &str = "Sorry, I'm having trouble connecting to the server.";
