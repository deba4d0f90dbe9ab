//! One-shot history loading for a session.

use tracing::{info, warn};

use crate::{ChatApi, ClientError, Message};

/// Fetch the stored transcript for `session_id`.
///
/// Returns `None` when there is nothing to show: the server does not
/// know the session (404), or the fetch failed for any other reason.
/// Failures are logged only.
pub async fn load_history(api: &dyn ChatApi, session_id: &str) -> Option<Vec<Message>> {
    match api.fetch_history(session_id).await {
        Ok(messages) => {
            info!(count = messages.len(), "Loaded chat history");
            Some(messages)
        }
        Err(ClientError::NotFound) => {
            info!("New session, no history found");
            None
        }
        Err(e) => {
            warn!(error = %e, "Failed to load history");
            None
        }
    }
}
