//! Session identifier resolution.
//!
//! The identifier lives in durable storage under a fixed key. An
//! existing entry is reused unchanged; otherwise a fresh v4 id is
//! generated and written back. Storage failures never surface: a
//! failed read is treated as "absent", and a failed write still leaves
//! the new id usable for this run.

use supportchat_common::SessionId;
use tracing::{debug, info, warn};

use crate::storage::KeyValueStore;

/// Default storage key for the session identifier.
pub const SESSION_STORAGE_KEY: &str = "chat_session_id";

pub fn resolve_session_id(store: &dyn KeyValueStore, key: &str) -> SessionId {
    match store.get(key) {
        Ok(Some(existing)) if !existing.is_empty() => {
            debug!(session = %existing, "Reusing stored session id");
            return SessionId::from_stored(existing);
        }
        Ok(_) => {}
        Err(e) => warn!(error = %e, key, "Session storage unreadable, treating as absent"),
    }

    let session_id = SessionId::generate();
    if let Err(e) = store.set(key, session_id.as_str()) {
        warn!(error = %e, key, "Failed to persist session id, using it for this run only");
    }
    info!(session = %session_id, "Started new chat session");
    session_id
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use crate::testing::FailingStore;

    #[test]
    fn first_activation_generates_and_persists() {
        let store = MemoryStore::new();
        let sid = resolve_session_id(&store, SESSION_STORAGE_KEY);

        assert_eq!(sid.as_str().len(), 36);
        assert_eq!(
            store.get(SESSION_STORAGE_KEY).unwrap().as_deref(),
            Some(sid.as_str())
        );
    }

    #[test]
    fn second_activation_reuses_stored_id() {
        let store = MemoryStore::new();
        let first = resolve_session_id(&store, SESSION_STORAGE_KEY);
        let second = resolve_session_id(&store.clone(), SESSION_STORAGE_KEY);
        assert_eq!(first, second);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn existing_value_is_used_verbatim() {
        let store = MemoryStore::new();
        store.set(SESSION_STORAGE_KEY, "legacy-session").unwrap();

        let sid = resolve_session_id(&store, SESSION_STORAGE_KEY);
        assert_eq!(sid.as_str(), "legacy-session");
    }

    #[test]
    fn empty_stored_value_is_treated_as_absent() {
        let store = MemoryStore::new();
        store.set(SESSION_STORAGE_KEY, "").unwrap();

        let sid = resolve_session_id(&store, SESSION_STORAGE_KEY);
        assert!(!sid.as_str().is_empty());
        assert_eq!(
            store.get(SESSION_STORAGE_KEY).unwrap().as_deref(),
            Some(sid.as_str())
        );
    }

    #[test]
    fn unreadable_storage_still_attempts_write() {
        let store = FailingStore::new(true, false);
        let sid = resolve_session_id(&store, SESSION_STORAGE_KEY);

        let writes = store.writes.lock().unwrap();
        assert_eq!(writes.len(), 1);
        assert_eq!(writes[0].0, SESSION_STORAGE_KEY);
        assert_eq!(writes[0].1, sid.as_str());
    }

    #[test]
    fn failed_write_still_yields_id() {
        let store = FailingStore::new(true, true);
        let sid = resolve_session_id(&store, SESSION_STORAGE_KEY);
        assert!(uuid_like(sid.as_str()));
    }

    #[test]
    fn custom_key_is_respected() {
        let store = MemoryStore::new();
        let sid = resolve_session_id(&store, "helpdesk_session");
        assert_eq!(store.get(SESSION_STORAGE_KEY).unwrap(), None);
        assert_eq!(
            store.get("helpdesk_session").unwrap().as_deref(),
            Some(sid.as_str())
        );
    }

    fn uuid_like(s: &str) -> bool {
        s.len() == 36 && s.chars().filter(|c| *c == '-').count() == 4
    }
}
