mod cli;
mod logging;
mod repl;

use std::path::PathBuf;
use std::sync::Arc;

use supportchat_client::{ChatSession, FileStore, HttpChatApi, KeyValueStore, MemoryStore};
use supportchat_common::{ChatError, StorageError};
use supportchat_config::load_config;

/// Storage for the session id. An empty `configured` path means the
/// platform default; if that cannot be resolved the session id lives in
/// memory for this run only.
fn open_store(
    configured: &str,
    open_default: impl FnOnce() -> Result<FileStore, StorageError>,
) -> Box<dyn KeyValueStore> {
    if !configured.is_empty() {
        return Box::new(FileStore::new(PathBuf::from(configured)));
    }

    match open_default() {
        Ok(store) => {
            tracing::debug!(path = %store.path().display(), "Using session storage");
            Box::new(store)
        }
        Err(e) => {
            tracing::warn!("Session storage unavailable, session will not persist: {e}");
            Box::new(MemoryStore::new())
        }
    }
}

async fn run(args: cli::Args) -> Result<(), ChatError> {
    let log = logging::init(args.log_level.as_deref());

    let config = load_config(args.config.as_deref(), |c| args.apply_overrides(c))?;
    log.apply_config_level(config.logging.level);
    tracing::info!(base_url = %config.api.base_url, "supportchat starting");

    let store = open_store(&config.storage.path, FileStore::open_default);
    let api = Arc::new(HttpChatApi::new(config.api.base_url.clone()));
    let session = ChatSession::activate(api, store.as_ref(), &config.storage.session_key).await;

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    repl::run_chat(session, &config.display, stdin, &mut stdout).await
}

#[tokio::main]
async fn main() {
    let args = cli::parse();
    if let Err(e) = run(args).await {
        eprintln!("supportchat: {e}");
        std::process::exit(1);
    }
}
