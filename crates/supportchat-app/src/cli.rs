use std::path::PathBuf;

use clap::Parser;
use supportchat_config::SupportChatConfig;

/// Terminal client for the AI support chat server.
#[derive(Parser, Debug)]
#[command(name = "supportchat", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Chat server base URL (overrides `api.base_url`).
    #[arg(long)]
    pub api_url: Option<String>,

    /// Storage file holding the session id (overrides `storage.path`).
    #[arg(long)]
    pub storage: Option<PathBuf>,

    /// Log filter override, e.g. `supportchat=debug`.
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Args {
    /// Apply command-line overrides on top of the loaded config.
    pub fn apply_overrides(&self, config: &mut SupportChatConfig) {
        if let Some(url) = &self.api_url {
            config.api.base_url = url.clone();
        }
        if let Some(path) = &self.storage {
            config.storage.path = path.to_string_lossy().into_owned();
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
