//! Core TOML config loading: read from path or platform default.

use crate::schema::SupportChatConfig;
use crate::validation;
use std::path::Path;
use supportchat_common::ConfigError;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};

/// Load config from a specific TOML file path.
///
/// Missing fields take their serde defaults. Validation problems are
/// logged but the parsed config is still returned.
pub fn load_from_path(path: &Path) -> Result<SupportChatConfig, ConfigError> {
    let config = read_from_path(path)?;
    warn_if_invalid(&config);
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On Linux: `~/.config/supportchat/config.toml`
/// On macOS: `~/Library/Application Support/supportchat/config.toml`
///
/// If the file does not exist, a commented default is written and the
/// defaults are returned.
pub fn load_default() -> Result<SupportChatConfig, ConfigError> {
    let config = read_default()?;
    warn_if_invalid(&config);
    Ok(config)
}

fn warn_if_invalid(config: &SupportChatConfig) {
    if let Err(e) = validation::validate(config) {
        warn!("config validation warning: {e}");
    }
}

/// Parse `path` without validating it.
pub(crate) fn read_from_path(path: &Path) -> Result<SupportChatConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: SupportChatConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    info!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Parse the default config file, creating it first if missing.
pub(crate) fn read_default() -> Result<SupportChatConfig, ConfigError> {
    let path = default_config_path()?;

    match read_from_path(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!(path = %path.display(), "no config found, creating default");
            create_default_config(&path)?;
            Ok(SupportChatConfig::default())
        }
        Err(e) => Err(e),
    }
}
