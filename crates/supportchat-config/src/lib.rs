//! Support-chat configuration.
//!
//! TOML-based configuration with validation. Every section uses serde
//! defaults so a partial (or empty) config file works out of the box.
//!
//! ```rust,no_run
//! use supportchat_config::load_config;
//!
//! let config = load_config(None, |_| {}).expect("failed to load config");
//! println!("{}", config.api.base_url);
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{
    ApiConfig, DisplayConfig, LogLevel, LoggingConfig, StorageConfig, SupportChatConfig,
};
pub use toml_loader::{default_config_path, load_default, load_from_path};

use std::path::Path;

use supportchat_common::ConfigError;

/// Load config from `path`, or from the platform default location when
/// `path` is `None`, apply `overrides`, then validate the result.
///
/// Unlike [`load_from_path`], which only warns, this rejects a config
/// that fails validation. Validation sees the overridden values, so an
/// override can replace an invalid value from the file.
pub fn load_config(
    path: Option<&Path>,
    overrides: impl FnOnce(&mut SupportChatConfig),
) -> Result<SupportChatConfig, ConfigError> {
    let mut config = match path {
        Some(path) => toml_loader::read_from_path(path)?,
        None => toml_loader::read_default()?,
    };

    overrides(&mut config);
    validation::validate(&config)?;
    Ok(config)
}
