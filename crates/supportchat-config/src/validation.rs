//! Config validation.
//!
//! Every check pushes onto a shared error list so the user sees all
//! problems at once in a single `ConfigError`.

use crate::schema::SupportChatConfig;
use supportchat_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &SupportChatConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_api(&mut errors, config);
    validate_storage(&mut errors, config);
    validate_display(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

/// Push an error if `value` is outside `[min, max]`.
fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

fn validate_api(errors: &mut Vec<String>, config: &SupportChatConfig) {
    let url = config.api.base_url.trim();
    if url.is_empty() {
        errors.push("api.base_url is empty".into());
    } else if !(url.starts_with("http://") || url.starts_with("https://")) {
        errors.push(format!("api.base_url = {url:?} must start with http:// or https://"));
    }
}

fn validate_storage(errors: &mut Vec<String>, config: &SupportChatConfig) {
    if config.storage.session_key.trim().is_empty() {
        errors.push("storage.session_key is empty".into());
    }
}

fn validate_display(errors: &mut Vec<String>, config: &SupportChatConfig) {
    validate_range(
        errors,
        "display.session_prefix_len",
        config.display.session_prefix_len,
        1,
        36,
    );
}
