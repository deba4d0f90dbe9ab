//! Default TOML config template with documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# Support chat configuration
# Only override what you want to change -- missing fields use defaults.

[api]
# base_url = "http://localhost:8000"

[storage]
# path = ""                       # empty: <data dir>/supportchat/storage.json
# session_key = "chat_session_id"

[display]
# title = "AI Support Bot"
# session_prefix_len = 8          # 1-36
# show_typing_indicator = true

[logging]
# level = "INFO"                  # DEBUG, INFO, WARNING, ERROR
"##
}
