//! TOML config file loading and creation.

mod loader;
mod paths;
mod template;

#[cfg(test)]
mod tests;

pub use loader::{load_default, load_from_path};
pub(crate) use loader::{read_default, read_from_path};
pub use paths::{create_default_config, default_config_path};
