pub mod errors;
pub mod id;

pub use errors::{ChatError, ConfigError, StorageError};
pub use id::{new_id, SessionId};
