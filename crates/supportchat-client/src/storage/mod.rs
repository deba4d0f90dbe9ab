//! Durable client-side key/value storage.
//!
//! The session manager only needs `get`/`set` by name, so storage is a
//! small trait with an in-memory backend (tests, ephemeral runs) and a
//! JSON-file backend (the terminal front-end).

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use supportchat_common::StorageError;

pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
