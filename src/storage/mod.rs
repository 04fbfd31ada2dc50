//! Key-value persistence abstraction
//!
//! The cart keeps a single serialized snapshot under one key. Backends only
//! need string values:
//! - `MemoryStore`: process-local map, for tests and embedding
//! - `FileStore`: one JSON file per key inside a directory

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::CartResult;
use async_trait::async_trait;

/// Abstract key-value storage interface
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any
    async fn get(&self, key: &str) -> CartResult<Option<String>>;

    /// Store `value` under `key`, replacing any prior value
    async fn set(&self, key: &str, value: &str) -> CartResult<()>;

    /// Remove `key`; removing a missing key succeeds
    async fn remove(&self, key: &str) -> CartResult<()>;

    /// Human-readable backend name for logs
    fn backend_name(&self) -> &'static str;
}
