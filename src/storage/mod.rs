pub mod errors;
pub mod file;
pub mod memory;

pub use errors::StorageError;
pub use file::FileStorage;
pub use memory::MemoryStorage;

use async_trait::async_trait;
use serde_json::{Map, Value};

/// A partial record: only the keys that exist are present.
pub type Record = Map<String, Value>;

/// Key-value persistence the host provides (extension local storage or a
/// file on disk).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the given keys. Missing keys are absent from the result.
    async fn get(&self, keys: &[&'static str]) -> Result<Record, StorageError>;

    /// Write every entry of `record`, replacing existing values.
    async fn set(&self, record: Record) -> Result<(), StorageError>;

    /// Delete the given keys. Missing keys are ignored.
    async fn remove(&self, keys: &[&'static str]) -> Result<(), StorageError>;
}
