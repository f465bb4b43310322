use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::Value;

use crate::storage::{KeyValueStore, Record, StorageError};

/// In-process store. Clones share the same entries.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<DashMap<String, Value>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStorage {
    async fn get(&self, keys: &[&'static str]) -> Result<Record, StorageError> {
        let mut record = Record::new();
        for key in keys {
            if let Some(value) = self.entries.get(*key) {
                record.insert((*key).to_string(), value.value().clone());
            }
        }
        Ok(record)
    }

    async fn set(&self, record: Record) -> Result<(), StorageError> {
        for (key, value) in record {
            self.entries.insert(key, value);
        }
        Ok(())
    }

    async fn remove(&self, keys: &[&'static str]) -> Result<(), StorageError> {
        for key in keys {
            self.entries.remove(*key);
        }
        Ok(())
    }
}
