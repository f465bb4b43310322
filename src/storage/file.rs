use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use crate::storage::{KeyValueStore, Record, StorageError};

/// Key-value store kept as a single JSON object in a file.
///
/// Every write rewrites the whole document through a temp file and a rename,
/// so a crash never leaves a half-written file behind.
pub struct FileStorage {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    async fn read_all(&self) -> Result<Record, StorageError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Record::new()),
            Err(e) => return Err(e.into()),
        };

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Record::new());
        }

        serde_json::from_slice(&bytes).map_err(StorageError::Decode)
    }

    async fn write_all(&self, record: &Record) -> Result<(), StorageError> {
        let bytes = serde_json::to_vec_pretty(record).map_err(StorageError::Encode)?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }

        let tmp = self.path.with_extension("tmp");
        tokio::fs::write(&tmp, &bytes).await?;
        tokio::fs::rename(&tmp, &self.path).await?;

        debug!(path = %self.path.display(), bytes = bytes.len(), "storage written");
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for FileStorage {
    async fn get(&self, keys: &[&'static str]) -> Result<Record, StorageError> {
        let _guard = self.lock.lock().await;
        let mut all = self.read_all().await?;

        let mut record = Record::new();
        for key in keys {
            if let Some(value) = all.remove(*key) {
                record.insert((*key).to_string(), value);
            }
        }
        Ok(record)
    }

    async fn set(&self, record: Record) -> Result<(), StorageError> {
        let _guard = self.lock.lock().await;
        let mut all = self.read_all().await?;
        all.extend(record);
        self.write_all(&all).await
    }

    async fn remove(&self, keys: &[&'static str]) -> Result<(), StorageError> {
        let _guard = self.lock.lock().await;
        let mut all = self.read_all().await?;
        for key in keys {
            all.remove(*key);
        }
        self.write_all(&all).await
    }
}
