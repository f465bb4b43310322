use thiserror::Error;

use crate::storage::StorageError;

/// Why a capture did not produce a persisted interest.
#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("failed to encode interests: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to persist interests: {0}")]
    Storage(#[from] StorageError),
}
