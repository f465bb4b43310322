use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode record: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("failed to decode stored data: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}
