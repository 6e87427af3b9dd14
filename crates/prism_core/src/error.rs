use thiserror::Error;

/// Failure reported by a [`Storage`](crate::Storage) backend.
///
/// Callers in the theme and collection crates never surface these to the UI;
/// they log them and fall back to in-memory state.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Storage is disabled or not present in this environment.
    #[error("storage is unavailable")]
    Unavailable,

    #[error("storage quota exceeded while writing `{key}`")]
    QuotaExceeded { key: String },

    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing document could not be encoded or decoded.
    #[error("storage serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
