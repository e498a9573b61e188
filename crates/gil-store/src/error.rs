/// Errors from key-value store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Keys written to the store must be non-empty.
    #[error("invalid key: {0:?}")]
    InvalidKey(String),

    /// The host state interface reported a failure.
    #[error("host {op} failed for key {key}: {reason}")]
    Host {
        op: &'static str,
        key: String,
        reason: String,
    },

    /// A lock guarding in-memory state was poisoned by a panicking writer.
    #[error("store lock poisoned: {0}")]
    Poisoned(String),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
