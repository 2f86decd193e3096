/// Errors from file store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The requested name is absent from the store.
    #[error("file not found: {name}")]
    NotFound { name: String },

    /// Stored digest does not match stored content (data corruption or a
    /// write-path bug).
    #[error("digest mismatch for {name}: expected {expected}, computed {computed}")]
    DigestMismatch {
        name: String,
        expected: String,
        computed: String,
    },
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
