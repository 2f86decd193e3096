use cask_limiter::LimiterError;
use cask_store::StoreError;

/// Errors from benchmark orchestration.
#[derive(Debug, thiserror::Error)]
pub enum BenchError {
    /// The benchmark configuration is unusable.
    #[error("invalid benchmark config: {0}")]
    InvalidConfig(String),

    /// A worker's store operation failed.
    #[error("store operation failed: {0}")]
    Store(#[from] StoreError),

    /// A worker could not acquire an admission slot.
    #[error("admission failed: {0}")]
    Limiter(#[from] LimiterError),

    /// A worker task panicked or was cancelled before completing.
    #[error("benchmark worker failed to join: {0}")]
    Join(String),
}

/// Result alias for benchmark operations.
pub type BenchResult<T> = Result<T, BenchError>;
