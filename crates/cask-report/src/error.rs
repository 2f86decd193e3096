use thiserror::Error;

/// Errors from rendering a benchmark result.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The result carries no level samples to render.
    #[error("benchmark result has no level samples")]
    EmptySeries,

    /// The destination could not be written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The result could not be serialized.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
