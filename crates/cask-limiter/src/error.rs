use thiserror::Error;

/// Errors from admission limiter operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LimiterError {
    /// The limiter was closed while a caller was waiting for a slot.
    #[error("admission limiter closed")]
    Closed,

    /// No slot was free at the time of a non-blocking acquire.
    #[error("no admission slot available")]
    Exhausted,
}
