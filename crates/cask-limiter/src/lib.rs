//! Bounded-concurrency admission control for cask.
//!
//! The [`AdmissionLimiter`] caps how many store operations may be in flight
//! at once, independent of how many concurrent callers exist. Acquisition is
//! scoped: a successful [`AdmissionLimiter::acquire`] returns an
//! [`AdmissionPermit`] that returns its slot on drop, on every exit path
//! (success, failure, or panic unwind). Leaks and double-releases are
//! thereby unrepresentable in the API.

pub mod error;
pub mod limiter;

pub use error::LimiterError;
pub use limiter::{AdmissionLimiter, AdmissionPermit};
