//! Foundation types for cask.
//!
//! This crate provides the types shared across the cask workspace. Every
//! other cask crate depends on `cask-types`.
//!
//! # Key Types
//!
//! - [`Digest`] — Fixed-size integrity checksum of entry content

pub mod digest;
pub mod error;

pub use digest::Digest;
pub use error::TypeError;
