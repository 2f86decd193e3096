//! Content integrity checksums for cask.
//!
//! Provides domain-separated BLAKE3 digest computation and verification.
//! Digests here detect corruption (torn writes, stale checksums); they are
//! not a security boundary. All hashing wraps an established library, no
//! custom cryptography.

pub mod codec;

pub use codec::IntegrityCodec;
