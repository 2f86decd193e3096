//! Concurrent in-memory file store for cask.
//!
//! This crate implements a flat, string-keyed store that emulates file
//! storage semantics: named entries with whole-value reads and writes. Every
//! entry carries a digest of its content, computed at write time and
//! re-verified on every read.
//!
//! # Design Rules
//!
//! 1. The map is owned exclusively by the store; no other component holds a
//!    reference to it.
//! 2. A write stores content and its freshly computed digest in one critical
//!    section; the pairing is never torn.
//! 3. A read verifies the digest before returning content, under the same
//!    guard that performed the lookup.
//! 4. Integrity failures are surfaced, never silently corrected.
//! 5. Names are unique; empty names and empty content are legal.
//! 6. No persistence, no directories, no partial reads. "File" is a naming
//!    convention for a flat keyed entry.

pub mod entry;
pub mod error;
pub mod memory;
pub mod traits;

// Re-export primary types at crate root for ergonomic imports.
pub use entry::FileEntry;
pub use error::{StoreError, StoreResult};
pub use memory::InMemoryFileStore;
pub use traits::FileStore;
