use crate::error::StoreResult;

/// Flat, name-keyed file store with verified reads.
///
/// All implementations must satisfy these invariants:
/// - A write stores content together with a freshly computed digest in one
///   atomic step; readers never observe a torn content/digest pairing.
/// - A read verifies the stored digest against the stored content before
///   returning; a mismatch is surfaced as an error, never masked.
/// - Concurrent writes to the same name are last-writer-wins at the map
///   level, but each writer's pairing is self-consistent.
/// - The store never interprets content — it is a pure key-value store.
pub trait FileStore: Send + Sync {
    /// Read an entry's content by name, verifying its digest first.
    ///
    /// Fails with [`StoreError::NotFound`] when the name is absent and with
    /// [`StoreError::DigestMismatch`] when the stored digest does not match
    /// the stored content.
    ///
    /// [`StoreError::NotFound`]: crate::error::StoreError::NotFound
    /// [`StoreError::DigestMismatch`]: crate::error::StoreError::DigestMismatch
    fn read(&self, name: &str) -> StoreResult<Vec<u8>>;

    /// Write content under a name, replacing any previous entry.
    ///
    /// Computes the content digest and stores both atomically. The write is
    /// visible to subsequent reads from any caller once this returns. Never
    /// fails at this layer; empty names and empty content are legal.
    fn write(&self, name: &str, content: &[u8]) -> StoreResult<()>;

    /// Check whether a name exists in the store.
    fn exists(&self, name: &str) -> StoreResult<bool>;

    /// Delete an entry by name. Returns `true` if the entry existed.
    fn delete(&self, name: &str) -> StoreResult<bool>;
}
