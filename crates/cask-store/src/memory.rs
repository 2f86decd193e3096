use std::collections::HashMap;
use std::sync::RwLock;

use cask_digest::IntegrityCodec;

use crate::entry::FileEntry;
use crate::error::{StoreError, StoreResult};
use crate::traits::FileStore;

/// In-memory, HashMap-based file store.
///
/// All entries are held in memory behind a `RwLock`. Writes hold the
/// exclusive guard across checksum-then-insert; reads hold the shared guard
/// across lookup-then-verify. Readers therefore never observe an entry
/// mid-construction, and two concurrent writes to the same name never race
/// on which digest belongs to which content.
pub struct InMemoryFileStore {
    codec: IntegrityCodec,
    files: RwLock<HashMap<String, FileEntry>>,
}

impl InMemoryFileStore {
    /// Create a new empty store using the default file codec.
    pub fn new() -> Self {
        Self::with_codec(IntegrityCodec::FILE)
    }

    /// Create a new empty store with a custom integrity codec.
    pub fn with_codec(codec: IntegrityCodec) -> Self {
        Self {
            codec,
            files: RwLock::new(HashMap::new()),
        }
    }

    /// Number of entries currently stored.
    pub fn len(&self) -> usize {
        self.files.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.files.read().expect("lock poisoned").is_empty()
    }

    /// Total bytes across all stored entries.
    pub fn total_bytes(&self) -> u64 {
        self.files
            .read()
            .expect("lock poisoned")
            .values()
            .map(|entry| entry.len() as u64)
            .sum()
    }

    /// Remove all entries from the store.
    pub fn clear(&self) {
        self.files.write().expect("lock poisoned").clear();
    }

    /// Return a sorted list of all entry names.
    pub fn names(&self) -> Vec<String> {
        let map = self.files.read().expect("lock poisoned");
        let mut names: Vec<String> = map.keys().cloned().collect();
        names.sort();
        names
    }
}

impl Default for InMemoryFileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FileStore for InMemoryFileStore {
    fn read(&self, name: &str) -> StoreResult<Vec<u8>> {
        let map = self.files.read().expect("lock poisoned");
        let entry = map.get(name).ok_or_else(|| StoreError::NotFound {
            name: name.to_string(),
        })?;

        // Verify under the same guard that performed the lookup, so no
        // writer can replace the entry between lookup and check.
        let computed = self.codec.checksum(&entry.content);
        if computed != entry.digest {
            return Err(StoreError::DigestMismatch {
                name: name.to_string(),
                expected: entry.digest.to_hex(),
                computed: computed.to_hex(),
            });
        }

        Ok(entry.content.clone())
    }

    fn write(&self, name: &str, content: &[u8]) -> StoreResult<()> {
        let mut map = self.files.write().expect("lock poisoned");
        // Checksum-then-insert under the exclusive guard: the stored digest
        // always pairs with the stored content.
        let entry = FileEntry::new(content.to_vec(), &self.codec);
        map.insert(name.to_string(), entry);
        Ok(())
    }

    fn exists(&self, name: &str) -> StoreResult<bool> {
        let map = self.files.read().expect("lock poisoned");
        Ok(map.contains_key(name))
    }

    fn delete(&self, name: &str) -> StoreResult<bool> {
        let mut map = self.files.write().expect("lock poisoned");
        Ok(map.remove(name).is_some())
    }
}

impl std::fmt::Debug for InMemoryFileStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.len();
        f.debug_struct("InMemoryFileStore")
            .field("entry_count", &count)
            .finish()
    }
}
