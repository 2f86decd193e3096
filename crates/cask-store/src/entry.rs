use cask_digest::IntegrityCodec;
use cask_types::Digest;

/// A stored entry: content paired with the digest computed when it was
/// written.
///
/// The digest is always the codec's checksum of `content` at the time of the
/// last write. A torn or stale pairing is a store bug, and the read path
/// exists to catch it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileEntry {
    /// Raw entry content.
    pub content: Vec<u8>,
    /// Checksum of `content`, computed at write time.
    pub digest: Digest,
}

impl FileEntry {
    /// Build an entry, computing the digest from the content.
    pub fn new(content: Vec<u8>, codec: &IntegrityCodec) -> Self {
        let digest = codec.checksum(&content);
        Self { content, digest }
    }

    /// Returns `true` if the stored digest matches the stored content.
    pub fn is_consistent(&self, codec: &IntegrityCodec) -> bool {
        codec.verify(&self.content, &self.digest)
    }

    /// Entry content size in bytes.
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Returns `true` if the entry content is empty.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_entry_is_consistent() {
        let entry = FileEntry::new(b"hello".to_vec(), &IntegrityCodec::FILE);
        assert!(entry.is_consistent(&IntegrityCodec::FILE));
    }

    #[test]
    fn empty_content_is_consistent() {
        let entry = FileEntry::new(Vec::new(), &IntegrityCodec::FILE);
        assert!(entry.is_empty());
        assert!(entry.is_consistent(&IntegrityCodec::FILE));
    }

    #[test]
    fn tampered_content_is_inconsistent() {
        let mut entry = FileEntry::new(b"hello".to_vec(), &IntegrityCodec::FILE);
        entry.content = b"tampered".to_vec();
        assert!(!entry.is_consistent(&IntegrityCodec::FILE));
    }

    #[test]
    fn mismatched_digest_is_inconsistent() {
        let mut entry = FileEntry::new(b"hello".to_vec(), &IntegrityCodec::FILE);
        entry.digest = IntegrityCodec::FILE.checksum(b"something else");
        assert!(!entry.is_consistent(&IntegrityCodec::FILE));
    }

    #[test]
    fn len_reports_content_size() {
        let entry = FileEntry::new(b"12345".to_vec(), &IntegrityCodec::FILE);
        assert_eq!(entry.len(), 5);
    }
}
