use cask_types::Digest;

/// Domain-separated BLAKE3 integrity codec.
///
/// Each codec carries a domain tag (e.g., `"cask-file-v1"`) that is prepended
/// to every checksum computation. This prevents cross-type digest collisions:
/// two stores hashing identical bytes under different domains produce
/// different digests.
pub struct IntegrityCodec {
    domain: &'static str,
}

impl IntegrityCodec {
    /// Codec for file entry content.
    pub const FILE: Self = Self {
        domain: "cask-file-v1",
    };

    /// Create a codec with a custom domain tag.
    pub const fn new(domain: &'static str) -> Self {
        Self { domain }
    }

    /// Checksum raw bytes with domain separation.
    ///
    /// Pure and deterministic, total over any byte sequence including the
    /// empty one.
    pub fn checksum(&self, content: &[u8]) -> Digest {
        let mut hasher = blake3::Hasher::new();
        hasher.update(self.domain.as_bytes());
        hasher.update(b":");
        hasher.update(content);
        Digest::from_hash(*hasher.finalize().as_bytes())
    }

    /// Verify that content produces the expected digest.
    ///
    /// No side effects and no failure mode; always returns a boolean.
    pub fn verify(&self, content: &[u8], expected: &Digest) -> bool {
        self.checksum(content) == *expected
    }

    /// The domain tag used by this codec.
    pub fn domain(&self) -> &str {
        self.domain
    }
}
