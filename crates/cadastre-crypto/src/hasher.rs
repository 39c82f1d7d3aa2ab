use std::path::Path;

use sha1::{Digest, Sha1};

use cadastre_types::DocumentDigest;

/// SHA-1 digester for title documents.
///
/// Every record on the ledger carries a 40-hex-character SHA-1 digest of its
/// document, so the algorithm is pinned to SHA-1 to stay wire-compatible
/// with deployed records. SHA-1 is broken for collision resistance: the
/// digest attests that a document has not changed by accident, not that a
/// motivated attacker could not substitute a colliding one. A migration to
/// a stronger algorithm would version the digest field, not reinterpret it.
pub struct DocumentHasher;

impl DocumentHasher {
    /// Digest raw bytes.
    pub fn digest_bytes(data: &[u8]) -> DocumentDigest {
        let mut hasher = Sha1::new();
        hasher.update(data);
        DocumentDigest::from_hash(hasher.finalize().into())
    }

    /// Digest the full contents of a file.
    ///
    /// The whole document is read into memory before digesting; the file
    /// handle is released on every exit path. Fails if the file cannot be
    /// opened or fully read.
    pub fn digest_file(path: impl AsRef<Path>) -> Result<DocumentDigest, HasherError> {
        let path = path.as_ref();
        let content = std::fs::read(path).map_err(|source| HasherError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Self::digest_bytes(&content))
    }

    /// Verify that data produces the expected digest.
    pub fn verify(data: &[u8], expected: &DocumentDigest) -> bool {
        Self::digest_bytes(data) == *expected
    }
}

/// Errors from digesting operations.
#[derive(Debug, thiserror::Error)]
pub enum HasherError {
    #[error("cannot read document {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn digest_is_deterministic() {
        let d1 = DocumentHasher::digest_bytes(b"hello world");
        let d2 = DocumentHasher::digest_bytes(b"hello world");
        assert_eq!(d1, d2);
    }

    #[test]
    fn digest_matches_known_vectors() {
        assert_eq!(
            DocumentHasher::digest_bytes(b"abc").to_hex(),
            "a9993e364706816aba3e25717850c26c9cd0d89d"
        );
        assert_eq!(
            DocumentHasher::digest_bytes(b"").to_hex(),
            "da39a3ee5e6b4b0d3255bfef95601890afd80709"
        );
    }

    #[test]
    fn digest_is_40_lowercase_hex_chars() {
        let hex = DocumentHasher::digest_bytes(b"some document").to_hex();
        assert_eq!(hex.len(), DocumentDigest::HEX_LEN);
        assert!(hex.bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b)));
    }

    #[test]
    fn different_content_produces_different_digests() {
        let d1 = DocumentHasher::digest_bytes(b"deed for parcel A");
        let d2 = DocumentHasher::digest_bytes(b"deed for parcel B");
        assert_ne!(d1, d2);
    }

    #[test]
    fn file_digest_equals_byte_digest() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"scanned deed contents").unwrap();
        file.flush().unwrap();

        let from_file = DocumentHasher::digest_file(file.path()).unwrap();
        let from_bytes = DocumentHasher::digest_bytes(b"scanned deed contents");
        assert_eq!(from_file, from_bytes);
    }

    #[test]
    fn missing_file_error_names_the_path() {
        let err = DocumentHasher::digest_file("/nonexistent/deed.pdf").unwrap_err();
        let HasherError::Io { path, source } = err;
        assert_eq!(path, "/nonexistent/deed.pdf");
        assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
    }

    #[test]
    fn verify_correct_data() {
        let digest = DocumentHasher::digest_bytes(b"original");
        assert!(DocumentHasher::verify(b"original", &digest));
    }

    #[test]
    fn verify_incorrect_data() {
        let digest = DocumentHasher::digest_bytes(b"original");
        assert!(!DocumentHasher::verify(b"tampered", &digest));
    }
}
