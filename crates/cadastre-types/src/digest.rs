use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::TypeError;

/// SHA-1 digest of a title document, attested at record creation time.
///
/// Rendered on the wire as exactly 40 lowercase hexadecimal characters, the
/// format carried by every record already on the ledger. The digest is a
/// point-in-time attestation of the document bytes as read when the record
/// was created; it is never recomputed afterwards.
///
/// SHA-1 is broken for collision resistance. The algorithm is kept to stay
/// wire-compatible with deployed records; see `cadastre-crypto` for the
/// hashing side of this contract.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentDigest([u8; 20]);

impl DocumentDigest {
    /// Length of the hex rendering.
    pub const HEX_LEN: usize = 40;

    /// Create a digest from a pre-computed 20-byte hash.
    pub const fn from_hash(hash: [u8; 20]) -> Self {
        Self(hash)
    }

    /// The raw 20-byte hash.
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Lowercase hex-encoded string representation.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Short hex representation (first 8 characters).
    pub fn short_hex(&self) -> String {
        hex::encode(&self.0[..4])
    }

    /// Parse from a hex string.
    ///
    /// Rejects anything that is not exactly 40 lowercase hex characters;
    /// uppercase input is refused rather than normalized so that stored
    /// bytes and parsed values are always byte-identical.
    pub fn from_hex(s: &str) -> Result<Self, TypeError> {
        if s.len() != Self::HEX_LEN {
            return Err(TypeError::InvalidLength {
                expected: Self::HEX_LEN,
                actual: s.len(),
            });
        }
        if !s.bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b)) {
            return Err(TypeError::InvalidHex(s.to_string()));
        }
        let bytes = hex::decode(s).map_err(|e| TypeError::InvalidHex(e.to_string()))?;
        let mut arr = [0u8; 20];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }
}

impl fmt::Debug for DocumentDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DocumentDigest({})", self.short_hex())
    }
}

impl fmt::Display for DocumentDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Serialize for DocumentDigest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for DocumentDigest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(D::Error::custom)
    }
}
