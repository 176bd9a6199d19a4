//! Signature algorithm tags and the signed payload they select.

use std::borrow::Cow;

use blake2::Blake2b512;
use blake2::Digest;

use crate::error::Error;
use crate::error::Result;

const STANDARD_TAG: [u8; 2] = *b"Ed";
const PREHASHED_TAG: [u8; 2] = *b"ED";

/// The 2-byte algorithm tag at the start of every key and signature record.
///
/// Resolved once when a record is decoded. Unknown tags are kept so the
/// record can still be re-encoded and reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignatureAlgorithm {
    /// `Ed`: Ed25519 over the message itself.
    Standard,
    /// `ED`: Ed25519 over the BLAKE2b-512 digest of the message.
    Prehashed,
    Unsupported([u8; 2]),
}

impl SignatureAlgorithm {
    pub fn from_bytes(tag: [u8; 2]) -> Self {
        match tag {
            STANDARD_TAG => SignatureAlgorithm::Standard,
            PREHASHED_TAG => SignatureAlgorithm::Prehashed,
            other => SignatureAlgorithm::Unsupported(other),
        }
    }

    pub fn to_bytes(self) -> [u8; 2] {
        match self {
            SignatureAlgorithm::Standard => STANDARD_TAG,
            SignatureAlgorithm::Prehashed => PREHASHED_TAG,
            SignatureAlgorithm::Unsupported(tag) => tag,
        }
    }

    pub fn is_supported(self) -> bool {
        !matches!(self, SignatureAlgorithm::Unsupported(_))
    }

    /// The bytes the inner Ed25519 signature is computed over.
    pub fn payload(self, message: &[u8]) -> Result<Cow<'_, [u8]>> {
        match self {
            SignatureAlgorithm::Standard => Ok(Cow::Borrowed(message)),
            SignatureAlgorithm::Prehashed => Ok(Cow::Owned(prehash(message).to_vec())),
            SignatureAlgorithm::Unsupported(tag) => Err(Error::UnsupportedAlgorithm(tag)),
        }
    }
}

impl std::fmt::Display for SignatureAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = self.to_bytes();
        write!(f, "{}", String::from_utf8_lossy(&tag))
    }
}

/// Unkeyed BLAKE2b-512 digest used by prehashed signatures.
pub fn prehash(message: &[u8]) -> [u8; 64] {
    let mut hasher = Blake2b512::new();
    hasher.update(message);
    let mut digest = [0u8; 64];
    digest.copy_from_slice(&hasher.finalize());
    digest
}
