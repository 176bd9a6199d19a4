//! Error types for Minisign decoding, signing and verification.

use crate::keys::KeyId;

/// Which comment line a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentKind {
    Untrusted,
    Trusted,
}

impl std::fmt::Display for CommentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommentKind::Untrusted => f.write_str("untrusted comment"),
            CommentKind::Trusted => f.write_str("trusted comment"),
        }
    }
}

/// Errors from Minisign decoding, signing and verification.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A base64 body could not be decoded.
    #[error("invalid base64: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    /// A decoded record does not have the fixed size of its type.
    #[error("invalid encoded {record}: expected {expected} bytes, got {actual}")]
    InvalidLength {
        record: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The armored text has fewer lines than the record needs.
    #[error("incomplete encoded {record}")]
    Incomplete { record: &'static str },

    /// The signature or secret key carries an algorithm tag this crate does not know.
    #[error("unsupported signature algorithm {:?}", String::from_utf8_lossy(.0))]
    UnsupportedAlgorithm([u8; 2]),

    /// The public key is not an Ed25519 Minisign key.
    #[error("incompatible signature algorithm {:?}", String::from_utf8_lossy(.0))]
    IncompatibleAlgorithm([u8; 2]),

    /// The signature was made by a different key than the one verifying it.
    #[error("incompatible key identifiers: public key is {expected}, signature is {actual}")]
    KeyMismatch { expected: KeyId, actual: KeyId },

    /// The trusted comment line lacks its `trusted comment: ` prefix.
    #[error("unexpected format for the trusted comment")]
    MalformedComment,

    /// The signature over the message did not verify.
    #[error("invalid signature")]
    InvalidSignature,

    /// The signature over the signature and trusted comment did not verify.
    #[error("invalid global signature")]
    InvalidGlobalSignature,

    /// Signing requires a non-empty untrusted comment.
    #[error("missing untrusted comment")]
    MissingComment,

    /// Comments must fit on a single line.
    #[error("{0} must fit on a single line")]
    MultilineComment(CommentKind),

    /// The secret half of the key material does not match its public half.
    #[error("invalid secret key material")]
    InvalidSecretKey,

    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether this is a malformed-input error (bad base64, wrong length, missing lines).
    pub fn is_format_error(&self) -> bool {
        matches!(self, Error::InvalidBase64(_) | Error::InvalidLength { .. } | Error::Incomplete { .. })
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
