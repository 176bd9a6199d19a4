//! Field widths, record sizes and armor literals of the Minisign format.

use ed25519_dalek::KEYPAIR_LENGTH;
use ed25519_dalek::PUBLIC_KEY_LENGTH;
use ed25519_dalek::SIGNATURE_LENGTH;

pub const ALGORITHM_LEN: usize = 2;
pub const KEY_ID_LEN: usize = 8;
pub const KDF_ALGORITHM_LEN: usize = 2;
pub const KDF_ROUNDS_LEN: usize = 4;
pub const SALT_LEN: usize = 16;
pub const CHECKSUM_LEN: usize = 8;

/// Ed25519 public key.
pub const PUBLIC_KEY_LEN: usize = PUBLIC_KEY_LENGTH;
/// Ed25519 expanded secret key: 32-byte seed followed by the 32-byte public key.
pub const SECRET_KEY_LEN: usize = KEYPAIR_LENGTH;
pub const SIGNATURE_LEN: usize = SIGNATURE_LENGTH;

/// Decoded body of a public key file.
pub const PUBLIC_KEY_RECORD_LEN: usize = ALGORITHM_LEN + KEY_ID_LEN + PUBLIC_KEY_LEN;
/// Decoded body of a secret key file.
pub const PRIVATE_KEY_RECORD_LEN: usize =
    ALGORITHM_LEN + KDF_ALGORITHM_LEN + KDF_ROUNDS_LEN + SALT_LEN + CHECKSUM_LEN + KEY_ID_LEN + SECRET_KEY_LEN;
/// First base64 segment of a signature file: algorithm, key id, signature.
pub const SIGNATURE_RECORD_LEN: usize = ALGORITHM_LEN + KEY_ID_LEN + SIGNATURE_LEN;
/// Second base64 segment of a signature file.
pub const GLOBAL_SIGNATURE_LEN: usize = SIGNATURE_LEN;

pub const UNTRUSTED_COMMENT_PREFIX: &str = "untrusted comment: ";
/// Used both to recognise the trusted comment line and to strip it before
/// the global signature is checked.
pub const TRUSTED_COMMENT_PREFIX: &str = "trusted comment: ";

/// Conventional suffix of a detached signature, `<file>.minisig`.
pub const SIGNATURE_FILE_EXTENSION: &str = "minisig";
