//! Minisign public and secret keys.

use std::path::Path;

use ed25519_dalek::SigningKey;

use crate::algorithm::SignatureAlgorithm;
use crate::armor;
use crate::codec;
use crate::constants::CHECKSUM_LEN;
use crate::constants::KDF_ALGORITHM_LEN;
use crate::constants::KDF_ROUNDS_LEN;
use crate::constants::KEY_ID_LEN;
use crate::constants::PUBLIC_KEY_LEN;
use crate::constants::SALT_LEN;
use crate::constants::SECRET_KEY_LEN;
use crate::constants::UNTRUSTED_COMMENT_PREFIX;
use crate::error::Error;
use crate::error::Result;

/// 8-byte identifier tying signatures to the key that made them.
///
/// Displayed the way Minisign prints it: the little-endian integer as 16
/// upper-case hex digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyId(pub [u8; KEY_ID_LEN]);

impl KeyId {
    pub fn as_bytes(&self) -> &[u8; KEY_ID_LEN] {
        &self.0
    }
}

impl std::fmt::Display for KeyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut be = self.0;
        be.reverse();
        f.write_str(&hex::encode_upper(be))
    }
}

/// A Minisign public key: `Ed` tag, key id and Ed25519 public key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    pub algorithm: SignatureAlgorithm,
    pub key_id: KeyId,
    pub key: [u8; PUBLIC_KEY_LEN],
}

impl PublicKey {
    /// Decode the base64 body of a public key (the second line of a `.pub` file).
    pub fn from_base64(body: &str) -> Result<Self> {
        let key = codec::decode_public_key(body)?;
        tracing::debug!(key_id = %key.key_id, algorithm = %key.algorithm, "decoded public key");
        Ok(key)
    }

    /// Decode a public key file: a comment line followed by the base64 body.
    pub fn decode(armored: &str) -> Result<Self> {
        let [_comment, body] = armor::split_lines::<2>("public key", armored)?;
        Self::from_base64(body)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::decode(&std::fs::read_to_string(path)?)
    }

    pub fn to_base64(&self) -> String {
        codec::encode_public_key(self)
    }

    /// The public key file contents, as written by `minisign -G`.
    pub fn to_armored(&self) -> String {
        format!("{UNTRUSTED_COMMENT_PREFIX}minisign public key {}\n{}\n", self.key_id, self.to_base64())
    }
}

/// A Minisign secret key with already-decrypted key material.
///
/// The KDF fields are kept verbatim so the record re-encodes byte for byte,
/// but they are never used to decrypt anything.
#[derive(Clone, PartialEq, Eq)]
pub struct PrivateKey {
    pub algorithm: SignatureAlgorithm,
    pub kdf_algorithm: [u8; KDF_ALGORITHM_LEN],
    pub kdf_rounds: [u8; KDF_ROUNDS_LEN],
    pub salt: [u8; SALT_LEN],
    pub checksum: [u8; CHECKSUM_LEN],
    pub key_id: KeyId,
    pub(crate) key: [u8; SECRET_KEY_LEN],
}

impl PrivateKey {
    /// Wrap unencrypted Ed25519 key material (seed followed by public key).
    pub fn from_key_material(key_id: KeyId, key: [u8; SECRET_KEY_LEN]) -> Self {
        Self {
            algorithm: SignatureAlgorithm::Standard,
            kdf_algorithm: [0; KDF_ALGORITHM_LEN],
            kdf_rounds: [0; KDF_ROUNDS_LEN],
            salt: [0; SALT_LEN],
            checksum: [0; CHECKSUM_LEN],
            key_id,
            key,
        }
    }

    /// Decode the base64 body of a secret key (the second line of a `.key` file).
    pub fn from_base64(body: &str) -> Result<Self> {
        let key = codec::decode_private_key(body)?;
        tracing::debug!(key_id = %key.key_id, "decoded secret key");
        Ok(key)
    }

    /// Decode a secret key file: a comment line followed by the base64 body.
    pub fn decode(armored: &str) -> Result<Self> {
        let [_comment, body] = armor::split_lines::<2>("secret key", armored)?;
        Self::from_base64(body)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::decode(&std::fs::read_to_string(path)?)
    }

    pub fn to_base64(&self) -> String {
        codec::encode_private_key(self)
    }

    pub fn to_armored(&self) -> String {
        format!("{UNTRUSTED_COMMENT_PREFIX}minisign secret key\n{}\n", self.to_base64())
    }

    pub fn key_bytes(&self) -> &[u8; SECRET_KEY_LEN] {
        &self.key
    }

    /// The public key matching this secret key, with the same key id.
    pub fn public_key(&self) -> Result<PublicKey> {
        let signing_key = self.signing_key()?;
        Ok(PublicKey {
            algorithm: SignatureAlgorithm::Standard,
            key_id: self.key_id,
            key: signing_key.verifying_key().to_bytes(),
        })
    }

    pub(crate) fn signing_key(&self) -> Result<SigningKey> {
        SigningKey::from_keypair_bytes(&self.key).map_err(|_| Error::InvalidSecretKey)
    }
}

impl std::fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrivateKey")
            .field("algorithm", &self.algorithm)
            .field("key_id", &self.key_id)
            .finish_non_exhaustive()
    }
}
