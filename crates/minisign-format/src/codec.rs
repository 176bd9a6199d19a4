//! Fixed-layout binary records carried in base64 by Minisign files.
//!
//! Every record is decoded into an array of its exact size first; the
//! fields are then read at fixed offsets from that array, so a short or
//! long body is rejected before any field is touched.

use crate::algorithm::SignatureAlgorithm;
use crate::armor;
use crate::constants::ALGORITHM_LEN;
use crate::constants::GLOBAL_SIGNATURE_LEN;
use crate::constants::PRIVATE_KEY_RECORD_LEN;
use crate::constants::PUBLIC_KEY_RECORD_LEN;
use crate::constants::SIGNATURE_LEN;
use crate::constants::SIGNATURE_RECORD_LEN;
use crate::error::Error;
use crate::error::Result;
use crate::keys::KeyId;
use crate::keys::PrivateKey;
use crate::keys::PublicKey;

/// Sequential reader over a buffer whose length was validated up front.
struct Fields<'a> {
    rest: &'a [u8],
}

impl<'a> Fields<'a> {
    fn new(buf: &'a [u8]) -> Self {
        Self { rest: buf }
    }

    fn take<const N: usize>(&mut self) -> [u8; N] {
        let (head, rest) = self.rest.split_at(N);
        self.rest = rest;
        let mut out = [0u8; N];
        out.copy_from_slice(head);
        out
    }

    fn finish(self) {
        debug_assert!(self.rest.is_empty(), "{} unread bytes", self.rest.len());
    }
}

/// Algorithm, key id and inner signature from the first base64 line of a
/// signature file, plus the global signature from the second.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureRecord {
    pub algorithm: SignatureAlgorithm,
    pub key_id: KeyId,
    pub signature: [u8; SIGNATURE_LEN],
    pub global_signature: [u8; GLOBAL_SIGNATURE_LEN],
}

/// Decode the 42-byte public key record: `alg[2] || key_id[8] || key[32]`.
pub fn decode_public_key(body: &str) -> Result<PublicKey> {
    let bin: [u8; PUBLIC_KEY_RECORD_LEN] = armor::decode_base64("public key", body)?;
    let mut fields = Fields::new(&bin);
    let key = PublicKey {
        algorithm: SignatureAlgorithm::from_bytes(fields.take()),
        key_id: KeyId(fields.take()),
        key: fields.take(),
    };
    fields.finish();
    Ok(key)
}

pub fn encode_public_key(key: &PublicKey) -> String {
    let mut bin = Vec::with_capacity(PUBLIC_KEY_RECORD_LEN);
    bin.extend_from_slice(&key.algorithm.to_bytes());
    bin.extend_from_slice(key.key_id.as_bytes());
    bin.extend_from_slice(&key.key);
    armor::encode_base64(&bin)
}

/// Decode the 104-byte secret key record:
/// `alg[2] || kdf_alg[2] || kdf_rounds[4] || salt[16] || checksum[8] || key_id[8] || key[64]`.
///
/// Only Ed25519 keys are accepted. The KDF fields are carried as-is; the
/// key material is expected to be unencrypted.
pub fn decode_private_key(body: &str) -> Result<PrivateKey> {
    let bin: [u8; PRIVATE_KEY_RECORD_LEN] = armor::decode_base64("secret key", body)?;
    let mut fields = Fields::new(&bin);
    let algorithm = SignatureAlgorithm::from_bytes(fields.take::<ALGORITHM_LEN>());
    if algorithm != SignatureAlgorithm::Standard {
        return Err(Error::UnsupportedAlgorithm(algorithm.to_bytes()));
    }
    let key = PrivateKey {
        algorithm,
        kdf_algorithm: fields.take(),
        kdf_rounds: fields.take(),
        salt: fields.take(),
        checksum: fields.take(),
        key_id: KeyId(fields.take()),
        key: fields.take(),
    };
    fields.finish();
    Ok(key)
}

pub fn encode_private_key(key: &PrivateKey) -> String {
    let mut bin = Vec::with_capacity(PRIVATE_KEY_RECORD_LEN);
    bin.extend_from_slice(&key.algorithm.to_bytes());
    bin.extend_from_slice(&key.kdf_algorithm);
    bin.extend_from_slice(&key.kdf_rounds);
    bin.extend_from_slice(&key.salt);
    bin.extend_from_slice(&key.checksum);
    bin.extend_from_slice(key.key_id.as_bytes());
    bin.extend_from_slice(&key.key);
    armor::encode_base64(&bin)
}

/// Decode both base64 lines of a signature file. The first must hold
/// exactly 74 bytes (`alg[2] || key_id[8] || signature[64]`), the second
/// exactly 64 (the global signature).
pub fn decode_signature(first: &str, second: &str) -> Result<SignatureRecord> {
    let bin: [u8; SIGNATURE_RECORD_LEN] = armor::decode_base64("signature", first)?;
    let global_signature: [u8; GLOBAL_SIGNATURE_LEN] = armor::decode_base64("global signature", second)?;
    let mut fields = Fields::new(&bin);
    let record = SignatureRecord {
        algorithm: SignatureAlgorithm::from_bytes(fields.take()),
        key_id: KeyId(fields.take()),
        signature: fields.take(),
        global_signature,
    };
    fields.finish();
    Ok(record)
}

/// Encode the first base64 line of a signature file.
pub fn encode_signature(algorithm: SignatureAlgorithm, key_id: &KeyId, signature: &[u8; SIGNATURE_LEN]) -> String {
    let mut bin = Vec::with_capacity(SIGNATURE_RECORD_LEN);
    bin.extend_from_slice(&algorithm.to_bytes());
    bin.extend_from_slice(key_id.as_bytes());
    bin.extend_from_slice(signature);
    armor::encode_base64(&bin)
}
