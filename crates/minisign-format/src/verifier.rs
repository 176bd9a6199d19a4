//! Signature verification.

use std::path::Path;

use ed25519_dalek::Verifier;
use ed25519_dalek::VerifyingKey;

use crate::algorithm::SignatureAlgorithm;
use crate::error::Error;
use crate::error::Result;
use crate::keys::PublicKey;
use crate::signature::Signature;

impl PublicKey {
    /// Verify `message` against a decoded signature.
    ///
    /// Steps:
    /// 1. The public key must be an `Ed` key
    /// 2. The signature algorithm must be `Ed` or `ED`
    /// 3. Key ids must match
    /// 4. The trusted comment line must carry its prefix
    /// 5. Check the signature over the message (or its BLAKE2b-512 digest for `ED`)
    /// 6. Check the global signature over `signature || trusted comment text`
    ///
    /// Each failure is reported as its own error; `Ok(())` means both
    /// signatures verified.
    pub fn verify(&self, message: &[u8], signature: &Signature) -> Result<()> {
        if self.algorithm != SignatureAlgorithm::Standard {
            return Err(Error::IncompatibleAlgorithm(self.algorithm.to_bytes()));
        }
        if !signature.algorithm.is_supported() {
            return Err(Error::UnsupportedAlgorithm(signature.algorithm.to_bytes()));
        }
        if self.key_id != signature.key_id {
            return Err(Error::KeyMismatch {
                expected: self.key_id,
                actual: signature.key_id,
            });
        }
        let trusted_comment = signature.trusted_comment_text().ok_or(Error::MalformedComment)?;

        let verifying_key = VerifyingKey::from_bytes(&self.key).map_err(|_| Error::InvalidSignature)?;

        let payload = signature.algorithm.payload(message)?;
        let inner = ed25519_dalek::Signature::from_bytes(&signature.signature);
        verifying_key.verify(&payload, &inner).map_err(|_| Error::InvalidSignature)?;

        let mut global_payload = Vec::with_capacity(signature.signature.len() + trusted_comment.len());
        global_payload.extend_from_slice(&signature.signature);
        global_payload.extend_from_slice(trusted_comment.as_bytes());
        let global = ed25519_dalek::Signature::from_bytes(&signature.global_signature);
        verifying_key.verify(&global_payload, &global).map_err(|_| Error::InvalidGlobalSignature)?;

        tracing::debug!(
            key_id = %self.key_id,
            algorithm = %signature.algorithm,
            trusted_comment,
            "signature verified"
        );
        Ok(())
    }

    /// Read `path` fully and verify its contents.
    pub fn verify_file(&self, path: impl AsRef<Path>, signature: &Signature) -> Result<()> {
        let message = std::fs::read(path)?;
        self.verify(&message, signature)
    }
}

/// Decode a public key file and a signature file, then verify `message`.
pub fn verify_armored(public_key: &str, message: &[u8], signature: &str) -> Result<Signature> {
    let public_key = PublicKey::decode(public_key)?;
    let signature = Signature::decode(signature)?;
    public_key.verify(message, &signature)?;
    Ok(signature)
}
