//! Detached Minisign signatures.

use std::path::Path;

use crate::algorithm::SignatureAlgorithm;
use crate::armor;
use crate::codec;
use crate::constants::GLOBAL_SIGNATURE_LEN;
use crate::constants::SIGNATURE_LEN;
use crate::constants::TRUSTED_COMMENT_PREFIX;
use crate::error::Result;
use crate::keys::KeyId;

/// A decoded `.minisig` file.
///
/// The file has four lines:
/// 1. the untrusted comment, which nothing signs
/// 2. base64 of `algorithm || key_id || signature`
/// 3. the trusted comment, covered by the global signature
/// 4. base64 of the global signature over `signature || trusted comment text`
///
/// Both comments are stored as the full line, prefix included, with any
/// trailing carriage return removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub untrusted_comment: String,
    pub algorithm: SignatureAlgorithm,
    pub key_id: KeyId,
    pub signature: [u8; SIGNATURE_LEN],
    pub trusted_comment: String,
    pub global_signature: [u8; GLOBAL_SIGNATURE_LEN],
}

impl Signature {
    pub fn decode(armored: &str) -> Result<Self> {
        let [untrusted, first, trusted, second] = armor::split_lines::<4>("signature", armored)?;
        let record = codec::decode_signature(first, second)?;
        let signature = Signature {
            untrusted_comment: armor::trim_carriage_return(untrusted).to_string(),
            algorithm: record.algorithm,
            key_id: record.key_id,
            signature: record.signature,
            trusted_comment: armor::trim_carriage_return(trusted).to_string(),
            global_signature: record.global_signature,
        };
        tracing::debug!(key_id = %signature.key_id, algorithm = %signature.algorithm, "decoded signature");
        Ok(signature)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::decode(&std::fs::read_to_string(path)?)
    }

    pub fn to_armored(&self) -> String {
        format!(
            "{}\n{}\n{}\n{}\n",
            self.untrusted_comment,
            codec::encode_signature(self.algorithm, &self.key_id, &self.signature),
            self.trusted_comment,
            armor::encode_base64(&self.global_signature),
        )
    }

    /// The trusted comment without its `trusted comment: ` prefix, if it has one.
    pub fn trusted_comment_text(&self) -> Option<&str> {
        self.trusted_comment.strip_prefix(TRUSTED_COMMENT_PREFIX)
    }
}
