//! Signing with a Minisign secret key.

use ed25519_dalek::Signer;

use crate::algorithm::SignatureAlgorithm;
use crate::armor;
use crate::constants::TRUSTED_COMMENT_PREFIX;
use crate::constants::UNTRUSTED_COMMENT_PREFIX;
use crate::error::CommentKind;
use crate::error::Result;
use crate::keys::PrivateKey;
use crate::signature::Signature;

impl PrivateKey {
    /// Sign `message` and return the `.minisig` file contents.
    ///
    /// An empty `trusted_comment` defaults to `timestamp:<unix seconds>`.
    pub fn sign(&self, message: &[u8], untrusted_comment: &str, trusted_comment: &str) -> Result<String> {
        Ok(self.sign_detached(message, untrusted_comment, trusted_comment)?.to_armored())
    }

    /// Sign `message`, returning the decoded form of the signature file.
    ///
    /// Always produces an `Ed` signature over the message itself; prehashed
    /// signatures can be verified but not created.
    pub fn sign_detached(&self, message: &[u8], untrusted_comment: &str, trusted_comment: &str) -> Result<Signature> {
        let signing_key = self.signing_key()?;
        let signature = signing_key.sign(message).to_bytes();

        let untrusted_comment = armor::validate_comment(CommentKind::Untrusted, untrusted_comment)?;

        let default_comment;
        let trusted_comment = if trusted_comment.is_empty() {
            default_comment = default_trusted_comment();
            default_comment.as_str()
        } else {
            trusted_comment
        };
        let trusted_comment = armor::validate_comment(CommentKind::Trusted, trusted_comment)?;

        let mut global_payload = Vec::with_capacity(signature.len() + trusted_comment.len());
        global_payload.extend_from_slice(&signature);
        global_payload.extend_from_slice(trusted_comment.as_bytes());
        let global_signature = signing_key.sign(&global_payload).to_bytes();

        tracing::debug!(key_id = %self.key_id, trusted_comment, "signed message");

        Ok(Signature {
            untrusted_comment: format!("{UNTRUSTED_COMMENT_PREFIX}{untrusted_comment}"),
            algorithm: SignatureAlgorithm::Standard,
            key_id: self.key_id,
            signature,
            trusted_comment: format!("{TRUSTED_COMMENT_PREFIX}{trusted_comment}"),
            global_signature,
        })
    }
}

fn default_trusted_comment() -> String {
    let now_secs = std::time::SystemTime::now().duration_since(std::time::UNIX_EPOCH).unwrap_or_default().as_secs();
    format!("timestamp:{now_secs}")
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::error::Error;
    use crate::keys::tests::test_key;
    use crate::keys::KeyId;

    #[test]
    fn sign_then_verify_roundtrip() {
        let key = test_key(1);
        let armored = key.sign(b"hello world", "c", "tc").unwrap();
        let sig = Signature::decode(&armored).unwrap();
        key.public_key().unwrap().verify(b"hello world", &sig).unwrap();
    }

    #[test]
    fn armored_output_layout() {
        let key = test_key(2);
        let armored = key.sign(b"msg", "signature from test key", "file:msg").unwrap();
        let lines: Vec<&str> = armored.split('\n').collect();

        assert_eq!(lines.len(), 5, "four lines plus the final newline");
        assert_eq!(lines[0], "untrusted comment: signature from test key");
        assert!(lines[1].starts_with("RWQ"), "base64 of \"Ed\" || key id: {}", lines[1]);
        assert_eq!(lines[1].len(), 100);
        assert_eq!(lines[2], "trusted comment: file:msg");
        assert_eq!(lines[3].len(), 88);
        assert_eq!(lines[4], "");
    }

    #[test]
    fn signatures_are_deterministic() {
        let key = test_key(3);
        let a = key.sign(b"same", "c", "tc").unwrap();
        let b = key.sign(b"same", "c", "tc").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn default_trusted_comment_is_a_timestamp() {
        let key = test_key(4);
        let sig = key.sign_detached(b"msg", "c", "").unwrap();

        let text = sig.trusted_comment_text().unwrap();
        let seconds = text.strip_prefix("timestamp:").expect("timestamp prefix");
        assert!(seconds.parse::<u64>().unwrap() > 1_600_000_000);

        key.public_key().unwrap().verify(b"msg", &sig).unwrap();
    }

    #[test]
    fn untrusted_comment_is_required() {
        let err = test_key(5).sign(b"msg", "", "tc").unwrap_err();
        assert!(matches!(err, Error::MissingComment));
    }

    #[test]
    fn multiline_comments_are_rejected() {
        let key = test_key(6);
        let err = key.sign(b"msg", "line one\nline two", "tc").unwrap_err();
        assert!(matches!(err, Error::MultilineComment(CommentKind::Untrusted)));

        let err = key.sign(b"msg", "c", "line one\nline two").unwrap_err();
        assert!(matches!(err, Error::MultilineComment(CommentKind::Trusted)));
    }

    #[test]
    fn trailing_newline_in_comment_is_tolerated() {
        let key = test_key(7);
        let armored = key.sign(b"msg", "c\n", "tc\n").unwrap();
        let sig = Signature::decode(&armored).unwrap();
        assert_eq!(sig.untrusted_comment, "untrusted comment: c");
        assert_eq!(sig.trusted_comment, "trusted comment: tc");
        key.public_key().unwrap().verify(b"msg", &sig).unwrap();
    }

    #[test]
    fn invalid_key_material_signs_nothing() {
        let mut material = *test_key(8).key_bytes();
        material[63] ^= 0x80;
        let key = PrivateKey::from_key_material(KeyId([8; 8]), material);
        assert!(matches!(key.sign(b"msg", "c", "tc"), Err(Error::InvalidSecretKey)));
    }

    #[test]
    fn key_id_mismatch_after_signing() {
        let signer = test_key(9);
        let sig = signer.sign_detached(b"msg", "c", "tc").unwrap();
        let other = test_key(10).public_key().unwrap();
        assert!(matches!(other.verify(b"msg", &sig), Err(Error::KeyMismatch { .. })));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn flipped_message_bit_breaks_inner_signature(
            message in proptest::collection::vec(any::<u8>(), 1..256),
            bit in any::<prop::sample::Index>(),
        ) {
            let key = test_key(12);
            let public = key.public_key().unwrap();
            let sig = key.sign_detached(&message, "c", "tc").unwrap();

            let mut tampered = message.clone();
            let bit = bit.index(tampered.len() * 8);
            tampered[bit / 8] ^= 1 << (bit % 8);
            prop_assert!(matches!(public.verify(&tampered, &sig), Err(Error::InvalidSignature)));
        }

        #[test]
        fn flipped_signature_bit_breaks_inner_signature(bit in 0usize..512) {
            let key = test_key(13);
            let public = key.public_key().unwrap();
            let mut sig = key.sign_detached(b"message", "c", "tc").unwrap();

            sig.signature[bit / 8] ^= 1 << (bit % 8);
            prop_assert!(matches!(public.verify(b"message", &sig), Err(Error::InvalidSignature)));
        }

        #[test]
        fn flipped_trusted_comment_bit_breaks_global_signature(
            comment in "[a-z0-9:]{1,40}",
            bit in any::<prop::sample::Index>(),
        ) {
            let key = test_key(14);
            let public = key.public_key().unwrap();
            let mut sig = key.sign_detached(b"message", "c", &comment).unwrap();

            let mut text = comment.into_bytes();
            let bit = bit.index(text.len() * 7);
            text[bit / 7] ^= 1 << (bit % 7);
            let text = String::from_utf8(text).unwrap();
            sig.trusted_comment = format!("{TRUSTED_COMMENT_PREFIX}{text}");
            prop_assert!(matches!(public.verify(b"message", &sig), Err(Error::InvalidGlobalSignature)));
        }
    }
}
