//! Minisign key and signature files, and Ed25519 signing and verification
//! over them.
//!
//! A signature file carries two Ed25519 signatures: one over the message
//! (or over its BLAKE2b-512 digest for prehashed `ED` signatures) and a
//! global one over that signature followed by the trusted comment, so the
//! comment cannot be altered without detection.
//!
//! # Verifying
//!
//! ```
//! use minisign_format::{PublicKey, Signature};
//!
//! let public_key = PublicKey::from_base64("RWQf6LRCGA9i53mlYecO4IzT51TGPpvWucNSCh1CBM0QTaLn73Y7GFO3")?;
//! let signature = Signature::decode(
//!     "untrusted comment: signature from minisign secret key\n\
//!      RWQf6LRCGA9i59SLOFxz6NxvASXDJeRtuZykwQepbDEGt87ig1BNpWaVWuNrm73YiIiJbq71Wi+dP9eKL8OC351vwIasSSbXxwA=\n\
//!      trusted comment: timestamp:1635442742\tfile:test\n\
//!      0YteLgV960ia80vnA/fHbvkyjl/IoP/HNOCaZfrF0CdhAlp7ok+Tpkya+VpWPX5C/Is3q8a/kEDSY7fBmmgJCg==\n",
//! )?;
//! public_key.verify(b"test", &signature)?;
//! # Ok::<(), minisign_format::Error>(())
//! ```
//!
//! # Signing
//!
//! Secret keys are consumed unencrypted; KDF parameters in the key file are
//! preserved but not applied.
//!
//! ```no_run
//! use minisign_format::PrivateKey;
//!
//! let secret_key = PrivateKey::from_file("minisign.key")?;
//! let armored = secret_key.sign(b"hello", "signature from minisign secret key", "")?;
//! std::fs::write("hello.minisig", armored)?;
//! # Ok::<(), minisign_format::Error>(())
//! ```

pub mod algorithm;
pub mod armor;
pub mod codec;
pub mod constants;
pub mod error;
pub mod keys;
pub mod signature;
pub mod signer;
pub mod verifier;

pub use algorithm::SignatureAlgorithm;
pub use error::CommentKind;
pub use error::Error;
pub use error::Result;
pub use keys::KeyId;
pub use keys::PrivateKey;
pub use keys::PublicKey;
pub use signature::Signature;
pub use verifier::verify_armored;
