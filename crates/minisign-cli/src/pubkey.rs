//! `minisign-rs pubkey` — derive the public key file from a secret key.

use std::path::Path;

use anyhow::Context;
use minisign_format::PrivateKey;

use crate::config;

pub fn run(key_path: Option<&Path>, output: Option<&Path>) -> anyhow::Result<()> {
    let key_path = key_path.map(Path::to_path_buf).unwrap_or_else(config::default_secret_key_path);
    let secret_key = PrivateKey::from_file(&key_path)
        .with_context(|| format!("failed to load secret key {}", key_path.display()))?;
    let public_key = secret_key.public_key()?;

    let out_path = output.map(Path::to_path_buf).unwrap_or_else(config::default_public_key_path);

    // Don't overwrite existing keys
    if out_path.exists() {
        anyhow::bail!("public key file already exists at {}. Remove it first or use --output.", out_path.display());
    }

    std::fs::write(&out_path, public_key.to_armored())
        .with_context(|| format!("failed to write {}", out_path.display()))?;

    println!("Public key written to {}", out_path.display());
    println!("  Key id: {}", public_key.key_id);
    println!("  Others can verify your signatures with:");
    println!("    minisign-rs verify -P {} <file>", public_key.to_base64());
    Ok(())
}

#[cfg(test)]
mod tests {
    use minisign_format::PublicKey;

    use super::*;
    use crate::fixtures;

    #[test]
    fn writes_matching_public_key() {
        let dir = tempfile::tempdir().unwrap();
        let key_path = fixtures::write_secret_key(dir.path());
        let out = dir.path().join("minisign.pub");

        run(Some(key_path.as_path()), Some(out.as_path())).unwrap();

        let public = PublicKey::from_file(&out).unwrap();
        assert_eq!(public.to_base64(), fixtures::PUBLIC_KEY);
        assert_eq!(public.key_id.to_string(), "0707070707070707");
    }

    #[test]
    fn refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let key_path = fixtures::write_secret_key(dir.path());
        let out = dir.path().join("minisign.pub");
        std::fs::write(&out, "keep me").unwrap();

        assert!(run(Some(key_path.as_path()), Some(out.as_path())).is_err());
        assert_eq!(std::fs::read_to_string(&out).unwrap(), "keep me");
    }
}
