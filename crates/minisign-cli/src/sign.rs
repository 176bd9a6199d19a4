//! `minisign-rs sign` — write a detached signature for a file.

use std::path::Path;

use anyhow::Context;
use minisign_format::PrivateKey;

use crate::config;

pub fn run(
    file: &Path,
    key_path: Option<&Path>,
    untrusted_comment: &str,
    trusted_comment: &str,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let key_path = key_path.map(Path::to_path_buf).unwrap_or_else(config::default_secret_key_path);
    let secret_key = PrivateKey::from_file(&key_path)
        .with_context(|| format!("failed to load secret key {}", key_path.display()))?;

    let message = std::fs::read(file).with_context(|| format!("failed to read {}", file.display()))?;
    tracing::info!(file = %file.display(), bytes = message.len(), key_id = %secret_key.key_id, "signing");

    let armored = secret_key.sign(&message, untrusted_comment, trusted_comment)?;

    let sig_path = output.map(Path::to_path_buf).unwrap_or_else(|| config::signature_path_for(file));
    std::fs::write(&sig_path, armored).with_context(|| format!("failed to write {}", sig_path.display()))?;

    println!("Signature written to {}", sig_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use minisign_format::PublicKey;
    use minisign_format::Signature;

    use super::*;
    use crate::fixtures;

    #[test]
    fn writes_signature_next_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let key_path = fixtures::write_secret_key(dir.path());
        let file = dir.path().join("release.tar");
        std::fs::write(&file, b"release contents").unwrap();

        run(&file, Some(key_path.as_path()), "signature from test key", "file:release.tar", None).unwrap();

        let sig = Signature::from_file(dir.path().join("release.tar.minisig")).unwrap();
        assert_eq!(sig.trusted_comment, "trusted comment: file:release.tar");
        let public = PublicKey::from_base64(fixtures::PUBLIC_KEY).unwrap();
        public.verify_file(&file, &sig).unwrap();
    }

    #[test]
    fn multiline_comment_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let key_path = fixtures::write_secret_key(dir.path());
        let file = dir.path().join("data");
        std::fs::write(&file, b"data").unwrap();
        let out = dir.path().join("data.sig");

        let err = run(&file, Some(key_path.as_path()), "one\ntwo", "", Some(out.as_path())).unwrap_err();
        assert!(err.to_string().contains("single line"), "{err}");
        assert!(!out.exists());
    }

    #[test]
    fn missing_key_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("data");
        std::fs::write(&file, b"data").unwrap();
        let key_path = dir.path().join("absent.key");

        let err = run(&file, Some(key_path.as_path()), "c", "", None).unwrap_err();
        assert!(format!("{err:#}").contains("absent.key"), "{err:#}");
    }
}
