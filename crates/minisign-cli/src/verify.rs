//! `minisign-rs verify` — check a file against its detached signature.

use std::path::Path;

use anyhow::Context;
use minisign_format::PublicKey;
use minisign_format::Signature;

use crate::config;

pub fn run(
    file: &Path,
    pubkey_path: Option<&Path>,
    pubkey_base64: Option<&str>,
    signature_path: Option<&Path>,
    quiet: bool,
) -> anyhow::Result<()> {
    let public_key = match pubkey_base64 {
        Some(body) => PublicKey::from_base64(body.trim()).context("invalid public key")?,
        None => {
            let path = pubkey_path.map(Path::to_path_buf).unwrap_or_else(config::default_public_key_path);
            PublicKey::from_file(&path).with_context(|| format!("failed to load public key {}", path.display()))?
        }
    };

    let sig_path = signature_path.map(Path::to_path_buf).unwrap_or_else(|| config::signature_path_for(file));
    let signature = Signature::from_file(&sig_path)
        .with_context(|| format!("failed to load signature {}", sig_path.display()))?;

    let message = std::fs::read(file).with_context(|| format!("failed to read {}", file.display()))?;
    tracing::info!(file = %file.display(), bytes = message.len(), key_id = %signature.key_id, "verifying");

    public_key.verify(&message, &signature)?;

    if !quiet {
        println!("Signature and comment signature verified");
        if let Some(comment) = signature.trusted_comment_text() {
            println!("Trusted comment: {comment}");
        }
    }
    Ok(())
}
