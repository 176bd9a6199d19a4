//! Key material shared by the command tests.

use std::path::Path;
use std::path::PathBuf;

/// Unencrypted secret key: seed of 0x07 bytes, key id `0707070707070707`.
pub const SECRET_KEY: &str = "RWQAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAHBwcHBwcHBwcHBwcHBwcHBwcHBwcHBwcHBwcHBwcHBwcHBwcHBwcH6kpsY+KcUgq+9VB7Ey7F+ZVHdq6+vnuSQh7qaRRG0iw=";

/// Public half of [`SECRET_KEY`].
pub const PUBLIC_KEY: &str = "RWQHBwcHBwcHB+pKbGPinFIKvvVQexMuxfmVR3auvr57kkIe6mkURtIs";

pub fn write_secret_key(dir: &Path) -> PathBuf {
    let path = dir.join("minisign.key");
    std::fs::write(&path, format!("untrusted comment: minisign secret key\n{SECRET_KEY}\n")).unwrap();
    path
}
