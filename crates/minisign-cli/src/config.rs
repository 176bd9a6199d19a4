//! Default key and signature locations.

use std::path::Path;
use std::path::PathBuf;

use minisign_format::constants::SIGNATURE_FILE_EXTENSION;

const CONFIG_DIR_ENV: &str = "MINISIGN_CONFIG_DIR";
const SECRET_KEY_FILE: &str = "minisign.key";
const PUBLIC_KEY_FILE: &str = "minisign.pub";

/// Secret key path: `$MINISIGN_CONFIG_DIR/minisign.key`, else `~/.minisign/minisign.key`.
pub fn default_secret_key_path() -> PathBuf {
    secret_key_path_from(std::env::var_os(CONFIG_DIR_ENV), std::env::var_os("HOME"))
}

fn secret_key_path_from(config_dir: Option<std::ffi::OsString>, home: Option<std::ffi::OsString>) -> PathBuf {
    let dir = config_dir
        .map(PathBuf::from)
        .or_else(|| home.map(|h| PathBuf::from(h).join(".minisign")))
        .unwrap_or_else(|| PathBuf::from("."));
    dir.join(SECRET_KEY_FILE)
}

pub fn default_public_key_path() -> PathBuf {
    PathBuf::from(PUBLIC_KEY_FILE)
}

/// `<file>.minisig`, keeping any existing extension.
pub fn signature_path_for(file: &Path) -> PathBuf {
    let mut name = file.as_os_str().to_owned();
    name.push(".");
    name.push(SIGNATURE_FILE_EXTENSION);
    PathBuf::from(name)
}
