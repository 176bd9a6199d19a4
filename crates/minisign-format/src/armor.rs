//! Line framing shared by key and signature files.
//!
//! A Minisign file is a handful of `\n`-separated lines: comment lines kept
//! as text and base64 lines carrying fixed-size binary records.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::CommentKind;
use crate::error::Error;
use crate::error::Result;

/// Split `input` on `\n` into exactly `N` parts. Anything past the
/// `N - 1`th line feed stays in the last part.
pub fn split_lines<'a, const N: usize>(record: &'static str, input: &'a str) -> Result<[&'a str; N]> {
    let parts: Vec<&str> = input.splitn(N, '\n').collect();
    parts.try_into().map_err(|_| Error::Incomplete { record })
}

pub fn trim_carriage_return(line: &str) -> &str {
    line.trim_end_matches('\r')
}

/// Decode a standard base64 body into a record of exactly `N` bytes.
///
/// Line feeds and carriage returns are skipped, so the newline ending a
/// file does not count against the body.
pub fn decode_base64<const N: usize>(record: &'static str, body: &str) -> Result<[u8; N]> {
    let bytes = if body.contains(&['\r', '\n'][..]) {
        let cleaned: String = body.chars().filter(|c| !matches!(c, '\r' | '\n')).collect();
        STANDARD.decode(cleaned)?
    } else {
        STANDARD.decode(body)?
    };
    let actual = bytes.len();
    bytes.try_into().map_err(|_| Error::InvalidLength {
        record,
        expected: N,
        actual,
    })
}

pub fn encode_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Check that a comment fits on one line.
///
/// A single trailing newline is accepted and dropped; a line feed with
/// anything after it is not. An empty untrusted comment is rejected.
pub fn validate_comment(kind: CommentKind, comment: &str) -> Result<&str> {
    if let Some(pos) = comment.find('\n') {
        if pos + 1 < comment.len() {
            return Err(Error::MultilineComment(kind));
        }
    }
    let comment = trim_carriage_return(comment.strip_suffix('\n').unwrap_or(comment));
    if kind == CommentKind::Untrusted && comment.is_empty() {
        return Err(Error::MissingComment);
    }
    Ok(comment)
}
