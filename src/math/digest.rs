//! Hex digests used in object codes and census records

use md5::{Digest, Md5};

/// Lowercase hexadecimal MD5 of `text`
pub fn md5_hex(text: &str) -> String {
    Md5::digest(text.as_bytes())
        .iter()
        .map(|byte| format!("{byte:02x}"))
        .collect()
}
