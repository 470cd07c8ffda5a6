//! Identifier digest used as the remote resource key.

use md5::{Digest, Md5};

/// Returns the lowercase hex MD5 of `identifier` after lowercasing it and
/// trimming surrounding ASCII space and control characters (U+0000..=U+0020).
/// Inner whitespace and non-ASCII whitespace such as NBSP are kept. The
/// empty string is accepted and hashes like any other input.
pub fn digest(identifier: &str) -> String {
    let normalized = identifier.trim_matches(is_trimmed).to_lowercase();
    let mut hasher = Md5::new();
    hasher.update(normalized.as_bytes());
    hex::encode(hasher.finalize())
}

fn is_trimmed(c: char) -> bool {
    c <= ' '
}
