//! Syntactic validation of proposed short keys.

use regex::Regex;
use std::sync::LazyLock;

/// Compiled regex for key validation: 3-32 characters drawn from letters,
/// digits, underscore, hyphen.
static KEY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_-]{3,32}$").unwrap());

/// Returns true when `key` is an acceptable short key.
///
/// Purely syntactic; says nothing about whether the key is claimed.
pub fn is_valid_key(key: &str) -> bool {
    KEY_REGEX.is_match(key)
}
