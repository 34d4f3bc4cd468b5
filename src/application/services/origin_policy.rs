//! Trusted-origin allowlist.

use std::collections::HashSet;

/// Request-origin allowlist with exact string matching.
///
/// No wildcard or suffix matching: an origin is trusted only when it appears
/// verbatim in the configured list. An empty list trusts nothing.
pub struct OriginPolicy {
    trusted: HashSet<String>,
}

impl OriginPolicy {
    /// Creates a policy from the configured origin list.
    pub fn new(trusted: impl IntoIterator<Item = String>) -> Self {
        Self {
            trusted: trusted.into_iter().collect(),
        }
    }

    /// Whether `origin` is on the allowlist.
    ///
    /// A request without an `Origin` header is checked as the empty string,
    /// which can never match a configured entry.
    pub fn is_trusted(&self, origin: &str) -> bool {
        self.trusted.contains(origin)
    }
}
