//! Destination URL parsing and hostname allowlisting.

use std::collections::HashSet;
use url::Url;

/// Rejection reasons for a proposed destination.
///
/// A parse failure is reported distinctly from a well-formed URL whose host
/// is not allowlisted, so the pipeline can surface different reason codes.
#[derive(Debug, thiserror::Error)]
pub enum DestinationError {
    #[error("Malformed destination URL: {0}")]
    Malformed(String),

    #[error("Destination host '{hostname}' is not allowed")]
    HostNotAllowed { hostname: String },
}

/// Parses `raw` as an absolute URL and checks its hostname against the
/// allowlist (exact string match, no subdomain wildcarding).
///
/// A URL that parses but carries no hostname (e.g. `mailto:`) fails the
/// allowlist check with an empty hostname rather than a parse error.
///
/// Returns the matched hostname on success.
pub fn validate_destination(
    raw: &str,
    allowed: &HashSet<String>,
) -> Result<String, DestinationError> {
    let url = Url::parse(raw).map_err(|e| DestinationError::Malformed(e.to_string()))?;

    let hostname = url.host_str().unwrap_or("").to_string();
    if !allowed.contains(&hostname) {
        return Err(DestinationError::HostNotAllowed { hostname });
    }

    Ok(hostname)
}
