//! DTOs for the link creation endpoint.

use serde::{Deserialize, Serialize};

/// Request to create a short link.
///
/// Every field defaults to empty when absent so that missing fields flow
/// through the admission pipeline and are rejected by the stage that owns
/// them (a missing CAPTCHA token fails verification, a missing key fails the
/// format check) instead of short-circuiting at deserialization.
#[derive(Debug, Deserialize)]
pub struct CreateLinkRequest {
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub destination: String,
    #[serde(default)]
    pub captcha_token: String,
}

/// Successful creation response.
///
/// Returned both for a fresh link and for a deduplicated one; in the latter
/// case `short_url` carries the pre-existing key.
#[derive(Debug, Serialize)]
pub struct CreateLinkResponse {
    pub short_url: String,
    pub destination: String,
}
