//! Short URL construction from request headers.

use crate::error::AppError;
use axum::http::{HeaderMap, header};
use serde_json::json;

/// Builds the public short URL for a key from the request's `Host` header.
///
/// The host is used verbatim (port included), always with HTTPS, matching
/// how the service is addressed by the caller rather than a configured
/// canonical name.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the `Host` header is missing or not
/// valid UTF-8.
pub fn short_url_from_headers(headers: &HeaderMap, key: &str) -> Result<String, AppError> {
    let host = headers
        .get(header::HOST)
        .ok_or_else(|| AppError::bad_request("invalid_host", "Missing Host header", json!({})))?
        .to_str()
        .map_err(|_| AppError::bad_request("invalid_host", "Invalid Host header", json!({})))?;

    Ok(format!("https://{}/{}", host, key))
}
