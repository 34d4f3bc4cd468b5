//! CORS preflight handling for the creation endpoint.
//!
//! CORS headers are emitted only for trusted origins. An untrusted preflight
//! gets a bare 403 with no allow-headers at all, so the allowlist is never
//! leaked to callers that are not already on it.

use axum::{
    extract::State,
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::application::services::OriginPolicy;
use crate::state::AppState;

/// `Access-Control-Allow-Origin` value for a request, present only when the
/// origin is trusted. The origin is echoed back, never a wildcard.
pub(crate) fn allow_origin_value(policy: &OriginPolicy, origin: &str) -> Option<HeaderValue> {
    if !policy.is_trusted(origin) {
        return None;
    }
    HeaderValue::from_str(origin).ok()
}

/// Reads the `Origin` header, treating absence as the empty string.
pub(crate) fn request_origin(headers: &HeaderMap) -> String {
    headers
        .get(header::ORIGIN)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

/// Answers a CORS preflight for the creation endpoint.
///
/// # Endpoint
///
/// `OPTIONS /links`
///
/// # Responses
///
/// - **204 No Content** with allow-headers when the origin is trusted
/// - **403 Forbidden** without any CORS headers otherwise
pub async fn preflight_handler(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let origin = request_origin(&headers);

    let Some(allow_origin) = allow_origin_value(&state.origins, &origin) else {
        return StatusCode::FORBIDDEN.into_response();
    };

    let mut cors_headers = HeaderMap::new();
    cors_headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, allow_origin);
    cors_headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("POST, OPTIONS"),
    );
    cors_headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type, Authorization"),
    );

    (StatusCode::NO_CONTENT, cors_headers).into_response()
}
