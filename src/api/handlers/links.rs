//! Handler for the link creation endpoint.

use axum::{
    Json,
    extract::{ConnectInfo, State},
    http::{HeaderMap, header},
    response::{IntoResponse, Response},
};
use std::net::SocketAddr;

use crate::api::dto::links::{CreateLinkRequest, CreateLinkResponse};
use crate::api::handlers::cors::{allow_origin_value, request_origin};
use crate::application::services::CreateLinkCommand;
use crate::state::AppState;
use crate::utils::client_ip::client_ip;
use crate::utils::short_url::short_url_from_headers;

/// Creates a short link through the admission pipeline.
///
/// # Endpoint
///
/// `POST /links`
///
/// # Request Body
///
/// ```json
/// {
///   "api_key": "...",
///   "key": "my-key",
///   "destination": "https://example.com/page",
///   "captcha_token": "..."
/// }
/// ```
///
/// # Response
///
/// `200 OK` with `{"short_url", "destination"}` for both a freshly created
/// link and a deduplicated one (the existing key is returned in the latter
/// case). Rejections map to:
///
/// - `403` untrusted origin
/// - `429` rate limited
/// - `400` invalid CAPTCHA / malformed URL / domain not allowed /
///   invalid key format / key already exists
/// - `401` invalid API key
/// - `500` store failure
///
/// # CORS
///
/// Trusted origins get `Access-Control-Allow-Origin` echoed on every
/// response, success or rejection; untrusted origins never do.
pub async fn create_link_handler(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    Json(payload): Json<CreateLinkRequest>,
) -> Response {
    let origin = request_origin(&headers);

    let command = CreateLinkCommand {
        origin: origin.clone(),
        client_ip: client_ip(&headers, addr, state.behind_proxy),
        api_key: payload.api_key,
        key: payload.key,
        destination: payload.destination,
        captcha_token: payload.captcha_token,
    };

    let mut response = match state.admission.admit(command).await {
        Ok(admission) => {
            let link = admission.link();
            match short_url_from_headers(&headers, &link.key) {
                Ok(short_url) => Json(CreateLinkResponse {
                    short_url,
                    destination: link.destination.clone(),
                })
                .into_response(),
                Err(e) => e.into_response(),
            }
        }
        Err(e) => e.into_response(),
    };

    if let Some(allow_origin) = allow_origin_value(&state.origins, &origin) {
        response
            .headers_mut()
            .insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, allow_origin);
    }

    response
}
