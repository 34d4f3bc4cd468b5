//! Canonical client identification.
//!
//! One policy is used everywhere a request needs a client id (rate limiting
//! and the CAPTCHA relay): the first `X-Forwarded-For` entry when the
//! service is configured as running behind a trusted proxy, otherwise the
//! socket peer address.

use axum::http::HeaderMap;
use std::net::SocketAddr;

/// Resolves the canonical client identifier for a request.
///
/// With `behind_proxy` unset the forwarding header is ignored entirely,
/// since any client can forge it when the service is directly exposed.
pub fn client_ip(headers: &HeaderMap, peer: SocketAddr, behind_proxy: bool) -> String {
    if behind_proxy
        && let Some(forwarded) = headers.get("x-forwarded-for").and_then(|v| v.to_str().ok())
    {
        let first = forwarded.split(',').next().unwrap_or("").trim();
        if !first.is_empty() {
            return first.to_string();
        }
    }

    peer.ip().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn peer() -> SocketAddr {
        "10.0.0.7:40123".parse().unwrap()
    }

    #[test]
    fn test_uses_peer_address_by_default() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", HeaderValue::from_static("1.2.3.4"));

        assert_eq!(client_ip(&headers, peer(), false), "10.0.0.7");
    }

    #[test]
    fn test_uses_forwarded_header_behind_proxy() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", HeaderValue::from_static("1.2.3.4"));

        assert_eq!(client_ip(&headers, peer(), true), "1.2.3.4");
    }

    #[test]
    fn test_takes_first_forwarded_entry() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-forwarded-for",
            HeaderValue::from_static("1.2.3.4, 5.6.7.8, 9.9.9.9"),
        );

        assert_eq!(client_ip(&headers, peer(), true), "1.2.3.4");
    }

    #[test]
    fn test_falls_back_when_header_missing() {
        let headers = HeaderMap::new();
        assert_eq!(client_ip(&headers, peer(), true), "10.0.0.7");
    }

    #[test]
    fn test_falls_back_when_header_empty() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", HeaderValue::from_static("  "));

        assert_eq!(client_ip(&headers, peer(), true), "10.0.0.7");
    }
}
