//! Cloudflare Turnstile verification client.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

use super::{CaptchaVerifier, Verification};

/// Production `siteverify` endpoint.
const SITEVERIFY_ENDPOINT: &str = "https://challenges.cloudflare.com/turnstile/v0/siteverify";

/// Wire format of the `siteverify` response.
///
/// Fields the service does not consume (hostname, challenge timestamp) are
/// ignored on deserialization.
#[derive(Debug, Deserialize)]
struct SiteverifyResponse {
    success: bool,
    #[serde(default, rename = "error-codes")]
    error_codes: Vec<String>,
}

/// [`CaptchaVerifier`] backed by Cloudflare Turnstile.
///
/// The whole round trip is bounded by the client timeout; a timeout, a
/// connection error, or a malformed response all yield
/// [`Verification::failure`]. No retry.
pub struct TurnstileVerifier {
    http: reqwest::Client,
    secret: String,
    endpoint: String,
}

impl TurnstileVerifier {
    /// Creates a verifier against the production endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(secret: String, timeout: Duration) -> Result<Self, reqwest::Error> {
        Self::with_endpoint(secret, timeout, SITEVERIFY_ENDPOINT.to_string())
    }

    /// Creates a verifier against a custom endpoint. Used by tests.
    pub fn with_endpoint(
        secret: String,
        timeout: Duration,
        endpoint: String,
    ) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            secret,
            endpoint,
        })
    }
}

#[async_trait]
impl CaptchaVerifier for TurnstileVerifier {
    async fn verify(&self, token: &str, remote_ip: &str) -> Verification {
        let params = [
            ("secret", self.secret.as_str()),
            ("response", token),
            ("remoteip", remote_ip),
        ];

        let response = match self.http.post(&self.endpoint).form(&params).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("CAPTCHA verification request failed: {e}");
                return Verification::failure();
            }
        };

        match response.json::<SiteverifyResponse>().await {
            Ok(body) => Verification {
                success: body.success,
                error_codes: body.error_codes,
            },
            Err(e) => {
                tracing::warn!("CAPTCHA verification response malformed: {e}");
                Verification::failure()
            }
        }
    }
}
