//! The link-creation admission pipeline.

use std::collections::HashSet;
use std::sync::Arc;

use serde_json::json;

use crate::application::services::OriginPolicy;
use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::{InsertOutcome, LinkRepository};
use crate::error::AppError;
use crate::infrastructure::captcha::CaptchaVerifier;
use crate::infrastructure::rate_limit::RateLimiter;
use crate::utils::destination::{DestinationError, validate_destination};
use crate::utils::key_format::is_valid_key;

/// A creation request after HTTP extraction: body fields plus the request
/// attributes the admission checks need.
#[derive(Debug, Clone)]
pub struct CreateLinkCommand {
    /// Value of the `Origin` header; empty when the header was absent.
    pub origin: String,
    /// Canonical client identifier (see [`crate::utils::client_ip`]).
    pub client_ip: String,
    pub api_key: String,
    pub key: String,
    pub destination: String,
    pub captcha_token: String,
}

/// Successful admission outcome.
///
/// An already-shortened destination is a success that reuses the existing
/// key, not an error.
#[derive(Debug, Clone)]
pub enum Admission {
    /// A new link was durably created.
    Created(Link),
    /// The destination was already mapped; no write occurred.
    Existing(Link),
}

impl Admission {
    /// The link to answer with, whichever way admission concluded.
    pub fn link(&self) -> &Link {
        match self {
            Admission::Created(link) | Admission::Existing(link) => link,
        }
    }
}

/// Orchestrates the admission checks for link creation in a fixed order.
///
/// Each check short-circuits: a failure stops the pipeline immediately and
/// nothing after it runs. Only the final step writes. Rejections are
/// [`AppError`] values carrying the reason codes listed on [`Self::admit`].
pub struct AdmissionService {
    origins: Arc<OriginPolicy>,
    rate_limiter: Arc<dyn RateLimiter>,
    captcha: Arc<dyn CaptchaVerifier>,
    links: Arc<dyn LinkRepository>,
    api_keys: HashSet<String>,
    allowed_domains: HashSet<String>,
}

impl AdmissionService {
    /// Creates the pipeline over its collaborators and allowlists.
    pub fn new(
        origins: Arc<OriginPolicy>,
        rate_limiter: Arc<dyn RateLimiter>,
        captcha: Arc<dyn CaptchaVerifier>,
        links: Arc<dyn LinkRepository>,
        api_keys: impl IntoIterator<Item = String>,
        allowed_domains: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            origins,
            rate_limiter,
            captcha,
            links,
            api_keys: api_keys.into_iter().collect(),
            allowed_domains: allowed_domains.into_iter().collect(),
        }
    }

    /// Runs the admission pipeline for one creation request.
    ///
    /// Check order, with the reason code each failure reports:
    ///
    /// 1. request origin - `untrusted_origin`
    /// 2. per-client rate limit - `rate_limited`
    /// 3. CAPTCHA verification - `invalid_captcha` (with provider codes)
    /// 4. API key membership - `invalid_api_key`
    /// 5. destination URL - `malformed_url` / `domain_not_allowed`
    /// 6. key syntax - `invalid_key_format`
    /// 7. dedup lookup by destination - short-circuits to
    ///    [`Admission::Existing`]
    /// 8. atomic conditional insert - `key_already_exists` on conflict,
    ///    [`Admission::Created`] otherwise
    ///
    /// The dedup read and the insert are deliberately not atomic with each
    /// other: two racing requests mapping one new destination under two new
    /// keys may both succeed. Key uniqueness itself is never at risk; the
    /// store decides conflicts in step 8.
    pub async fn admit(&self, cmd: CreateLinkCommand) -> Result<Admission, AppError> {
        if !self.origins.is_trusted(&cmd.origin) {
            return Err(AppError::forbidden(
                "untrusted_origin",
                "Untrusted origin",
                json!({}),
            ));
        }

        if !self.rate_limiter.admit(&cmd.client_ip).await {
            return Err(AppError::rate_limited("Too many requests"));
        }

        let verification = self.captcha.verify(&cmd.captcha_token, &cmd.client_ip).await;
        if !verification.success {
            return Err(AppError::bad_request(
                "invalid_captcha",
                "Invalid CAPTCHA",
                json!({ "error_codes": verification.error_codes }),
            ));
        }

        if !self.api_keys.contains(&cmd.api_key) {
            return Err(AppError::unauthorized(
                "invalid_api_key",
                "Invalid API key",
                json!({}),
            ));
        }

        validate_destination(&cmd.destination, &self.allowed_domains).map_err(|e| match e {
            DestinationError::Malformed(reason) => AppError::bad_request(
                "malformed_url",
                "Malformed destination URL",
                json!({ "reason": reason }),
            ),
            DestinationError::HostNotAllowed { hostname } => AppError::bad_request(
                "domain_not_allowed",
                "Destination domain is not allowed",
                json!({ "hostname": hostname }),
            ),
        })?;

        if !is_valid_key(&cmd.key) {
            return Err(AppError::bad_request(
                "invalid_key_format",
                "Invalid key format",
                json!({}),
            ));
        }

        // Best-effort dedup: an existing mapping wins over minting a new key.
        if let Some(existing) = self.links.find_by_destination(&cmd.destination).await? {
            tracing::debug!(key = %existing.key, "destination already mapped");
            return Ok(Admission::Existing(existing));
        }

        match self
            .links
            .create_if_absent(NewLink {
                key: cmd.key,
                destination: cmd.destination,
            })
            .await?
        {
            InsertOutcome::Inserted(link) => {
                tracing::info!(key = %link.key, "short link created");
                Ok(Admission::Created(link))
            }
            InsertOutcome::KeyTaken => Err(AppError::bad_request(
                "key_already_exists",
                "Key already exists",
                json!({}),
            )),
        }
    }
}
