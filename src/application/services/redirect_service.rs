//! Key resolution for the public redirect path.

use std::sync::Arc;

use crate::domain::entities::Link;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Resolves short keys to their stored links.
///
/// A pure read over the store: no rate limiting, no side effects.
pub struct RedirectService {
    links: Arc<dyn LinkRepository>,
}

impl RedirectService {
    /// Creates a new redirect service.
    pub fn new(links: Arc<dyn LinkRepository>) -> Self {
        Self { links }
    }

    /// Looks up a key.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an empty or unknown key. The
    /// outcome is identical in both cases, so the response reveals nothing
    /// about whether the key was ever valid.
    pub async fn resolve(&self, key: &str) -> Result<Link, AppError> {
        if key.is_empty() {
            return Err(AppError::not_found("Short link not found"));
        }

        self.links
            .find_by_key(key)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found"))
    }
}
