//! Rate limiter capability trait.

use async_trait::async_trait;

/// Per-client request admission.
///
/// # Implementations
///
/// - [`crate::infrastructure::rate_limit::SlidingWindowLimiter`] -
///   process-local in-memory implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RateLimiter: Send + Sync {
    /// Decides whether a request from `client_id` is admitted right now.
    ///
    /// Admission records the request against the client's window; a
    /// rejection records nothing.
    async fn admit(&self, client_id: &str) -> bool;
}
