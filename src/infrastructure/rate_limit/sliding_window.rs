//! In-memory sliding-window rate limiter.

use async_trait::async_trait;
use dashmap::DashMap;
use std::time::Duration;
use tokio::time::Instant;

use super::RateLimiter;

/// Process-local sliding-window limiter keyed by client id.
///
/// Each client's window holds the timestamps of its admitted requests from
/// the trailing window. On every call the window is pruned, then the request
/// is rejected without being recorded if the remaining count has reached the
/// threshold.
///
/// State is not persisted (a restart resets all counters) and not shared
/// across horizontally scaled instances; each instance enforces the limit
/// independently. The per-client map entry guard spans the whole
/// prune-check-append sequence, so concurrent requests from one client never
/// under- or over-count.
pub struct SlidingWindowLimiter {
    window: Duration,
    max_requests: usize,
    windows: DashMap<String, Vec<Instant>>,
}

impl SlidingWindowLimiter {
    /// Creates a limiter admitting `max_requests` per client per `window`.
    pub fn new(window: Duration, max_requests: usize) -> Self {
        Self {
            window,
            max_requests,
            windows: DashMap::new(),
        }
    }
}

#[async_trait]
impl RateLimiter for SlidingWindowLimiter {
    async fn admit(&self, client_id: &str) -> bool {
        let now = Instant::now();

        let mut window = self.windows.entry(client_id.to_string()).or_default();
        window.retain(|seen| now.duration_since(*seen) < self.window);

        if window.len() >= self.max_requests {
            tracing::debug!(client_id, "rate limit exceeded");
            return false;
        }

        window.push(now);
        true
    }
}
