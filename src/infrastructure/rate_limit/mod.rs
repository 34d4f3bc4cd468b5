//! Per-client request admission.
//!
//! Provides a [`RateLimiter`] trait with a process-local
//! [`SlidingWindowLimiter`] implementation. The trait keeps the limiter
//! injectable so a shared-store-backed implementation can replace the
//! in-memory one without touching the admission pipeline.

mod limiter;
mod sliding_window;

pub use limiter::RateLimiter;
pub use sliding_window::SlidingWindowLimiter;

#[cfg(test)]
pub use limiter::MockRateLimiter;
