//! Outbound human-verification capability.
//!
//! Provides a [`CaptchaVerifier`] trait with a production
//! [`TurnstileVerifier`] implementation that calls the Cloudflare Turnstile
//! `siteverify` endpoint. The boundary contract is deliberately infallible:
//! any transport or decode failure is reported as an unsuccessful
//! verification, never as an error type.

mod turnstile;
mod verifier;

pub use turnstile::TurnstileVerifier;
pub use verifier::{CaptchaVerifier, Verification};

#[cfg(test)]
pub use verifier::MockCaptchaVerifier;
