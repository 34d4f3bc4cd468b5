//! CAPTCHA verification capability trait.

use async_trait::async_trait;

/// Outcome of a CAPTCHA verification attempt.
#[derive(Debug, Clone, Default)]
pub struct Verification {
    pub success: bool,
    /// Provider error codes, when the provider supplied any.
    pub error_codes: Vec<String>,
}

impl Verification {
    /// A failed verification with no provider error codes, used for
    /// transport-level failures.
    pub fn failure() -> Self {
        Self::default()
    }
}

/// Human-verification capability.
///
/// Callers always receive a definite [`Verification`]; implementations
/// absorb their own transport failures. The call sits on the creation
/// request's critical path and is never retried.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CaptchaVerifier: Send + Sync {
    /// Verifies a client-supplied token, attributing it to `remote_ip`.
    async fn verify(&self, token: &str, remote_ip: &str) -> Verification;
}
