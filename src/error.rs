//! Application error type shared across all layers.
//!
//! Every rejection carries a machine-readable reason code alongside the
//! human-readable message, so clients can distinguish e.g. a rate-limit
//! rejection from an authorization failure and back off accordingly.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

/// Application-level error, mapped to an HTTP status and a JSON body
/// `{"error": {"code", "message", "details"}}` by [`IntoResponse`].
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Client input error (400) with a specific reason code.
    #[error("{message}")]
    Validation {
        code: &'static str,
        message: String,
        details: Value,
    },

    /// Authorization failure tied to credentials (401).
    #[error("{message}")]
    Unauthorized {
        code: &'static str,
        message: String,
        details: Value,
    },

    /// Authorization failure tied to the request origin (403).
    #[error("{message}")]
    Forbidden {
        code: &'static str,
        message: String,
        details: Value,
    },

    /// Abuse-control rejection (429), reported distinctly from
    /// authorization errors so clients can back off.
    #[error("{message}")]
    RateLimited { message: String },

    /// Resource absence (404). Deliberately generic; leaks nothing about
    /// whether the resource ever existed.
    #[error("{message}")]
    NotFound { message: String },

    /// Dependency failure (500). Driver details stay in the logs.
    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(code: &'static str, message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            code,
            message: message.into(),
            details,
        }
    }

    pub fn unauthorized(code: &'static str, message: impl Into<String>, details: Value) -> Self {
        Self::Unauthorized {
            code,
            message: message.into(),
            details,
        }
    }

    pub fn forbidden(code: &'static str, message: impl Into<String>, details: Value) -> Self {
        Self::Forbidden {
            code,
            message: message.into(),
            details,
        }
    }

    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self::RateLimited {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Reason code reported in the response body.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation { code, .. }
            | AppError::Unauthorized { code, .. }
            | AppError::Forbidden { code, .. } => code,
            AppError::RateLimited { .. } => "rate_limited",
            AppError::NotFound { .. } => "not_found",
            AppError::Internal { .. } => "internal_error",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code = self.code();
        let (status, message, details) = match self {
            AppError::Validation {
                message, details, ..
            } => (StatusCode::BAD_REQUEST, message, details),
            AppError::Unauthorized {
                message, details, ..
            } => (StatusCode::UNAUTHORIZED, message, details),
            AppError::Forbidden {
                message, details, ..
            } => (StatusCode::FORBIDDEN, message, details),
            AppError::RateLimited { message } => {
                (StatusCode::TOO_MANY_REQUESTS, message, json!({}))
            }
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message, json!({})),
            AppError::Internal { message } => {
                (StatusCode::INTERNAL_SERVER_ERROR, message, json!({}))
            }
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            // The conditional insert absorbs key conflicts before they become
            // driver errors; a violation surfacing anywhere else still means
            // the key is taken.
            return AppError::bad_request("key_already_exists", "Key already exists", json!({}));
        }

        tracing::error!("database error: {e}");
        AppError::internal("Database error")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_codes() {
        let err = AppError::bad_request("invalid_key_format", "Invalid key format", json!({}));
        assert_eq!(err.code(), "invalid_key_format");

        assert_eq!(AppError::rate_limited("slow down").code(), "rate_limited");
        assert_eq!(AppError::not_found("missing").code(), "not_found");
        assert_eq!(AppError::internal("boom").code(), "internal_error");
    }

    #[test]
    fn test_display_uses_message() {
        let err = AppError::forbidden("untrusted_origin", "Untrusted origin", json!({}));
        assert_eq!(err.to_string(), "Untrusted origin");
    }
}
