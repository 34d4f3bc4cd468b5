//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating capability and
//! repository traits. Services provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::admission_service::AdmissionService`] - the link-creation
//!   admission pipeline
//! - [`services::redirect_service::RedirectService`] - key resolution for
//!   the redirect path
//! - [`services::origin_policy::OriginPolicy`] - trusted-origin allowlist

pub mod services;
