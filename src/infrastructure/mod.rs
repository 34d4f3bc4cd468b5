//! Infrastructure layer: persistence and external capabilities.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL repository implementations
//! - [`captcha`] - Outbound human-verification capability
//! - [`rate_limit`] - Per-client request admission capability

pub mod captcha;
pub mod persistence;
pub mod rate_limit;
