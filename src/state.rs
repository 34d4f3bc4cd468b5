//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{AdmissionService, OriginPolicy, RedirectService};

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    pub admission: Arc<AdmissionService>,
    pub redirects: Arc<RedirectService>,
    pub origins: Arc<OriginPolicy>,
    /// When true, client identification trusts `X-Forwarded-For`.
    pub behind_proxy: bool,
}
