//! Router configuration.
//!
//! # Route Structure
//!
//! - `POST    /links`  - Link creation through the admission pipeline
//! - `OPTIONS /links`  - CORS preflight for the creation endpoint
//! - `GET     /health` - Liveness probe
//! - `GET     /{key}`  - Short link confirmation page (public)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling
//!
//! Rate limiting is not a router layer here: it is a stage inside the
//! admission pipeline, ordered after the origin check, and the resolve path
//! is deliberately unlimited.

use axum::routing::{get, post};
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

use crate::api::handlers::{
    create_link_handler, health_handler, preflight_handler, redirect_handler,
};
use crate::api::middleware::tracing;
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route(
            "/links",
            post(create_link_handler).options(preflight_handler),
        )
        .route("/health", get(health_handler))
        .route("/{key}", get(redirect_handler))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
