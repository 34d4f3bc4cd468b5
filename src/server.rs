//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, capability wiring, and the Axum server
//! lifecycle.

use crate::application::services::{AdmissionService, OriginPolicy, RedirectService};
use crate::config::Config;
use crate::domain::repositories::LinkRepository;
use crate::infrastructure::captcha::{CaptchaVerifier, TurnstileVerifier};
use crate::infrastructure::persistence::PgLinkRepository;
use crate::infrastructure::rate_limit::{RateLimiter, SlidingWindowLimiter};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool, applying migrations
/// - the sliding-window rate limiter and the Turnstile verifier
/// - the admission pipeline and redirect resolver
/// - the Axum HTTP server
///
/// # Errors
///
/// Returns an error if the database connection, the bind, or the server
/// runtime fails.
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to migrate")?;

    let links: Arc<dyn LinkRepository> = Arc::new(PgLinkRepository::new(Arc::new(pool)));

    let rate_limiter: Arc<dyn RateLimiter> = Arc::new(SlidingWindowLimiter::new(
        Duration::from_secs(config.rate_limit_window_secs),
        config.rate_limit_max_requests,
    ));

    let captcha: Arc<dyn CaptchaVerifier> = Arc::new(
        TurnstileVerifier::new(
            config.turnstile_secret.clone(),
            Duration::from_secs(config.captcha_timeout_secs),
        )
        .context("Failed to build CAPTCHA client")?,
    );

    let origins = Arc::new(OriginPolicy::new(config.trusted_origins.clone()));

    let admission = Arc::new(AdmissionService::new(
        origins.clone(),
        rate_limiter,
        captcha,
        links.clone(),
        config.api_keys.clone(),
        config.allowed_domains.clone(),
    ));
    let redirects = Arc::new(RedirectService::new(links));

    let state = AppState {
        admission,
        redirects,
        origins,
        behind_proxy: config.behind_proxy,
    };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .await?;

    Ok(())
}
