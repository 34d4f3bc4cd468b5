#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum::extract::ConnectInfo;
use axum::routing::{get, post};
use chrono::Utc;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tower::Layer;

use linklet::api::handlers::{create_link_handler, preflight_handler, redirect_handler};
use linklet::application::services::{AdmissionService, OriginPolicy, RedirectService};
use linklet::domain::entities::{Link, NewLink};
use linklet::domain::repositories::{InsertOutcome, LinkRepository};
use linklet::error::AppError;
use linklet::infrastructure::captcha::{CaptchaVerifier, Verification};
use linklet::infrastructure::rate_limit::{RateLimiter, SlidingWindowLimiter};
use linklet::state::AppState;

pub const TRUSTED_ORIGIN: &str = "https://app.example.com";
pub const API_KEY: &str = "test-api-key";
pub const ALLOWED_DOMAIN: &str = "example.com";
pub const HOST: &str = "s.example.com";

/// In-memory [`LinkRepository`] with the same conditional-insert semantics
/// as the PostgreSQL implementation: one lock spans the whole
/// check-and-insert, so racing claims for a key resolve to exactly one
/// winner.
pub struct MemoryLinkRepository {
    links: Mutex<HashMap<String, Link>>,
    next_id: AtomicI64,
}

impl MemoryLinkRepository {
    pub fn new() -> Self {
        Self {
            links: Mutex::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Seeds a link directly, bypassing the admission pipeline.
    pub fn seed(&self, key: &str, destination: &str) -> Link {
        let link = Link::new(
            self.next_id.fetch_add(1, Ordering::SeqCst),
            key.to_string(),
            destination.to_string(),
            Utc::now(),
        );
        self.links
            .lock()
            .unwrap()
            .insert(key.to_string(), link.clone());
        link
    }

    pub fn len(&self) -> usize {
        self.links.lock().unwrap().len()
    }
}

#[async_trait]
impl LinkRepository for MemoryLinkRepository {
    async fn create_if_absent(&self, new_link: NewLink) -> Result<InsertOutcome, AppError> {
        let mut links = self.links.lock().unwrap();

        if links.contains_key(&new_link.key) {
            return Ok(InsertOutcome::KeyTaken);
        }

        let link = Link::new(
            self.next_id.fetch_add(1, Ordering::SeqCst),
            new_link.key.clone(),
            new_link.destination,
            Utc::now(),
        );
        links.insert(new_link.key, link.clone());

        Ok(InsertOutcome::Inserted(link))
    }

    async fn find_by_key(&self, key: &str) -> Result<Option<Link>, AppError> {
        Ok(self.links.lock().unwrap().get(key).cloned())
    }

    async fn find_by_destination(&self, destination: &str) -> Result<Option<Link>, AppError> {
        Ok(self
            .links
            .lock()
            .unwrap()
            .values()
            .filter(|link| link.destination == destination)
            .min_by_key(|link| link.id)
            .cloned())
    }
}

/// [`CaptchaVerifier`] with a fixed answer, standing in for the network
/// verifier.
pub struct StaticCaptchaVerifier {
    pub success: bool,
    pub error_codes: Vec<String>,
}

impl StaticCaptchaVerifier {
    pub fn passing() -> Self {
        Self {
            success: true,
            error_codes: Vec::new(),
        }
    }

    pub fn failing(error_codes: Vec<String>) -> Self {
        Self {
            success: false,
            error_codes,
        }
    }
}

#[async_trait]
impl CaptchaVerifier for StaticCaptchaVerifier {
    async fn verify(&self, _token: &str, _remote_ip: &str) -> Verification {
        Verification {
            success: self.success,
            error_codes: self.error_codes.clone(),
        }
    }
}

pub struct TestStateOptions {
    pub captcha: StaticCaptchaVerifier,
    pub max_requests: usize,
}

impl Default for TestStateOptions {
    fn default() -> Self {
        Self {
            captcha: StaticCaptchaVerifier::passing(),
            max_requests: 100,
        }
    }
}

/// Builds an [`AppState`] over the in-memory repository, returning the
/// repository too so tests can seed and inspect it.
pub fn create_test_state(options: TestStateOptions) -> (AppState, Arc<MemoryLinkRepository>) {
    let links = Arc::new(MemoryLinkRepository::new());
    let links_dyn: Arc<dyn LinkRepository> = links.clone();

    let rate_limiter: Arc<dyn RateLimiter> = Arc::new(SlidingWindowLimiter::new(
        Duration::from_secs(60),
        options.max_requests,
    ));
    let captcha: Arc<dyn CaptchaVerifier> = Arc::new(options.captcha);
    let origins = Arc::new(OriginPolicy::new(vec![TRUSTED_ORIGIN.to_string()]));

    let admission = Arc::new(AdmissionService::new(
        origins.clone(),
        rate_limiter,
        captcha,
        links_dyn.clone(),
        vec![API_KEY.to_string()],
        vec![ALLOWED_DOMAIN.to_string()],
    ));
    let redirects = Arc::new(RedirectService::new(links_dyn));

    let state = AppState {
        admission,
        redirects,
        origins,
        behind_proxy: false,
    };

    (state, links)
}

pub fn default_test_state() -> (AppState, Arc<MemoryLinkRepository>) {
    create_test_state(TestStateOptions::default())
}

/// Router covering the routes the handler tests exercise.
pub fn test_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/links",
            post(create_link_handler).options(preflight_handler),
        )
        .route("/{key}", get(redirect_handler))
        .layer(MockConnectInfoLayer)
        .with_state(state)
}

#[derive(Clone)]
pub struct MockConnectInfoLayer;

impl<S> Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = "127.0.0.1:12345".parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}
