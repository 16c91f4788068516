//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                  - Home page
//! GET  /health            - Liveness check
//! GET  /health/ready      - Readiness check (database)
//!
//! # Tools
//! GET  /ideas             - Idea generator form
//! POST /ideas             - Generate suggestions
//! GET  /pricing           - Pricing calculator form
//! POST /pricing           - Calculate price tiers
//!
//! # Landing pages
//! GET  /pages             - All pages with signup counts
//! GET  /pages/new         - Creation form
//! POST /pages/new         - Create page, redirect to it
//! GET  /p/{slug}          - Public landing page
//! POST /p/{slug}/signup   - Email signup, redirect back
//!
//! GET  /static/*          - Stylesheet
//! ```

pub mod health;
pub mod home;
pub mod ideas;
pub mod pages;
pub mod pricing;

use axum::{Router, middleware, routing::get, routing::post};
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultOnResponse, OnResponse, TraceLayer};
use tracing::Span;

use crate::middleware::{REQUEST_ID_HEADER, request_id_middleware, security_headers_middleware};
use crate::state::AppState;

/// Directory holding the stylesheet, resolved at compile time so the server
/// does not depend on its working directory.
const STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

/// Create the application routes (no middleware, no state).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/ideas", get(ideas::show).post(ideas::generate))
        .route("/pricing", get(pricing::show).post(pricing::calculate))
        .route("/pages", get(pages::index))
        .route("/pages/new", get(pages::new_form).post(pages::create))
        .route("/p/{slug}", get(pages::show))
        .route("/p/{slug}/signup", post(pages::signup))
}

/// Build the complete application: routes, health checks, static files,
/// request IDs, security headers, and request tracing.
///
/// Sentry layers are added by the binary, outside this router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::readiness))
        .merge(routes())
        .nest_service("/static", ServeDir::new(STATIC_DIR))
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = tracing::field::Empty,
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     span: &Span| {
                        span.record("status", response.status().as_u16());
                        if let Some(id) = response
                            .headers()
                            .get(REQUEST_ID_HEADER)
                            .and_then(|v| v.to_str().ok())
                        {
                            span.record("request_id", id);
                        }
                        span.record(
                            "latency_ms",
                            u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
                        );
                        DefaultOnResponse::default().on_response(response, latency, span);
                    },
                ),
        )
        .with_state(state)
}
