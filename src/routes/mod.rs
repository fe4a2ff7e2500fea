//! HTTP route handlers.
//!
//! Routes are grouped by cache policy. The greeting is immutable content and
//! gets a public Cache-Control header; the health endpoint stays uncached so
//! orchestrator probes always see a fresh answer.
//!
//! Request tracing is enabled via middleware that generates a unique request
//! ID for each incoming request.

pub mod greeting;
pub mod health;

use axum::{middleware, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::CACHE_CONTROL_GREETING;
use crate::middleware::request_span_layer;

/// Creates the Axum router with all routes and cache headers.
pub fn create_router() -> Router {
    // Greeting - fixed content, cacheable
    let greeting_routes = Router::new()
        .route("/", get(greeting::index))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_GREETING),
        ));

    // Health check - no caching, always fresh for liveness probes
    let health_routes = Router::new().route("/health", get(health::health));

    Router::new()
        .merge(greeting_routes)
        .merge(health_routes)
        // Request span middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_span_layer))
}
