//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /healthz`     - Liveness probe
//! - `GET  /readyz`      - Readiness probe (pings the store)
//! - `/links*`           - Link management API
//! - `GET  /{code}`      - Short link redirect (catch-all)
//!
//! Static segments take precedence over `/{code}` in the router, so the
//! catch-all never shadows the routes above. Codes equal to a probe path are
//! reserved and cannot be created.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Permissive cross-origin access
//! - **Security headers** - `X-Content-Type-Options`, `X-Frame-Options`, `Referrer-Policy`
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, readiness_handler, redirect_handler};
use crate::api::middleware::{cors, security_headers, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the router with all routes and middleware.
pub fn router(state: AppState) -> Router {
    let router = Router::new()
        .route("/healthz", get(health_handler))
        .route("/readyz", get(readiness_handler))
        .merge(api::routes::link_routes())
        .route("/{code}", get(redirect_handler))
        .with_state(state);

    security_headers::apply(router)
        .layer(cors::layer())
        .layer(tracing::layer())
}

/// Wraps [`router`] so `/links/` and `/links` reach the same handler.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
