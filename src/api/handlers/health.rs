//! Handlers for liveness and readiness probes.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{HealthResponse, ReadinessResponse};
use crate::state::AppState;

/// Liveness probe. Touches nothing.
///
/// # Endpoint
///
/// `GET /healthz`
///
/// # Response
///
/// ```json
/// { "ok": true, "version": "0.1.0" }
/// ```
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Readiness probe. Pings the link store.
///
/// # Endpoint
///
/// `GET /readyz`
///
/// # Response Codes
///
/// - **200 OK**: store reachable
/// - **503 Service Unavailable**: store unreachable
pub async fn readiness_handler(
    State(state): State<AppState>,
) -> (StatusCode, Json<ReadinessResponse>) {
    match state.link_service.check_storage().await {
        Ok(()) => (
            StatusCode::OK,
            Json(ReadinessResponse {
                ok: true,
                error: None,
            }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ReadinessResponse {
                    ok: false,
                    error: Some(e.to_string()),
                }),
            )
        }
    }
}
