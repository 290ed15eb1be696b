//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its target.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Look up the link; unknown codes get a plain `404 Not found`
/// 2. Atomically increment the click counter
/// 3. Return `302 Found` with `Location: <target>`
///
/// The increment happens before the response is sent. If it fails the error
/// is logged and the redirect still goes out.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let link = match state.link_service.resolve(&code).await {
        Ok(link) => link,
        Err(AppError::NotFound { .. }) => {
            return Ok((StatusCode::NOT_FOUND, "Not found").into_response());
        }
        Err(e) => return Err(e),
    };

    let location = HeaderValue::from_str(&link.target).map_err(|e| {
        tracing::error!(code = %code, error = %e, "Stored target is not a valid header value");
        AppError::storage("Stored target is not redirectable", json!({ "code": code }))
    })?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}
