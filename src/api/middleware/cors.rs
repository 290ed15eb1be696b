//! Cross-origin access for the management API.

use tower_http::cors::{Any, CorsLayer};

/// Permissive CORS: any origin, method and header.
pub fn layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
