//! HTTP middleware.
//!
//! - [`tracing`] - Structured request/response logging
//! - [`cors`] - Cross-origin resource sharing
//! - [`security_headers`] - `nosniff`, frame and referrer policies

pub mod cors;
pub mod security_headers;
pub mod tracing;
