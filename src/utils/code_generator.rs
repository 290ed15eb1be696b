//! Short code generation and validation utilities.
//!
//! Generated codes are drawn uniformly from the 62-character alphanumeric
//! alphabet. Custom codes supplied by callers must match [`CODE_PATTERN`].

use crate::error::AppError;
use rand::Rng;
use rand::distr::Alphanumeric;
use regex::Regex;
use serde_json::json;
use std::sync::LazyLock;

/// Length of generated codes.
pub const GENERATED_CODE_LENGTH: usize = 6;

/// Format every short code must satisfy.
pub const CODE_PATTERN: &str = r"^[A-Za-z0-9]{6,8}$";

static CODE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(CODE_PATTERN).unwrap());

/// Codes that would be shadowed by fixed top-level routes.
pub const RESERVED_CODES: &[&str] = &["healthz", "readyz"];

/// Generates a random 6-character alphanumeric code.
///
/// Each character is sampled independently and uniformly from `[A-Za-z0-9]`.
/// The result is not checked against the store; see
/// [`crate::application::services::CodeAllocator`].
pub fn generate_code() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(GENERATED_CODE_LENGTH)
        .map(char::from)
        .collect()
}

/// Returns true if `code` has the shape of a short code.
pub fn is_valid_code(code: &str) -> bool {
    CODE_REGEX.is_match(code)
}

/// Validates a caller-supplied custom code.
///
/// # Rules
///
/// - 6-8 characters from `[A-Za-z0-9]`
/// - Not one of [`RESERVED_CODES`]
///
/// # Errors
///
/// Returns [`AppError::Validation`] if a rule is violated.
pub fn validate_custom_code(code: &str) -> Result<(), AppError> {
    if !is_valid_code(code) {
        return Err(AppError::bad_request(
            "Code must match [A-Za-z0-9]{6,8}",
            json!({ "code": code }),
        ));
    }

    if RESERVED_CODES.contains(&code) {
        return Err(AppError::bad_request(
            "This code is reserved",
            json!({ "code": code }),
        ));
    }

    Ok(())
}
