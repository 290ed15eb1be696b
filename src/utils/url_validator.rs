//! Target URL validation.
//!
//! Targets are checked but never rewritten: the stored target is exactly the
//! string the caller submitted, so the `Location` header matches it byte for byte.

use url::Url;

/// Errors that can occur while validating a target URL.
#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must include a host")]
    MissingHost,

    #[error("URL must not contain whitespace or control characters")]
    InvalidCharacters,
}

/// Validates that `input` is an absolute `http` or `https` URL with a host.
///
/// # Security
///
/// Rejects `javascript:`, `data:`, `file:` and every other non-HTTP scheme.
///
/// # Errors
///
/// - [`UrlValidationError::InvalidFormat`] for relative or malformed URLs
/// - [`UrlValidationError::UnsupportedProtocol`] for non-HTTP(S) schemes
/// - [`UrlValidationError::MissingHost`] for URLs such as `http:///path`
/// - [`UrlValidationError::InvalidCharacters`] for tabs, line breaks, spaces
///   or other control characters anywhere in the input
pub fn validate_target(input: &str) -> Result<Url, UrlValidationError> {
    // The parser drops tabs and newlines, but the raw input becomes the
    // `Location` header, which cannot carry them.
    if input.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(UrlValidationError::InvalidCharacters);
    }

    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlValidationError::UnsupportedProtocol),
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(UrlValidationError::MissingHost);
    }

    Ok(url)
}
