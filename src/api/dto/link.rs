//! DTOs for link management endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Link;

/// Request to create a short link.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkRequest {
    /// Destination URL (absolute, `http` or `https`).
    #[serde(default)]
    #[validate(length(
        min = 1,
        max = 2048,
        message = "target is required and must be at most 2048 characters"
    ))]
    pub target: String,

    /// Optional custom short code. An empty string means "generate one".
    #[serde(default)]
    pub code: Option<String>,
}

impl CreateLinkRequest {
    /// Returns the custom code, treating an empty string as absent.
    ///
    /// Only `""` is dropped; any other malformed value reaches validation.
    pub fn custom_code(&self) -> Option<String> {
        self.code
            .as_deref()
            .filter(|code| !code.is_empty())
            .map(str::to_string)
    }
}

/// JSON representation of a link record.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LinkResponse {
    pub code: String,
    pub target: String,
    pub clicks: i64,
    pub last_clicked: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<Link> for LinkResponse {
    fn from(link: Link) -> Self {
        Self {
            code: link.code,
            target: link.target,
            clicks: link.clicks,
            last_clicked: link.last_clicked,
            created_at: link.created_at,
        }
    }
}

/// Body returned after a successful delete.
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteLinkResponse {
    pub ok: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_code_empty_is_absent() {
        let request: CreateLinkRequest =
            serde_json::from_str(r#"{"target": "https://example.com", "code": ""}"#).unwrap();
        assert!(request.custom_code().is_none());

        let request: CreateLinkRequest =
            serde_json::from_str(r#"{"target": "https://example.com", "code": null}"#).unwrap();
        assert!(request.custom_code().is_none());

        let request: CreateLinkRequest =
            serde_json::from_str(r#"{"target": "https://example.com", "code": "abc123"}"#)
                .unwrap();
        assert_eq!(request.custom_code().as_deref(), Some("abc123"));

        let request: CreateLinkRequest =
            serde_json::from_str(r#"{"target": "https://example.com", "code": " "}"#).unwrap();
        assert_eq!(request.custom_code().as_deref(), Some(" "));
    }

    #[test]
    fn test_missing_target_fails_validation() {
        let request: CreateLinkRequest = serde_json::from_str("{}").unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_overlong_target_fails_validation() {
        let request = CreateLinkRequest {
            target: format!("https://example.com/{}", "a".repeat(2048)),
            code: None,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_link_response_shape() {
        let link = Link::new(
            "abc123".to_string(),
            "https://example.com".to_string(),
            0,
            None,
            Utc::now(),
        );

        let value = serde_json::to_value(LinkResponse::from(link)).unwrap();
        assert_eq!(value["code"], "abc123");
        assert_eq!(value["target"], "https://example.com");
        assert_eq!(value["clicks"], 0);
        assert!(value["last_clicked"].is_null());
        assert!(value["created_at"].is_string());
    }
}
