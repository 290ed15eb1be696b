mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

fn is_short_code(value: &Value) -> bool {
    value.as_str().is_some_and(|code| {
        (6..=8).contains(&code.len()) && code.chars().all(|c| c.is_ascii_alphanumeric())
    })
}

// ─── POST /links ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_link_generates_code() {
    let server = common::create_test_server();

    let response = server
        .post("/links")
        .json(&json!({ "target": "https://example.com" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let body = response.json::<Value>();
    assert!(is_short_code(&body["code"]));
    assert_eq!(body["code"].as_str().unwrap().len(), 6);
    assert_eq!(body["target"], "https://example.com");
    assert_eq!(body["clicks"], 0);
    assert!(body["last_clicked"].is_null());
    assert!(body["created_at"].is_string());
}

#[tokio::test]
async fn test_create_link_with_custom_code() {
    let server = common::create_test_server();

    let response = server
        .post("/links")
        .json(&json!({ "target": "https://example.com/docs", "code": "Docs2024" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let body = response.json::<Value>();
    assert_eq!(body["code"], "Docs2024");
    assert_eq!(body["target"], "https://example.com/docs");
}

#[tokio::test]
async fn test_create_link_empty_code_generates_one() {
    let server = common::create_test_server();

    let response = server
        .post("/links")
        .json(&json!({ "target": "https://example.com", "code": "" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    assert!(is_short_code(&response.json::<Value>()["code"]));
}

#[tokio::test]
async fn test_create_link_duplicate_code_conflict() {
    let server = common::create_test_server();

    server
        .post("/links")
        .json(&json!({ "target": "https://example.com", "code": "abc123" }))
        .await
        .assert_status(StatusCode::CREATED);

    let response = server
        .post("/links")
        .json(&json!({ "target": "https://another.example.org", "code": "abc123" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    assert_eq!(response.json::<Value>()["error"]["code"], "conflict");

    // The first mapping is untouched.
    let body = server.get("/links/abc123").await.json::<Value>();
    assert_eq!(body["target"], "https://example.com");
}

#[tokio::test]
async fn test_create_link_invalid_code() {
    let server = common::create_test_server();

    for code in [" ", "abc", "abcdefghi", "abc-12", "abc_12", "abc 12", "healthz"] {
        let response = server
            .post("/links")
            .json(&json!({ "target": "https://example.com", "code": code }))
            .await;

        response.assert_status_bad_request();
        assert_eq!(
            response.json::<Value>()["error"]["code"],
            "validation_error",
            "code '{code}'"
        );
    }
}

#[tokio::test]
async fn test_create_link_invalid_target() {
    let server = common::create_test_server();

    for target in [
        "not-a-url",
        "/relative/path",
        "example.com",
        "ftp://example.com/file",
        "javascript:alert(1)",
        "",
    ] {
        let response = server
            .post("/links")
            .json(&json!({ "target": target }))
            .await;

        response.assert_status_bad_request();
    }
}

#[tokio::test]
async fn test_create_link_target_with_control_characters() {
    let server = common::create_test_server();

    for (code, target) in [
        ("nl0001", "https://example.com/a\nb"),
        ("tab001", "https://example.com/a\tb"),
        ("crlf01", "https://example.com/a\r\nX-Injected: 1"),
    ] {
        let response = server
            .post("/links")
            .json(&json!({ "target": target, "code": code }))
            .await;

        response.assert_status_bad_request();
        assert_eq!(
            response.json::<Value>()["error"]["code"],
            "validation_error"
        );

        server
            .get(&format!("/links/{code}"))
            .await
            .assert_status_not_found();
    }
}

#[tokio::test]
async fn test_create_link_missing_target() {
    let server = common::create_test_server();

    let response = server.post("/links").json(&json!({ "code": "abc123" })).await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_create_link_malformed_body() {
    let server = common::create_test_server();

    let response = server
        .post("/links")
        .content_type("application/json")
        .bytes("{ not json".into())
        .await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<Value>()["error"]["code"],
        "validation_error"
    );
}

// ─── GET /links ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_links_empty() {
    let server = common::create_test_server();

    let response = server.get("/links").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!([]));
}

#[tokio::test]
async fn test_list_links_newest_first() {
    let server = common::create_test_server();

    for code in ["first1", "second", "third3"] {
        server
            .post("/links")
            .json(&json!({ "target": "https://example.com", "code": code }))
            .await
            .assert_status(StatusCode::CREATED);
    }

    let body = server.get("/links").await.json::<Value>();
    let codes: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|link| link["code"].as_str().unwrap())
        .collect();

    assert_eq!(codes, vec!["third3", "second", "first1"]);

    for link in body.as_array().unwrap() {
        for field in ["code", "target", "clicks", "last_clicked", "created_at"] {
            assert!(link.get(field).is_some(), "missing field {field}");
        }
    }
}

// ─── GET /links/{code} ───────────────────────────────────────────────────────

#[tokio::test]
async fn test_get_link() {
    let server = common::create_test_server();

    server
        .post("/links")
        .json(&json!({ "target": "https://example.com", "code": "show01" }))
        .await;

    let response = server.get("/links/show01").await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["code"], "show01");
    assert_eq!(body["clicks"], 0);
}

#[tokio::test]
async fn test_get_link_not_found() {
    let server = common::create_test_server();

    server.get("/links/nope12").await.assert_status_not_found();
    server.get("/links/x").await.assert_status_not_found();
}

#[tokio::test]
async fn test_codes_are_case_sensitive() {
    let server = common::create_test_server();

    server
        .post("/links")
        .json(&json!({ "target": "https://lower.example.com", "code": "abcdef" }))
        .await
        .assert_status(StatusCode::CREATED);

    server
        .post("/links")
        .json(&json!({ "target": "https://upper.example.com", "code": "ABCDEF" }))
        .await
        .assert_status(StatusCode::CREATED);

    let body = server.get("/links/ABCDEF").await.json::<Value>();
    assert_eq!(body["target"], "https://upper.example.com");
}

// ─── DELETE /links/{code} ────────────────────────────────────────────────────

#[tokio::test]
async fn test_delete_link() {
    let server = common::create_test_server();

    server
        .post("/links")
        .json(&json!({ "target": "https://example.com", "code": "del001" }))
        .await;

    let response = server.delete("/links/del001").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!({ "ok": true }));

    server.get("/links/del001").await.assert_status_not_found();
    server.get("/del001").await.assert_status_not_found();
}

#[tokio::test]
async fn test_delete_link_not_found() {
    let server = common::create_test_server();

    server.delete("/links/del404").await.assert_status_not_found();
}

#[tokio::test]
async fn test_delete_twice() {
    let server = common::create_test_server();

    server
        .post("/links")
        .json(&json!({ "target": "https://example.com", "code": "del002" }))
        .await;

    server.delete("/links/del002").await.assert_status_ok();
    server
        .delete("/links/del002")
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn test_deleted_code_can_be_reused() {
    let server = common::create_test_server();

    server
        .post("/links")
        .json(&json!({ "target": "https://old.example.com", "code": "reuse1" }))
        .await;
    server.delete("/links/reuse1").await.assert_status_ok();

    let response = server
        .post("/links")
        .json(&json!({ "target": "https://new.example.com", "code": "reuse1" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.json::<Value>()["clicks"], 0);
}
