//! Integration tests for the access-code validation routes.

use reqwest::Method;
use serde_json::{json, Value};

mod common;

// The access routes never touch the upstream, so every test points the
// proxy at a dead address.
const DEAD_UPSTREAM: &str = "http://127.0.0.1:9/3";

#[tokio::test]
async fn test_guest_code_accepted() {
    let addr = common::spawn_app(common::test_config(DEAD_UPSTREAM)).await;

    let client = reqwest::Client::new();
    let res = client
        .post(format!("http://{}/api/verify-guest-code", addr))
        .json(&json!({ "code": "DemoVault_73Z!PR" }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 200);
    assert_eq!(
        res.headers().get("access-control-allow-origin").unwrap(),
        "*"
    );
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["valid"], true);
    assert_eq!(body["message"], "Valid code");
}

#[tokio::test]
async fn test_guest_code_rejected() {
    let addr = common::spawn_app(common::test_config(DEAD_UPSTREAM)).await;

    let client = reqwest::Client::new();
    // Wrong, case-shifted, and padded variants all fail; comparison is
    // exact with no normalization.
    for code in ["wrong", "demovault_73z!pr", "DemoVault_73Z!PR ", ""] {
        let res = client
            .post(format!("http://{}/api/verify-guest-code", addr))
            .json(&json!({ "code": code }))
            .send()
            .await
            .unwrap();

        assert_eq!(res.status(), 200);
        let body: Value = res.json().await.unwrap();
        assert_eq!(body["valid"], false);
        assert_eq!(body["message"], "Invalid access code");
    }
}

#[tokio::test]
async fn test_secret_code_accepted() {
    let mut config = common::test_config(DEAD_UPSTREAM);
    config.access.signup_code = "LetMeIn_2024".to_string();
    let addr = common::spawn_app(config).await;

    let client = reqwest::Client::new();
    let res = client
        .post(format!("http://{}/api/verify-secret-code", addr))
        .json(&json!({ "code": "LetMeIn_2024" }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 200);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["valid"], true);
    assert_eq!(body["message"], "Valid code");
}

#[tokio::test]
async fn test_secret_code_rejected_is_not_a_client_error() {
    let addr = common::spawn_app(common::test_config(DEAD_UPSTREAM)).await;

    let client = reqwest::Client::new();
    let res = client
        .post(format!("http://{}/api/verify-secret-code", addr))
        .json(&json!({ "code": "wrong" }))
        .send()
        .await
        .unwrap();

    // A well-formed wrong code is a successful request.
    assert_eq!(res.status(), 200);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["valid"], false);
    assert_eq!(body["message"], "Invalid secret code");
}

#[tokio::test]
async fn test_malformed_code_is_bad_request() {
    let addr = common::spawn_app(common::test_config(DEAD_UPSTREAM)).await;

    let client = reqwest::Client::new();
    for body in [json!({}), json!({ "code": 42 }), json!({ "code": null })] {
        let res = client
            .post(format!("http://{}/api/verify-guest-code", addr))
            .json(&body)
            .send()
            .await
            .unwrap();

        assert_eq!(res.status(), 400);
        let body: Value = res.json().await.unwrap();
        assert_eq!(body["valid"], false);
        assert_eq!(body["error"], "Invalid code format");
    }
}

#[tokio::test]
async fn test_unparseable_body_is_internal_error() {
    let addr = common::spawn_app(common::test_config(DEAD_UPSTREAM)).await;

    let client = reqwest::Client::new();
    let res = client
        .post(format!("http://{}/api/verify-secret-code", addr))
        .header("content-type", "application/json")
        .body("{truncated")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 500);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "Internal server error");
}

#[tokio::test]
async fn test_preflight_and_method_gate() {
    let addr = common::spawn_app(common::test_config(DEAD_UPSTREAM)).await;
    let client = reqwest::Client::new();

    for route in ["verify-guest-code", "verify-secret-code"] {
        let res = client
            .request(
                Method::OPTIONS,
                format!("http://{}/api/{}", addr, route),
            )
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), 204);
        assert_eq!(
            res.headers().get("access-control-allow-methods").unwrap(),
            "POST, OPTIONS"
        );
        assert!(res.text().await.unwrap().is_empty());

        let res = client
            .request(Method::PUT, format!("http://{}/api/{}", addr, route))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), 405);
        let body: Value = res.json().await.unwrap();
        assert_eq!(body["error"], "Method not allowed");
    }
}

#[tokio::test]
async fn test_response_never_echoes_the_secret() {
    let addr = common::spawn_app(common::test_config(DEAD_UPSTREAM)).await;

    let client = reqwest::Client::new();
    let res = client
        .post(format!("http://{}/api/verify-guest-code", addr))
        .json(&json!({ "code": "wrong" }))
        .send()
        .await
        .unwrap();

    let text = res.text().await.unwrap();
    assert!(!text.contains("DemoVault_73Z!PR"));
}
