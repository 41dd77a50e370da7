//! Login, logout, and session persistence against a mock backend.

#![allow(clippy::unwrap_used)]

use serde_json::json;
use wiremock::matchers::{bearer_token, body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

use atelier_integration_tests::{TestContext, login_body, sample_session_user};

#[tokio::test]
async fn test_login_persists_tokens_and_user() {
    let ctx = TestContext::new().await;

    Mock::given(method("POST"))
        .and(path("/auth/login/"))
        .and(body_json(json!({
            "email": "ana@atelier.studio",
            "password": "hunter2",
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(login_body("access-123", "refresh-456")),
        )
        .expect(1)
        .mount(&ctx.server)
        .await;

    let email = "ana@atelier.studio".parse().unwrap();
    let outcome = ctx.client.auth().login(&email, "hunter2").await;

    assert!(outcome.is_success());
    let user = outcome.into_data().unwrap();
    assert_eq!(user.display_name(), "Ana Reis");

    // Exactly what the backend returned is now in the store
    assert_eq!(ctx.session.access_token().unwrap(), "access-123");
    assert!(ctx.session.is_authenticated());
    assert_eq!(
        ctx.session.current_user().unwrap().email.as_str(),
        "ana@atelier.studio"
    );
}

#[tokio::test]
async fn test_failed_login_leaves_storage_untouched() {
    let ctx = TestContext::new().await;

    Mock::given(method("POST"))
        .and(path("/auth/login/"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"message": "Invalid credentials"})),
        )
        .mount(&ctx.server)
        .await;

    let email = "ana@atelier.studio".parse().unwrap();
    let outcome = ctx.client.auth().login(&email, "wrong").await;

    assert!(!outcome.is_success());
    assert_eq!(outcome.message(), Some("Invalid credentials"));
    assert!(!ctx.session.is_authenticated());
    assert!(ctx.session.current_user().is_none());
}

#[tokio::test]
async fn test_logout_clears_session() {
    let ctx = TestContext::new().await;
    ctx.login().await;
    assert!(ctx.client.auth().is_authenticated());

    ctx.client.auth().logout();

    assert!(!ctx.client.auth().is_authenticated());
    assert!(ctx.client.auth().current_user().is_none());
}

#[tokio::test]
async fn test_register_reports_field_errors() {
    let ctx = TestContext::new().await;

    Mock::given(method("POST"))
        .and(path("/auth/register/"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "message": "Registration failed",
            "errors": {
                "email": ["A user with this email already exists."],
                "password": "This password is too short.",
            }
        })))
        .mount(&ctx.server)
        .await;

    let request = atelier_client::RegisterRequest {
        email: "ana@atelier.studio".parse().unwrap(),
        password: "x".to_owned(),
        password_confirm: "x".to_owned(),
        first_name: "Ana".to_owned(),
        last_name: "Reis".to_owned(),
    };
    let outcome = ctx.client.auth().register(&request).await;

    assert!(!outcome.is_success());
    let errors = outcome.errors();
    assert_eq!(
        errors["email"],
        vec!["A user with this email already exists.".to_owned()]
    );
    assert_eq!(
        errors["password"],
        vec!["This password is too short.".to_owned()]
    );
    // Registration never logs in
    assert!(!ctx.session.is_authenticated());
}

#[tokio::test]
async fn test_profile_request_uses_stored_token() {
    let ctx = TestContext::new().await;
    ctx.login().await;

    Mock::given(method("GET"))
        .and(path("/auth/profile/"))
        .and(bearer_token("test-access-token"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"user": sample_session_user()})),
        )
        .expect(1)
        .mount(&ctx.server)
        .await;

    let outcome = ctx.client.auth().profile().await;
    assert!(outcome.is_success());
    assert_eq!(outcome.into_data().unwrap().first_name, "Ana");
}

#[tokio::test]
async fn test_network_failure_becomes_failure_envelope() {
    let ctx = TestContext::new().await;
    let server_uri = ctx.server.uri();
    drop(ctx.server);

    // Rebuild a client against the now-dead server
    let config = atelier_client::ClientConfig::new(
        &server_uri,
        std::path::PathBuf::from("unused.json"),
    )
    .unwrap();
    let client =
        atelier_client::CmsClient::with_session(&config, atelier_client::SessionStore::in_memory())
            .unwrap();

    let email = "ana@atelier.studio".parse().unwrap();
    let outcome = client.auth().login(&email, "hunter2").await;

    assert!(!outcome.is_success());
    assert_eq!(outcome.message(), Some("Login failed"));
}
