//! Integration test harness for the Atelier client.
//!
//! Each test spins up a [`wiremock::MockServer`] playing the CMS backend
//! and a [`CmsClient`] pointed at it over an in-memory session store, so
//! tests exercise the full request, envelope, and session pipeline without
//! touching the filesystem or a real server.
//!
//! ```bash
//! cargo test -p atelier-integration-tests
//! ```

#![allow(clippy::unwrap_used)]

use std::path::PathBuf;

use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use atelier_client::{ClientConfig, CmsClient, SessionStore};
use atelier_core::Email;

/// A mock backend plus a client wired to it.
pub struct TestContext {
    pub server: MockServer,
    pub client: CmsClient,
    pub session: SessionStore,
}

impl TestContext {
    /// Start a mock backend and build a client against it with an empty
    /// in-memory session.
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        let session = SessionStore::in_memory();
        let config = ClientConfig::new(&server.uri(), PathBuf::from("unused.json")).unwrap();
        let client = CmsClient::with_session(&config, session.clone()).unwrap();
        Self {
            server,
            client,
            session,
        }
    }

    /// Log in through a mocked login endpoint, populating the session
    /// store the same way production code does.
    pub async fn login(&self) {
        Mock::given(method("POST"))
            .and(path("/auth/login/"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(login_body("test-access-token", "test-refresh-token")),
            )
            .mount(&self.server)
            .await;

        let email = Email::parse("ana@atelier.studio").unwrap();
        let outcome = self.client.auth().login(&email, "hunter2").await;
        assert!(outcome.is_success(), "test login should succeed");
    }
}

/// The session user used across tests.
pub fn sample_session_user() -> Value {
    json!({
        "id": 1,
        "email": "ana@atelier.studio",
        "first_name": "Ana",
        "last_name": "Reis",
        "is_staff": true
    })
}

/// A login response body in the backend's shape.
pub fn login_body(access: &str, refresh: &str) -> Value {
    json!({
        "message": "Login successful",
        "access": access,
        "refresh": refresh,
        "user": sample_session_user(),
    })
}

/// A full post body in the backend's shape.
pub fn post_body(slug: &str, title: &str, published: bool) -> Value {
    json!({
        "id": 10,
        "title": title,
        "slug": slug,
        "content": "Body of the post.",
        "author": {
            "id": 1,
            "email": "ana@atelier.studio",
            "first_name": "Ana",
            "last_name": "Reis"
        },
        "is_published": published,
        "created_at": "2024-04-01T10:00:00Z",
        "updated_at": "2024-04-01T10:00:00Z"
    })
}

/// A post list entry in the backend's shape.
pub fn post_summary_body(slug: &str, title: &str) -> Value {
    json!({
        "id": 10,
        "title": title,
        "slug": slug,
        "excerpt": "Body of the...",
        "author": {
            "id": 1,
            "email": "ana@atelier.studio",
            "first_name": "Ana",
            "last_name": "Reis"
        },
        "is_published": true,
        "created_at": "2024-04-01T10:00:00Z"
    })
}

/// A paginated envelope around `results`.
pub fn page_body(results: Vec<Value>) -> Value {
    json!({
        "count": results.len(),
        "next": null,
        "previous": null,
        "results": results,
    })
}

/// A configuration body in the backend's shape.
pub fn configuration_body(key: &str, value: &str, default_value: &str) -> Value {
    json!({
        "key": key,
        "label": key,
        "description": null,
        "value": value,
        "default_value": default_value,
        "category": "site",
        "type": "text",
        "is_required": false,
        "is_public": true,
        "order": 0
    })
}

/// A user body in the backend's shape.
pub fn user_body(id: i64, email: &str, is_staff: bool, is_active: bool) -> Value {
    json!({
        "id": id,
        "email": email,
        "first_name": "Test",
        "last_name": "User",
        "is_staff": is_staff,
        "is_active": is_active,
        "date_joined": "2024-01-15T08:30:00Z",
        "last_login": null
    })
}
