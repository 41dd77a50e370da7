//! Shared HTTP transport for all resource clients.
//!
//! A single `reqwest::Client` behind an `Arc`, configured with the backend
//! base URL and a JSON default content type. Every outgoing request reads
//! the bearer token from the injected [`SessionStore`] and attaches it when
//! present - the client-side equivalent of a request interceptor. There is
//! no response interceptor: expired or invalid tokens surface as ordinary
//! error statuses to callers.

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::{ApiError, ClientError};
use crate::outcome::{Outcome, decode_success, failure_from_error};
use crate::session::SessionStore;

/// Shared HTTP transport.
///
/// Cheap to clone; clones share the connection pool and session store.
#[derive(Clone)]
pub struct Transport {
    inner: Arc<TransportInner>,
}

struct TransportInner {
    client: reqwest::Client,
    base_url: String,
    session: SessionStore,
}

impl Transport {
    /// Build a transport from configuration and an injected session store.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the HTTP client fails to build.
    pub fn new(config: &ClientConfig, session: SessionStore) -> Result<Self, ClientError> {
        let mut headers = HeaderMap::new();
        headers.insert("Content-Type", HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            inner: Arc::new(TransportInner {
                client,
                base_url: config.base().to_owned(),
                session,
            }),
        })
    }

    /// The session store this transport reads tokens from.
    #[must_use]
    pub fn session(&self) -> &SessionStore {
        &self.inner.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.inner.base_url)
    }

    /// Start a request, attaching the bearer token when one is stored.
    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let mut builder = self.inner.client.request(method, self.url(path));
        if let Some(token) = self.inner.session.access_token() {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    pub(crate) fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.request(reqwest::Method::GET, path)
    }

    pub(crate) fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.request(reqwest::Method::POST, path)
    }

    pub(crate) fn post_json<B: Serialize>(&self, path: &str, body: &B) -> reqwest::RequestBuilder {
        self.post(path).json(body)
    }

    pub(crate) fn put_json<B: Serialize>(&self, path: &str, body: &B) -> reqwest::RequestBuilder {
        self.request(reqwest::Method::PUT, path).json(body)
    }

    pub(crate) fn patch_json<B: Serialize>(&self, path: &str, body: &B) -> reqwest::RequestBuilder {
        self.request(reqwest::Method::PATCH, path).json(body)
    }

    pub(crate) fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.request(reqwest::Method::DELETE, path)
    }

    /// Send a request and return its JSON body.
    ///
    /// Non-success statuses become [`ApiError::Status`] carrying the parsed
    /// error body (or `Null` when the body is empty or not JSON - error
    /// bodies are diagnostic, not structural). Success bodies must be JSON
    /// or empty.
    pub(crate) async fn send(
        &self,
        builder: reqwest::RequestBuilder,
    ) -> Result<serde_json::Value, ApiError> {
        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let body = serde_json::from_str(&text).unwrap_or(serde_json::Value::Null);
            debug!(status = %status, "request failed");
            return Err(ApiError::Status { status, body });
        }

        if text.is_empty() {
            return Ok(serde_json::Value::Null);
        }

        Ok(serde_json::from_str(&text)?)
    }

    /// Send a request and normalize the response into an [`Outcome`],
    /// decoding the whole body as `T`.
    pub(crate) async fn run<T: DeserializeOwned>(
        &self,
        builder: reqwest::RequestBuilder,
        fallback: &str,
    ) -> Outcome<T> {
        match self.send(builder).await {
            Ok(body) => decode_success(body, fallback),
            Err(e) => failure_from_error(&e, fallback),
        }
    }

    /// Send a request whose response wraps the payload as
    /// `{message, <field>: T}`, unwrapping the named field.
    pub(crate) async fn run_field<T: DeserializeOwned>(
        &self,
        builder: reqwest::RequestBuilder,
        field: &str,
        fallback: &str,
    ) -> Outcome<T> {
        match self.send(builder).await {
            Ok(mut body) => {
                let message = take_message(&body);
                match body.get_mut(field).map(serde_json::Value::take) {
                    Some(value) => match serde_json::from_value(value) {
                        Ok(data) => Outcome::Success { data, message },
                        Err(e) => {
                            debug!(error = %e, field, "unexpected payload shape");
                            Outcome::failure(fallback)
                        }
                    },
                    None => {
                        debug!(field, "expected field missing from response");
                        Outcome::failure(fallback)
                    }
                }
            }
            Err(e) => failure_from_error(&e, fallback),
        }
    }

    /// Send a request whose only meaningful success payload is a message.
    pub(crate) async fn run_message(
        &self,
        builder: reqwest::RequestBuilder,
        fallback: &str,
    ) -> Outcome<()> {
        match self.send(builder).await {
            Ok(body) => Outcome::Success {
                data: (),
                message: take_message(&body),
            },
            Err(e) => failure_from_error(&e, fallback),
        }
    }
}

fn take_message(body: &serde_json::Value) -> Option<String> {
    body.get("message")
        .and_then(serde_json::Value::as_str)
        .map(str::to_owned)
}

impl std::fmt::Debug for Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transport")
            .field("base_url", &self.inner.base_url)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use wiremock::matchers::{bearer_token, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::models::SessionUser;
    use crate::session::PersistedSession;
    use atelier_core::{Email, UserId};

    fn transport_for(server: &MockServer, session: SessionStore) -> Transport {
        let config = ClientConfig::new(&server.uri(), PathBuf::from("unused.json")).unwrap();
        Transport::new(&config, session).unwrap()
    }

    fn logged_in_store() -> SessionStore {
        let store = SessionStore::in_memory();
        store
            .set(&PersistedSession {
                access_token: "token-abc".to_owned(),
                refresh_token: None,
                user: SessionUser {
                    id: UserId::new(1),
                    email: Email::parse("ana@atelier.studio").unwrap(),
                    first_name: String::new(),
                    last_name: String::new(),
                    is_staff: false,
                },
            })
            .unwrap();
        store
    }

    #[tokio::test]
    async fn test_attaches_bearer_token_when_present() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/posts/"))
            .and(bearer_token("token-abc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let transport = transport_for(&server, logged_in_store());
        let body = transport.send(transport.get("/posts/")).await.unwrap();
        assert_eq!(body, serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_no_authorization_header_when_logged_out() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/posts/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&server)
            .await;

        let transport = transport_for(&server, SessionStore::in_memory());
        transport.send(transport.get("/posts/")).await.unwrap();

        let requests = server.received_requests().await.unwrap();
        assert!(requests[0].headers.get("authorization").is_none());
    }

    #[tokio::test]
    async fn test_json_content_type_default() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ping/"))
            .and(header("content-type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let transport = transport_for(&server, SessionStore::in_memory());
        transport.send(transport.get("/ping/")).await.unwrap();
    }

    #[tokio::test]
    async fn test_error_status_carries_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/posts/gone/"))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(serde_json::json!({"message": "missing"})),
            )
            .mount(&server)
            .await;

        let transport = transport_for(&server, SessionStore::in_memory());
        let err = transport
            .send(transport.get("/posts/gone/"))
            .await
            .unwrap_err();
        match err {
            ApiError::Status { status, body } => {
                assert_eq!(status.as_u16(), 404);
                assert_eq!(body["message"], serde_json::json!("missing"));
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_success_body_is_null() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/posts/old/"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let transport = transport_for(&server, SessionStore::in_memory());
        let body = transport
            .send(transport.delete("/posts/old/"))
            .await
            .unwrap();
        assert_eq!(body, serde_json::Value::Null);
    }
}
