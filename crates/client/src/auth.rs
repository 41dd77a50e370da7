//! Authentication operations and session lifecycle.
//!
//! `login` exchanges credentials for a token pair, persists
//! `{access_token, refresh_token, user}` through the session store, and
//! returns the backend's user. A failed login mutates nothing. `logout` is
//! synchronous and always succeeds. There is no token refresh: a stale
//! token stays "authenticated" until a guarded request fails.

use serde::Deserialize;
use tracing::debug;

use atelier_core::Email;

use crate::models::{ProfileUpdate, RegisterRequest, RegisteredUser, SessionUser};
use crate::outcome::Outcome;
use crate::session::PersistedSession;
use crate::transport::Transport;

/// Token pair and user returned by the login endpoint.
#[derive(Debug, Deserialize)]
struct LoginResponse {
    access: String,
    #[serde(default)]
    refresh: Option<String>,
    user: SessionUser,
}

/// Profile wrapper returned by `/auth/profile/`.
#[derive(Debug, Deserialize)]
struct ProfileResponse {
    user: SessionUser,
}

/// Authentication client.
pub struct AuthClient<'a> {
    transport: &'a Transport,
}

impl<'a> AuthClient<'a> {
    pub(crate) const fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Log in with email and password.
    ///
    /// On success the token pair and user are persisted and the user is
    /// returned. On failure the session store is left untouched and the
    /// backend's message (or a generic one) is reported.
    pub async fn login(&self, email: &Email, password: &str) -> Outcome<SessionUser> {
        let body = serde_json::json!({
            "email": email,
            "password": password,
        });

        let outcome: Outcome<LoginResponse> = self
            .transport
            .run(self.transport.post_json("/auth/login/", &body), "Login failed")
            .await;

        match outcome {
            Outcome::Success { data, message } => {
                let session = PersistedSession {
                    access_token: data.access,
                    refresh_token: data.refresh,
                    user: data.user.clone(),
                };
                if let Err(e) = self.transport.session().set(&session) {
                    debug!(error = %e, "failed to persist session");
                    return Outcome::failure("Login succeeded but the session could not be saved");
                }
                Outcome::Success {
                    data: data.user,
                    message,
                }
            }
            Outcome::Failure { message, errors } => Outcome::Failure { message, errors },
        }
    }

    /// Register a new account.
    ///
    /// Does not log in; callers typically follow with [`login`](Self::login).
    /// Validation failures surface as a field-keyed error map.
    pub async fn register(&self, request: &RegisterRequest) -> Outcome<RegisteredUser> {
        self.transport
            .run_field(
                self.transport.post_json("/auth/register/", request),
                "user",
                "Registration failed",
            )
            .await
    }

    /// Clear all persisted session state. Synchronous, always succeeds.
    pub fn logout(&self) {
        self.transport.session().clear();
    }

    /// The persisted user, or `None` when logged out or the blob is
    /// malformed. Never errors.
    #[must_use]
    pub fn current_user(&self) -> Option<SessionUser> {
        self.transport.session().current_user()
    }

    /// Whether an access token is present in storage.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.transport.session().is_authenticated()
    }

    /// Fetch the logged-in user's profile from the backend.
    pub async fn profile(&self) -> Outcome<SessionUser> {
        let outcome: Outcome<ProfileResponse> = self
            .transport
            .run(
                self.transport.get("/auth/profile/"),
                "Could not load profile",
            )
            .await;
        outcome.map(|p| p.user)
    }

    /// Update the logged-in user's profile (partial patch).
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Outcome<SessionUser> {
        self.transport
            .run_field(
                self.transport.patch_json("/auth/profile/update/", update),
                "user",
                "Could not update profile",
            )
            .await
    }
}
