//! Atelier Client - Typed client for the CMS REST backend.
//!
//! This crate is the API-access and session core of the Atelier site: a
//! shared HTTP transport with bearer-token attachment, an injected session
//! store with persisted credentials, a route guard for protected views,
//! and one resource client per backend surface (auth, posts, users,
//! configurations, public reads).
//!
//! # Contract
//!
//! Every resource operation resolves to an [`Outcome`]: transport
//! failures, error statuses, and unexpected payloads are all normalized
//! into `Failure { message, errors }` - nothing escapes to callers as a
//! panic or `Err`. The backend owns all entities; responses are snapshots
//! for rendering, re-fetched after mutations.
//!
//! # Example
//!
//! ```rust,ignore
//! use atelier_client::{ClientConfig, CmsClient, PostQuery};
//!
//! let config = ClientConfig::from_env()?;
//! let client = CmsClient::new(&config)?;
//!
//! let login = client.auth().login(&email, &password).await;
//! if login.is_success() {
//!     let mine = client.posts().my_posts().await;
//! }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod auth;
pub mod availability;
pub mod config;
pub mod configurations;
pub mod error;
pub mod guard;
pub mod models;
pub mod outcome;
pub mod posts;
pub mod public;
pub mod session;
pub mod transport;
pub mod users;

pub use auth::AuthClient;
pub use availability::{AvailabilityProvider, DaySchedule, SyntheticAvailability, TimeSlot};
pub use config::{ClientConfig, ConfigError, DEFAULT_API_URL};
pub use configurations::{ConfigQuery, ConfigurationsClient};
pub use error::{ApiError, ClientError, SessionError};
pub use guard::{GuardDecision, RouteGuard, SessionState};
pub use models::*;
pub use outcome::{FieldErrors, Outcome};
pub use posts::{PostQuery, PostsClient};
pub use public::PublicClient;
pub use session::{PersistedSession, SessionBackend, SessionStore};
pub use transport::Transport;
pub use users::UsersClient;

use public::PublicCache;

/// Facade over the transport and resource clients.
///
/// Owns the shared transport, the injected session store, and the public
/// read cache. Resource clients borrow from it per call.
pub struct CmsClient {
    transport: Transport,
    public_cache: PublicCache,
}

impl CmsClient {
    /// Build a client with a file-backed session store at the configured
    /// path.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the HTTP client fails to build.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        Self::with_session(config, SessionStore::file(config.session_path.clone()))
    }

    /// Build a client over an explicitly injected session store.
    ///
    /// This is the seam for tests and embedders: hand in an in-memory
    /// store (or any custom [`SessionBackend`]) and the whole client,
    /// guard included, runs against it.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the HTTP client fails to build.
    pub fn with_session(config: &ClientConfig, session: SessionStore) -> Result<Self, ClientError> {
        let transport = Transport::new(config, session)?;
        Ok(Self {
            transport,
            public_cache: PublicCache::new(),
        })
    }

    /// Authentication and session operations.
    #[must_use]
    pub const fn auth(&self) -> AuthClient<'_> {
        AuthClient::new(&self.transport)
    }

    /// Blog post operations.
    #[must_use]
    pub const fn posts(&self) -> PostsClient<'_> {
        PostsClient::new(&self.transport)
    }

    /// Admin user management operations.
    #[must_use]
    pub const fn users(&self) -> UsersClient<'_> {
        UsersClient::new(&self.transport)
    }

    /// Site configuration management operations.
    #[must_use]
    pub const fn configurations(&self) -> ConfigurationsClient<'_> {
        ConfigurationsClient::new(&self.transport)
    }

    /// Public, unauthenticated site reads (cached).
    #[must_use]
    pub const fn public(&self) -> PublicClient<'_> {
        PublicClient::new(&self.transport, &self.public_cache)
    }

    /// The session store backing this client.
    #[must_use]
    pub fn session(&self) -> &SessionStore {
        self.transport.session()
    }

    /// A fresh route guard over this client's session store.
    #[must_use]
    pub fn guard(&self) -> RouteGuard {
        RouteGuard::new(self.session().clone())
    }
}
