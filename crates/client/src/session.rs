//! Session persistence and the injected session store.
//!
//! The store is an explicit object handed to the transport and consumers
//! rather than ambient global state: construct one over a file backend for
//! real use or an in-memory backend for tests, and pass it where it is
//! needed.
//!
//! The persisted blob holds `{access_token, refresh_token, user}` as one
//! JSON document. Absence of the access token is the sole logged-out
//! signal; a blob that fails to deserialize, or that carries a token
//! without a user (or vice versa), reads as logged out rather than
//! erroring.

use std::fmt;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use crate::error::SessionError;
use crate::models::SessionUser;

/// The persisted session blob.
///
/// `Debug` redacts token material.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedSession {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    pub user: SessionUser,
}

impl fmt::Debug for PersistedSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PersistedSession")
            .field("access_token", &"[REDACTED]")
            .field("refresh_token", &self.refresh_token.as_ref().map(|_| "[REDACTED]"))
            .field("user", &self.user)
            .finish()
    }
}

/// Storage backend for the session blob.
///
/// Backends only move the blob in and out of storage; session validity
/// (a non-empty access token) is enforced by [`SessionStore`] so every
/// backend implementation behaves identically. `load` is infallible by
/// design: any unreadable or malformed state is reported as "no session"
/// so a corrupt blob can never wedge the client into an error loop.
pub trait SessionBackend: Send + Sync {
    /// Read the stored session, if one can be deserialized.
    fn load(&self) -> Option<PersistedSession>;

    /// Persist a session, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if the blob cannot be written.
    fn save(&self, session: &PersistedSession) -> Result<(), SessionError>;

    /// Remove any stored session. Must not fail; best effort.
    fn clear(&self);
}

/// File-backed session storage.
///
/// The client-side equivalent of browser local storage: a small JSON file
/// at a configured path.
pub struct FileSessionBackend {
    path: PathBuf,
}

impl FileSessionBackend {
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl SessionBackend for FileSessionBackend {
    fn load(&self) -> Option<PersistedSession> {
        let raw = std::fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str::<PersistedSession>(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "malformed session blob, treating as logged out");
                None
            }
        }
    }

    fn save(&self, session: &PersistedSession) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string(session)?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }

    fn clear(&self) {
        if let Err(e) = std::fs::remove_file(&self.path)
            && e.kind() != std::io::ErrorKind::NotFound
        {
            tracing::warn!(path = %self.path.display(), error = %e, "failed to remove session blob");
        }
    }
}

/// In-memory session storage for tests and fake stores.
#[derive(Default)]
pub struct MemorySessionBackend {
    slot: Mutex<Option<PersistedSession>>,
}

impl SessionBackend for MemorySessionBackend {
    fn load(&self) -> Option<PersistedSession> {
        self.slot.lock().ok()?.clone()
    }

    fn save(&self, session: &PersistedSession) -> Result<(), SessionError> {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = Some(session.clone());
        }
        Ok(())
    }

    fn clear(&self) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = None;
        }
    }
}

/// The session store consulted by the transport and route guard.
///
/// Cheap to clone; clones share the same backend.
#[derive(Clone)]
pub struct SessionStore {
    backend: Arc<dyn SessionBackend>,
}

impl SessionStore {
    /// Build a store over a custom backend.
    #[must_use]
    pub fn new(backend: Arc<dyn SessionBackend>) -> Self {
        Self { backend }
    }

    /// Build a file-backed store at the given path.
    #[must_use]
    pub fn file(path: PathBuf) -> Self {
        Self::new(Arc::new(FileSessionBackend::new(path)))
    }

    /// Build an in-memory store.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemorySessionBackend::default()))
    }

    /// Read the stored session, discarding any with an empty access token.
    ///
    /// Validity lives here rather than in the backends so a custom
    /// [`SessionBackend`] cannot accidentally report a tokenless blob as
    /// logged in.
    fn load(&self) -> Option<PersistedSession> {
        self.backend
            .load()
            .filter(|session| !session.access_token.is_empty())
    }

    /// The current access token, if a session is stored.
    #[must_use]
    pub fn access_token(&self) -> Option<String> {
        self.load().map(|s| s.access_token)
    }

    /// The current user, or `None` when logged out or the blob is invalid.
    #[must_use]
    pub fn current_user(&self) -> Option<SessionUser> {
        self.load().map(|s| s.user)
    }

    /// Whether an access token is present in storage.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.access_token().is_some()
    }

    /// Replace the stored session.
    pub(crate) fn set(&self, session: &PersistedSession) -> Result<(), SessionError> {
        self.backend.save(session)
    }

    /// Clear the stored session. Always succeeds.
    pub fn clear(&self) {
        self.backend.clear();
    }
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use atelier_core::{Email, UserId};

    fn sample_session() -> PersistedSession {
        PersistedSession {
            access_token: "token-abc".to_owned(),
            refresh_token: Some("refresh-def".to_owned()),
            user: SessionUser {
                id: UserId::new(1),
                email: Email::parse("ana@atelier.studio").unwrap(),
                first_name: "Ana".to_owned(),
                last_name: "Reis".to_owned(),
                is_staff: true,
            },
        }
    }

    fn temp_session_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("atelier-session-test-{name}-{}.json", std::process::id()))
    }

    #[test]
    fn test_memory_roundtrip() {
        let store = SessionStore::in_memory();
        assert!(!store.is_authenticated());

        store.set(&sample_session()).unwrap();
        assert!(store.is_authenticated());
        assert_eq!(store.access_token().unwrap(), "token-abc");
        assert_eq!(store.current_user().unwrap().first_name, "Ana");

        store.clear();
        assert!(!store.is_authenticated());
        assert!(store.current_user().is_none());
    }

    #[test]
    fn test_file_roundtrip() {
        let path = temp_session_path("roundtrip");
        let store = SessionStore::file(path.clone());

        store.set(&sample_session()).unwrap();
        assert!(store.is_authenticated());

        // A second store over the same path sees the session
        let other = SessionStore::file(path.clone());
        assert_eq!(other.current_user().unwrap().id, UserId::new(1));

        store.clear();
        assert!(!other.is_authenticated());
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_file_missing_reads_logged_out() {
        let store = SessionStore::file(temp_session_path("missing"));
        assert!(store.current_user().is_none());
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_malformed_blob_reads_logged_out() {
        let path = temp_session_path("malformed");
        std::fs::write(&path, "{not json").unwrap();
        let store = SessionStore::file(path.clone());
        assert!(store.current_user().is_none());
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_token_without_user_reads_logged_out() {
        let path = temp_session_path("no-user");
        std::fs::write(&path, r#"{"access_token": "tok"}"#).unwrap();
        let store = SessionStore::file(path.clone());
        assert!(!store.is_authenticated());
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_empty_token_reads_logged_out() {
        let path = temp_session_path("empty-token");
        let mut session = sample_session();
        session.access_token = String::new();
        std::fs::write(&path, serde_json::to_string(&session).unwrap()).unwrap();
        let store = SessionStore::file(path.clone());
        assert!(!store.is_authenticated());
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_empty_token_reads_logged_out_on_any_backend() {
        // The store, not the backend, enforces token validity: an
        // in-memory store must answer exactly like a file store for the
        // same persisted state.
        let mut session = sample_session();
        session.access_token = String::new();

        let store = SessionStore::in_memory();
        store.set(&session).unwrap();

        assert!(!store.is_authenticated());
        assert!(store.access_token().is_none());
        assert!(store.current_user().is_none());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let store = SessionStore::file(temp_session_path("clear-idem"));
        store.clear();
        store.clear();
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_debug_redacts_tokens() {
        let debug = format!("{:?}", sample_session());
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("token-abc"));
        assert!(!debug.contains("refresh-def"));
    }
}
