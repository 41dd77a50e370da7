//! Route guard for protected views.
//!
//! Consumers gate rendering on the guard: while it is still initializing
//! they show a loading placeholder, and once resolved they either render
//! the protected view or redirect to login. The guard never reports
//! authenticated before resolution, so protected content cannot flash for
//! a logged-out user.
//!
//! All auth checks go through the session store; there is deliberately no
//! side channel that inspects raw responses instead.

use std::sync::OnceLock;

use crate::models::SessionUser;
use crate::session::SessionStore;

/// Observable authentication state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// The guard has not resolved yet; render a loading placeholder.
    Initializing,
    /// No valid session.
    Anonymous,
    /// A session is present.
    Authenticated(SessionUser),
}

/// The decision a resolved guard hands to the consumer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the protected view for this user.
    Allow(SessionUser),
    /// Redirect to the login route.
    RedirectToLogin,
}

/// Gate for protected views, resolved against an injected session store.
///
/// The session store is read exactly once, on first [`resolve`]
/// (RouteGuard::resolve); subsequent calls return the cached decision so a
/// view does not oscillate mid-render if another tab logs out underneath
/// it.
pub struct RouteGuard {
    session: SessionStore,
    resolved: OnceLock<GuardDecision>,
}

impl RouteGuard {
    /// Build a guard over a session store.
    #[must_use]
    pub const fn new(session: SessionStore) -> Self {
        Self {
            session,
            resolved: OnceLock::new(),
        }
    }

    /// Current state: `Initializing` until [`resolve`](Self::resolve) has
    /// been called, then `Anonymous` or `Authenticated`.
    #[must_use]
    pub fn state(&self) -> SessionState {
        match self.resolved.get() {
            None => SessionState::Initializing,
            Some(GuardDecision::RedirectToLogin) => SessionState::Anonymous,
            Some(GuardDecision::Allow(user)) => SessionState::Authenticated(user.clone()),
        }
    }

    /// Resolve the guard, reading the session store on first call.
    pub fn resolve(&self) -> GuardDecision {
        self.resolved
            .get_or_init(|| match self.session.current_user() {
                Some(user) => GuardDecision::Allow(user),
                None => GuardDecision::RedirectToLogin,
            })
            .clone()
    }
}
