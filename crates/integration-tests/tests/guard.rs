//! Route guard behavior across the login lifecycle.

#![allow(clippy::unwrap_used)]

use atelier_client::{GuardDecision, SessionState};
use atelier_integration_tests::TestContext;

#[tokio::test]
async fn test_guard_never_allows_before_resolution() {
    let ctx = TestContext::new().await;
    ctx.login().await;

    let guard = ctx.client.guard();
    // Even with a valid session stored, an unresolved guard reports
    // Initializing, so protected content cannot flash early.
    assert_eq!(guard.state(), SessionState::Initializing);
}

#[tokio::test]
async fn test_guard_redirects_anonymous_user() {
    let ctx = TestContext::new().await;

    let guard = ctx.client.guard();
    assert_eq!(guard.resolve(), GuardDecision::RedirectToLogin);
    assert_eq!(guard.state(), SessionState::Anonymous);
}

#[tokio::test]
async fn test_guard_allows_after_login() {
    let ctx = TestContext::new().await;
    ctx.login().await;

    let guard = ctx.client.guard();
    match guard.resolve() {
        GuardDecision::Allow(user) => assert_eq!(user.display_name(), "Ana Reis"),
        GuardDecision::RedirectToLogin => panic!("expected allow for a logged-in session"),
    }
}

#[tokio::test]
async fn test_fresh_guard_sees_logout() {
    let ctx = TestContext::new().await;
    ctx.login().await;

    let before = ctx.client.guard();
    assert!(matches!(before.resolve(), GuardDecision::Allow(_)));

    ctx.client.auth().logout();

    let after = ctx.client.guard();
    assert_eq!(after.resolve(), GuardDecision::RedirectToLogin);
}
