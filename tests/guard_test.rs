//! Auth guard tests: token presence gating, profile verification, and the
//! logged-out fallback on fetch failure.

use std::sync::Arc;

use chrono::Utc;
use mockall::predicate::eq;
use uuid::Uuid;

use smarthome_auth::api::MockAuthApi;
use smarthome_auth::config::SIGN_IN_ROUTE;
use smarthome_auth::domain::{User, UserRole};
use smarthome_auth::errors::AuthError;
use smarthome_auth::services::{AuthGuard, GuardDecision, MockNavigator};
use smarthome_auth::session::{MemoryStore, SessionStore};

mod support;

fn test_user() -> User {
    User {
        id: Uuid::new_v4(),
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        phone: "79123456789".to_string(),
        role: UserRole::User,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

#[tokio::test]
async fn missing_token_redirects_without_a_network_call() {
    support::init_tracing();
    // No expectations: a profile fetch would panic the mock.
    let api = MockAuthApi::new();
    let session = Arc::new(MemoryStore::new());
    let guard = AuthGuard::new(Arc::new(api), session);

    assert_eq!(guard.resolve().await, GuardDecision::Redirect(SIGN_IN_ROUTE));
}

#[tokio::test]
async fn valid_token_allows_with_the_fetched_profile() {
    let user = test_user();
    let fetched = user.clone();

    let mut api = MockAuthApi::new();
    api.expect_fetch_profile()
        .withf(|token| token == "abc")
        .times(1)
        .returning(move |_| Ok(fetched.clone()));

    let session = Arc::new(MemoryStore::new());
    session.set_token("abc");
    let guard = AuthGuard::new(Arc::new(api), session);

    assert_eq!(guard.resolve().await, GuardDecision::Allow(user));
}

#[tokio::test]
async fn rejected_token_is_cleared_and_redirects() {
    let mut api = MockAuthApi::new();
    api.expect_fetch_profile()
        .times(1)
        .returning(|_| Err(AuthError::Unauthorized));

    let session = Arc::new(MemoryStore::new());
    session.set_token("stale");
    let guard = AuthGuard::new(Arc::new(api), session.clone());

    assert_eq!(guard.resolve().await, GuardDecision::Redirect(SIGN_IN_ROUTE));
    // Stale token is gone so the next mount skips straight to sign-in.
    assert_eq!(session.token(), None);
}

#[tokio::test]
async fn resolve_and_redirect_drives_the_navigator() {
    let api = MockAuthApi::new();
    let session = Arc::new(MemoryStore::new());
    let guard = AuthGuard::new(Arc::new(api), session);

    let mut navigator = MockNavigator::new();
    navigator
        .expect_navigate()
        .with(eq(SIGN_IN_ROUTE))
        .times(1)
        .return_const(());

    assert_eq!(guard.resolve_and_redirect(&navigator).await, None);
}
