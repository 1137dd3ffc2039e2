//! Sign-in submission flow tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use mockall::predicate::eq;
use uuid::Uuid;

use smarthome_auth::api::types::{AuthResponse, SignInRequest, SignUpRequest};
use smarthome_auth::api::{AuthApi, MockAuthApi};
use smarthome_auth::config::{FIELD_EMAIL, FIELD_PASSWORD, GENERIC_ERROR_MSG, LANDING_ROUTE};
use smarthome_auth::domain::{User, UserRole};
use smarthome_auth::errors::{AuthError, AuthResult};
use smarthome_auth::services::{MockNavigator, NullNavigator, SubmitOutcome, Submitter};
use smarthome_auth::session::{MemoryStore, SessionStore};
use smarthome_auth::SignInForm;

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

fn filled_form() -> SignInForm {
    let mut form = SignInForm::new();
    form.form_mut().set(FIELD_EMAIL, "ada@example.com");
    form.form_mut().set(FIELD_PASSWORD, "Passw0rd");
    assert!(form.validate());
    form
}

#[tokio::test]
async fn successful_sign_in_persists_token_and_navigates_once() {
    support::init_tracing();
    let user = test_user();
    let response_user = user.clone();

    let mut api = MockAuthApi::new();
    api.expect_sign_in()
        .with(eq(SignInRequest {
            email: "ada@example.com".to_string(),
            password: "Passw0rd".to_string(),
        }))
        .times(1)
        .returning(move |_| {
            Ok(AuthResponse {
                token: "abc".to_string(),
                user: response_user.clone(),
            })
        });

    let mut navigator = MockNavigator::new();
    navigator
        .expect_navigate()
        .with(eq(LANDING_ROUTE))
        .times(1)
        .return_const(());

    let session = Arc::new(MemoryStore::new());
    let submitter = Submitter::new(Arc::new(api), session.clone(), Arc::new(navigator));

    let mut form = filled_form();
    let outcome = submitter.submit_sign_in(&mut form).await;

    assert_eq!(outcome, SubmitOutcome::Success(user));
    assert_eq!(session.token(), Some("abc".to_string()));
}

#[tokio::test]
async fn unstructured_failure_sets_generic_banner_only() {
    let mut api = MockAuthApi::new();
    api.expect_sign_in()
        .times(1)
        .returning(|_| Err(AuthError::api(500)));

    // No navigation expectation: any navigate call would panic the mock.
    let navigator = MockNavigator::new();

    let session = Arc::new(MemoryStore::new());
    let submitter = Submitter::new(Arc::new(api), session.clone(), Arc::new(navigator));

    let mut form = filled_form();
    let outcome = submitter.submit_sign_in(&mut form).await;

    assert_eq!(outcome, SubmitOutcome::Failed);
    assert_eq!(form.form().banner(), Some(GENERIC_ERROR_MSG));
    assert_eq!(form.form().error(FIELD_EMAIL), None);
    assert_eq!(session.token(), None);
}

#[tokio::test]
async fn invalid_credentials_surface_in_banner() {
    let mut api = MockAuthApi::new();
    api.expect_sign_in()
        .times(1)
        .returning(|_| Err(AuthError::Unauthorized));

    let session = Arc::new(MemoryStore::new());
    let submitter = Submitter::new(Arc::new(api), session, Arc::new(NullNavigator));

    let mut form = filled_form();
    let outcome = submitter.submit_sign_in(&mut form).await;

    assert_eq!(outcome, SubmitOutcome::Failed);
    assert_eq!(form.form().banner(), Some("Invalid credentials"));
}

/// Hand-rolled stub that parks in the request long enough for a second
/// submit attempt to arrive while the first is still in flight.
struct SlowApi {
    calls: AtomicUsize,
}

#[async_trait]
impl AuthApi for SlowApi {
    async fn sign_up(&self, _request: SignUpRequest) -> AuthResult<AuthResponse> {
        unimplemented!("not used in this test")
    }

    async fn sign_in(&self, _request: SignInRequest) -> AuthResult<AuthResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        Ok(AuthResponse {
            token: "abc".to_string(),
            user: test_user(),
        })
    }

    async fn fetch_profile(&self, _token: &str) -> AuthResult<User> {
        unimplemented!("not used in this test")
    }
}

#[tokio::test]
async fn second_submit_while_pending_is_ignored() {
    let api = Arc::new(SlowApi {
        calls: AtomicUsize::new(0),
    });
    let session = Arc::new(MemoryStore::new());
    let submitter = Submitter::new(api.clone(), session, Arc::new(NullNavigator));

    let mut first_form = filled_form();
    let mut second_form = filled_form();

    let (first, second) = tokio::join!(submitter.submit_sign_in(&mut first_form), async {
        // Let the first submission reach the network call.
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        submitter.submit_sign_in(&mut second_form).await
    });

    assert!(matches!(first, SubmitOutcome::Success(_)));
    assert_eq!(second, SubmitOutcome::Pending);
    assert_eq!(api.calls.load(Ordering::SeqCst), 1);
}
