//! Submission mutator: the one place where a validated form becomes a
//! network request, and a response becomes either a session or errors on
//! the form.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use validator::Validate;

use crate::api::client::AuthApi;
use crate::config::LANDING_ROUTE;
use crate::domain::User;
use crate::errors::AuthError;
use crate::forms::signin::SignInForm;
use crate::forms::signup::{SignUpStep, SignUpWizard};
use crate::services::navigator::Navigator;
use crate::session::SessionStore;

/// Result of one submit attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Token persisted, navigation to the landing route issued.
    Success(User),
    /// Server returned field errors; they are now on the form.
    Rejected,
    /// Unstructured failure; the form banner carries a generic message.
    Failed,
    /// Another submission is already in flight; this one was ignored.
    Pending,
    /// Local gate refused (sign-up only): passwords/policy not ready.
    NotReady,
}

/// RAII reset for the in-flight flag.
struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Wraps the HTTP call for both forms and owns the single-submission
/// policy: at most one request in flight per submitter, later attempts are
/// rejected so the UI can keep the submit control disabled.
pub struct Submitter {
    api: Arc<dyn AuthApi>,
    session: Arc<dyn SessionStore>,
    navigator: Arc<dyn Navigator>,
    in_flight: AtomicBool,
}

impl Submitter {
    pub fn new(
        api: Arc<dyn AuthApi>,
        session: Arc<dyn SessionStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            api,
            session,
            navigator,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Whether a submission is currently in flight (drives the disabled
    /// state of the submit control).
    pub fn is_pending(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    fn begin(&self) -> Option<InFlight<'_>> {
        self.in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .ok()
            .map(|_| InFlight(&self.in_flight))
    }

    /// Submit the registration wizard.
    ///
    /// The local gate re-checks the active step and `submit_ready()`;
    /// field rules are the caller's responsibility and are not re-run here.
    pub async fn submit_sign_up(&self, wizard: &mut SignUpWizard) -> SubmitOutcome {
        // Submission only exists on the security step.
        if wizard.step() != SignUpStep::Security || !wizard.submit_ready() {
            return SubmitOutcome::NotReady;
        }

        let payload = wizard.payload();
        if let Err(e) = payload.validate() {
            // The form gating should make this unreachable.
            tracing::error!("sign-up payload failed final validation: {}", e);
            return SubmitOutcome::NotReady;
        }

        let Some(_guard) = self.begin() else {
            tracing::debug!("sign-up ignored: submission already in flight");
            return SubmitOutcome::Pending;
        };

        wizard.form_mut().clear_banner();
        match self.api.sign_up(payload).await {
            Ok(auth) => {
                self.session.set_token(&auth.token);
                self.navigator.navigate(LANDING_ROUTE);
                tracing::info!(user_id = %auth.user.id, "sign-up succeeded");
                SubmitOutcome::Success(auth.user)
            }
            Err(AuthError::FieldErrors(errors)) => {
                wizard.form_mut().apply_server_errors(&errors);
                SubmitOutcome::Rejected
            }
            Err(e) => {
                wizard.form_mut().set_banner(e.banner_message());
                SubmitOutcome::Failed
            }
        }
    }

    /// Submit the sign-in form.
    pub async fn submit_sign_in(&self, form: &mut SignInForm) -> SubmitOutcome {
        let payload = form.payload();
        if let Err(e) = payload.validate() {
            tracing::error!("sign-in payload failed final validation: {}", e);
            return SubmitOutcome::NotReady;
        }

        let Some(_guard) = self.begin() else {
            tracing::debug!("sign-in ignored: submission already in flight");
            return SubmitOutcome::Pending;
        };

        form.form_mut().clear_banner();
        match self.api.sign_in(payload).await {
            Ok(auth) => {
                self.session.set_token(&auth.token);
                self.navigator.navigate(LANDING_ROUTE);
                tracing::info!(user_id = %auth.user.id, "sign-in succeeded");
                SubmitOutcome::Success(auth.user)
            }
            Err(AuthError::FieldErrors(errors)) => {
                form.form_mut().apply_server_errors(&errors);
                SubmitOutcome::Rejected
            }
            Err(e) => {
                form.form_mut().set_banner(e.banner_message());
                SubmitOutcome::Failed
            }
        }
    }
}
