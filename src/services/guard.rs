//! Auth guard for protected routes.

use std::sync::Arc;

use crate::api::client::AuthApi;
use crate::config::SIGN_IN_ROUTE;
use crate::domain::User;
use crate::services::navigator::Navigator;
use crate::session::SessionStore;

/// Outcome of a guard check for a protected view.
#[derive(Debug, Clone, PartialEq)]
pub enum GuardDecision {
    /// Session verified; render the protected children for this user.
    Allow(User),
    /// No usable session; send the visitor to the given route.
    Redirect(&'static str),
}

/// Gates a protected route on a stored, still-valid session token.
///
/// The token check is synchronous and happens before anything protected is
/// shown; only when a token exists does the guard spend a profile fetch on
/// verifying it. A failed fetch (expired or revoked token) clears the slot
/// and redirects rather than looping on a loading state.
pub struct AuthGuard {
    api: Arc<dyn AuthApi>,
    session: Arc<dyn SessionStore>,
}

impl AuthGuard {
    pub fn new(api: Arc<dyn AuthApi>, session: Arc<dyn SessionStore>) -> Self {
        Self { api, session }
    }

    /// Resolve the guard for one mount of a protected view.
    pub async fn resolve(&self) -> GuardDecision {
        let Some(token) = self.session.token() else {
            tracing::debug!("no session token, redirecting to sign-in");
            return GuardDecision::Redirect(SIGN_IN_ROUTE);
        };

        match self.api.fetch_profile(&token).await {
            Ok(user) => {
                tracing::debug!(user_id = %user.id, "session verified");
                GuardDecision::Allow(user)
            }
            Err(e) => {
                tracing::warn!("profile fetch failed, treating as logged out: {}", e);
                self.session.clear();
                GuardDecision::Redirect(SIGN_IN_ROUTE)
            }
        }
    }

    /// Convenience: resolve and, on redirect, drive the navigator.
    pub async fn resolve_and_redirect(&self, navigator: &dyn Navigator) -> Option<User> {
        match self.resolve().await {
            GuardDecision::Allow(user) => Some(user),
            GuardDecision::Redirect(route) => {
                navigator.navigate(route);
                None
            }
        }
    }
}
