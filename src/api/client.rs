//! HTTP client for the remote authentication API.
//!
//! `AuthApi` is the seam the submitter and the guard depend on; the reqwest
//! implementation below is the only place that knows about endpoints,
//! status codes and response bodies.

use async_trait::async_trait;
#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;
use reqwest::{Response, StatusCode};

use crate::api::types::{AuthResponse, ServerValidationErrors, SignInRequest, SignUpRequest};
use crate::config::{Config, BEARER_TOKEN_PREFIX, LOGIN_PATH, PROFILE_PATH, SIGNUP_PATH};
use crate::domain::User;
use crate::errors::{AuthError, AuthResult};

/// Remote authentication API contract.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// `POST /auth/signup`
    async fn sign_up(&self, request: SignUpRequest) -> AuthResult<AuthResponse>;

    /// `POST /auth/login`
    async fn sign_in(&self, request: SignInRequest) -> AuthResult<AuthResponse>;

    /// `GET /profile` with the stored token attached.
    async fn fetch_profile(&self, token: &str) -> AuthResult<User>;
}

/// reqwest-backed implementation of [`AuthApi`].
#[derive(Debug, Clone)]
pub struct HttpAuthApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpAuthApi {
    /// Build a client from configuration. Fails only on a broken TLS or
    /// system configuration.
    pub fn new(config: &Config) -> AuthResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(AuthError::Transport)?;
        Ok(Self {
            http,
            base_url: config.api_base_url.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Decode a 2xx body as `T`, keeping the serde error for the log.
    async fn decode<T: serde::de::DeserializeOwned>(response: Response) -> AuthResult<T> {
        let body = response.text().await.map_err(AuthError::Transport)?;
        serde_json::from_str(&body).map_err(AuthError::Decode)
    }

    /// Map a non-2xx response onto the error taxonomy: structured `errors`
    /// bodies become field errors, 401 becomes `Unauthorized`, everything
    /// else is an opaque API failure.
    async fn failure(response: Response) -> AuthError {
        let status = response.status();
        if status.is_client_error() {
            if let Ok(body) = response.json::<ServerValidationErrors>().await {
                return AuthError::FieldErrors(body.errors);
            }
        }
        if status == StatusCode::UNAUTHORIZED {
            return AuthError::Unauthorized;
        }
        AuthError::api(status.as_u16())
    }

    async fn post_auth(&self, path: &str, body: &impl serde::Serialize) -> AuthResult<AuthResponse> {
        let response = self
            .http
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(AuthError::Transport)?;

        let status = response.status();
        tracing::debug!(path, status = status.as_u16(), "auth request completed");

        if status.is_success() {
            Self::decode(response).await
        } else {
            Err(Self::failure(response).await)
        }
    }
}

#[async_trait]
impl AuthApi for HttpAuthApi {
    async fn sign_up(&self, request: SignUpRequest) -> AuthResult<AuthResponse> {
        self.post_auth(SIGNUP_PATH, &request).await
    }

    async fn sign_in(&self, request: SignInRequest) -> AuthResult<AuthResponse> {
        self.post_auth(LOGIN_PATH, &request).await
    }

    async fn fetch_profile(&self, token: &str) -> AuthResult<User> {
        let response = self
            .http
            .get(self.url(PROFILE_PATH))
            .header(
                reqwest::header::AUTHORIZATION,
                format!("{BEARER_TOKEN_PREFIX}{token}"),
            )
            .send()
            .await
            .map_err(AuthError::Transport)?;

        let status = response.status();
        tracing::debug!(status = status.as_u16(), "profile fetch completed");

        if status.is_success() {
            Self::decode(response).await
        } else if status == StatusCode::UNAUTHORIZED {
            Err(AuthError::Unauthorized)
        } else {
            Err(AuthError::api(status.as_u16()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_join_without_double_slash() {
        let api = HttpAuthApi::new(&Config::default()).unwrap();
        assert_eq!(api.url(SIGNUP_PATH), "http://localhost:3000/auth/signup");
        assert_eq!(api.url(PROFILE_PATH), "http://localhost:3000/profile");
    }
}
