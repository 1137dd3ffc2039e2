//! Client settings loaded from environment variables.

use std::env;
use std::time::Duration;

use super::constants::{DEFAULT_API_BASE_URL, DEFAULT_REQUEST_TIMEOUT_SECS};

/// Client configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Base URL of the remote authentication API
    pub api_base_url: String,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// development defaults.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let api_base_url = env::var("SMARTHOME_API_URL").unwrap_or_else(|_| {
            tracing::debug!("SMARTHOME_API_URL not set, using development default");
            DEFAULT_API_BASE_URL.to_string()
        });

        Self {
            // Trailing slash would double up when joining endpoint paths
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            request_timeout_secs: env::var("SMARTHOME_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }

    /// Per-request timeout as a [`Duration`].
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_points_at_dev_backend() {
        let config = Config::default();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
    }
}
