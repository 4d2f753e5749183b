use std::time::Duration;

use crate::retry::{RetryPolicy, DEFAULT_MAX_ATTEMPTS};

/// Default base URL of the inscriptions index.
pub const DEFAULT_API_BASE_URL: &str = "https://api.hiro.so/ordinals/v1";

/// Default per-request upstream timeout in seconds.
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;

/// Configuration for talking to the remote inscriptions index.
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// Base URL without a trailing slash, e.g. `https://api.hiro.so/ordinals/v1`.
    pub base_url: String,
    /// Timeout applied to every outbound request, content proxy included.
    pub request_timeout: Duration,
    /// Attempt ceiling and backoff for page requests.
    pub retry: RetryPolicy,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS),
            retry: RetryPolicy::default(),
        }
    }
}

impl ApiClientConfig {
    /// Load upstream configuration from environment variables.
    ///
    /// | Env Var                 | Default                            |
    /// |-------------------------|------------------------------------|
    /// | `HIRO_API_BASE_URL`     | `https://api.hiro.so/ordinals/v1`  |
    /// | `UPSTREAM_TIMEOUT_SECS` | `30`                               |
    /// | `MAX_RETRIES`           | `3`                                |
    ///
    /// # Panics
    ///
    /// Panics if a numeric variable does not parse.
    pub fn from_env() -> Self {
        let base_url = std::env::var("HIRO_API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_API_BASE_URL.into());

        let timeout_secs: u64 = std::env::var("UPSTREAM_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_UPSTREAM_TIMEOUT_SECS.to_string())
            .parse()
            .expect("UPSTREAM_TIMEOUT_SECS must be a valid u64");

        let max_attempts: u32 = std::env::var("MAX_RETRIES")
            .unwrap_or_else(|_| DEFAULT_MAX_ATTEMPTS.to_string())
            .parse()
            .expect("MAX_RETRIES must be a valid u32");

        Self {
            base_url: normalize_base_url(&base_url),
            request_timeout: Duration::from_secs(timeout_secs),
            retry: RetryPolicy {
                max_attempts,
                ..Default::default()
            },
        }
    }
}

/// Strip surrounding whitespace and trailing slashes.
pub fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
