//! Remote admin API configuration.
//!
//! Clients of the Marketdesk service (the CLI, the HTTP-backed profile store
//! and the admin profile client) read their connection settings from here.
//!
//! # Environment Variables
//!
//! - `ADMIN_API_BASE_URL`: base URL of the admin API (default: `http://localhost:3000`)
//! - `ADMIN_TOKEN_KEY`: key under which the bearer token is stored
//!   (default: `marketdesk_admin_token`)
//! - `ADMIN_API_TIMEOUT_SECS`: per-request timeout (default: 10)

use std::env;
use std::time::Duration;

pub const DEFAULT_TOKEN_KEY: &str = "marketdesk_admin_token";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub token_key: String,
    pub timeout: Duration,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            base_url: env::var("ADMIN_API_BASE_URL")
                .map(|url| normalize_base_url(&url))
                .unwrap_or(defaults.base_url),
            token_key: env::var("ADMIN_TOKEN_KEY")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or(defaults.token_key),
            timeout: env::var("ADMIN_API_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
        }
    }

    /// Config pointing at `base_url` with every other setting defaulted.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: normalize_base_url(base_url),
            ..Self::default()
        }
    }

    /// Joins `path` (which must start with `/`) onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            token_key: DEFAULT_TOKEN_KEY.to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_strips_trailing_slash() {
        let config = ApiConfig::with_base_url("https://admin.example.com/");
        assert_eq!(
            config.endpoint("/api/admin/profile"),
            "https://admin.example.com/api/admin/profile"
        );
        assert_eq!(config.token_key, DEFAULT_TOKEN_KEY);
    }
}
