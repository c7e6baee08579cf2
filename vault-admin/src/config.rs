//! Client configuration.
//!
//! Endpoint and timeout settings for the admin backend, loaded from
//! environment variables with defaults suitable for local development.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Missing required environment variable.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Invalid configuration value.
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue {
        /// Configuration key.
        key: String,
        /// Error message.
        message: String,
    },
}

/// Configuration for the admin backend client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminConfig {
    /// Admin backend endpoint.
    pub endpoint: ServiceEndpoint,

    /// Default request timeout in seconds.
    pub default_timeout_secs: u64,
}

impl Default for AdminConfig {
    /// Returns default configuration suitable for local development.
    fn default() -> Self {
        Self {
            endpoint: ServiceEndpoint {
                base_url: "http://localhost:8080".to_string(),
                api_key: None,
            },
            default_timeout_secs: 30,
        }
    }
}

impl AdminConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `ADMIN_API_URL`: Admin backend URL (default: http://localhost:8080)
    /// - `ADMIN_API_KEY`: Admin backend API key
    /// - `ADMIN_TIMEOUT_SECS`: Request timeout in seconds (default: 30)
    pub fn from_env() -> Self {
        let default = Self::default();

        Self {
            endpoint: ServiceEndpoint {
                base_url: std::env::var("ADMIN_API_URL").unwrap_or(default.endpoint.base_url),
                api_key: std::env::var("ADMIN_API_KEY").ok(),
            },
            default_timeout_secs: std::env::var("ADMIN_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(default.default_timeout_secs),
        }
    }

    /// Get the default request timeout as a Duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.default_timeout_secs)
    }

    /// Validate that all required configuration is present for production.
    ///
    /// In production, an API key must be configured.
    pub fn validate_for_production(&self) -> Result<(), ConfigError> {
        if self.endpoint.api_key.is_none() {
            return Err(ConfigError::MissingEnvVar("ADMIN_API_KEY".to_string()));
        }
        Ok(())
    }
}

/// Configuration for the admin backend endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceEndpoint {
    /// Base URL for the backend (e.g., "https://admin.xcryptovault.com").
    pub base_url: String,

    /// API key for service authentication.
    pub api_key: Option<String>,
}

impl ServiceEndpoint {
    /// Build a full URL by appending a path to the base URL.
    pub fn url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Check if API key authentication is available.
    pub fn has_auth(&self) -> bool {
        self.api_key.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AdminConfig::default();
        assert_eq!(config.endpoint.base_url, "http://localhost:8080");
        assert_eq!(config.default_timeout_secs, 30);
        assert!(!config.endpoint.has_auth());
    }

    #[test]
    fn test_endpoint_url() {
        let endpoint = ServiceEndpoint {
            base_url: "https://admin.xcryptovault.com".to_string(),
            api_key: None,
        };

        assert_eq!(
            endpoint.url("/admin/users"),
            "https://admin.xcryptovault.com/admin/users"
        );
        assert_eq!(
            endpoint.url("admin/users"),
            "https://admin.xcryptovault.com/admin/users"
        );
    }

    #[test]
    fn test_endpoint_url_trailing_slash() {
        let endpoint = ServiceEndpoint {
            base_url: "https://admin.xcryptovault.com/".to_string(),
            api_key: None,
        };

        assert_eq!(
            endpoint.url("/admin/audit"),
            "https://admin.xcryptovault.com/admin/audit"
        );
    }

    #[test]
    fn test_validate_for_production() {
        let mut config = AdminConfig::default();
        assert!(config.validate_for_production().is_err());

        config.endpoint.api_key = Some("key".to_string());
        assert!(config.validate_for_production().is_ok());
    }
}
