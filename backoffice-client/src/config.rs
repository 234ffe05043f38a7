//! Client configuration

use crate::variation::aggregate::LOW_STOCK_THRESHOLD;

/// Client configuration for the back-office REST API
///
/// # Environment variables
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | BACKOFFICE_API_URL | http://localhost:8080/api | API base URL |
/// | BACKOFFICE_API_TOKEN | (none) | Bearer token |
/// | BACKOFFICE_TIMEOUT_SECS | 30 | Request timeout |
/// | BACKOFFICE_LOW_STOCK_THRESHOLD | 10 | Low-stock flag threshold |
/// | LOG_LEVEL | info | Log filter |
///
/// A `.env` file in the working directory is loaded first.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:8080/api")
    pub base_url: String,

    /// Bearer token for authentication
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Total stock at or below this is flagged as low stock
    pub low_stock_threshold: i64,

    /// Log filter passed to the logger
    pub log_level: String,
}

impl ClientConfig {
    /// Create a new client configuration with defaults
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: 30,
            low_stock_threshold: LOW_STOCK_THRESHOLD,
            log_level: "info".to_string(),
        }
    }

    /// Load configuration from environment variables
    ///
    /// Unset or unparsable variables fall back to defaults.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build a configuration from a variable lookup
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            base_url: var("BACKOFFICE_API_URL").unwrap_or(defaults.base_url),
            token: var("BACKOFFICE_API_TOKEN").filter(|t| !t.trim().is_empty()),
            timeout: var("BACKOFFICE_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.timeout),
            low_stock_threshold: var("BACKOFFICE_LOW_STOCK_THRESHOLD")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.low_stock_threshold),
            log_level: var("LOG_LEVEL").unwrap_or(defaults.log_level),
        }
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Set the low-stock threshold
    pub fn with_low_stock_threshold(mut self, threshold: i64) -> Self {
        self.low_stock_threshold = threshold;
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> crate::ClientResult<crate::NetworkHttpClient> {
        crate::NetworkHttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8080/api")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout, 30);
        assert_eq!(config.low_stock_threshold, 10);
        assert!(config.token.is_none());
    }

    #[test]
    fn test_builder_overrides() {
        let config = ClientConfig::new("http://shop.test/api")
            .with_token("abc")
            .with_timeout(5)
            .with_low_stock_threshold(3);
        assert_eq!(config.base_url, "http://shop.test/api");
        assert_eq!(config.token.as_deref(), Some("abc"));
        assert_eq!(config.timeout, 5);
        assert_eq!(config.low_stock_threshold, 3);
    }

    #[test]
    fn test_vars_override_defaults() {
        let vars: HashMap<&str, &str> = [
            ("BACKOFFICE_API_URL", "https://shop.test/api"),
            ("BACKOFFICE_API_TOKEN", "tok"),
            ("BACKOFFICE_TIMEOUT_SECS", "7"),
            ("BACKOFFICE_LOW_STOCK_THRESHOLD", "25"),
            ("LOG_LEVEL", "debug"),
        ]
        .into_iter()
        .collect();

        let config = ClientConfig::from_vars(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(config.base_url, "https://shop.test/api");
        assert_eq!(config.token.as_deref(), Some("tok"));
        assert_eq!(config.timeout, 7);
        assert_eq!(config.low_stock_threshold, 25);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_bad_vars_fall_back() {
        let vars: HashMap<&str, &str> = [
            ("BACKOFFICE_API_TOKEN", "  "),
            ("BACKOFFICE_TIMEOUT_SECS", "soon"),
            ("BACKOFFICE_LOW_STOCK_THRESHOLD", "-"),
        ]
        .into_iter()
        .collect();

        let config = ClientConfig::from_vars(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(config.base_url, "http://localhost:8080/api");
        assert!(config.token.is_none());
        assert_eq!(config.timeout, 30);
        assert_eq!(config.low_stock_threshold, 10);
        assert_eq!(config.log_level, "info");
    }
}
