//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `NEXT_PUBLIC_API_URL` - API root, e.g. `https://api.example.com/api`
//!
//! ## Optional
//! - `NEXT_PUBLIC_TENANT_ID` - Tenant scope sent as `x-tenant-id` (default: 1)
//! - `API_CACHE_TTL_SECS` - Query cache time-to-live (default: 300)
//! - `API_CACHE_MAX_CAPACITY` - Maximum cached queries (default: 1000)

use std::time::Duration;

use reqwest::header::HeaderValue;
use thiserror::Error;
use url::Url;

/// Tenant scope used when `NEXT_PUBLIC_TENANT_ID` is unset.
pub const DEFAULT_TENANT_ID: &str = "1";

const DEFAULT_CACHE_TTL_SECS: u64 = 300;
const DEFAULT_CACHE_MAX_CAPACITY: u64 = 1000;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// API client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API root without a trailing slash
    pub api_url: String,
    /// Value of the `x-tenant-id` header
    pub tenant_id: String,
    /// How long a cached query stays fresh
    pub cache_ttl: Duration,
    /// Maximum number of cached queries
    pub cache_max_capacity: u64,
}

impl ClientConfig {
    /// Build a configuration for `api_url` with default tenant and cache settings.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `api_url` is not an absolute http(s) URL.
    pub fn new(api_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            api_url: normalize_api_url("NEXT_PUBLIC_API_URL", api_url)?,
            tenant_id: DEFAULT_TENANT_ID.to_string(),
            cache_ttl: Duration::from_secs(DEFAULT_CACHE_TTL_SECS),
            cache_max_capacity: DEFAULT_CACHE_MAX_CAPACITY,
        })
    }

    /// Override the tenant scope.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the tenant cannot be sent as a header value.
    pub fn with_tenant_id(mut self, tenant_id: &str) -> Result<Self, ConfigError> {
        self.tenant_id = validate_tenant_id("NEXT_PUBLIC_TENANT_ID", tenant_id)?;
        Ok(self)
    }

    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_url = lookup("NEXT_PUBLIC_API_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("NEXT_PUBLIC_API_URL".to_string()))?;
        let api_url = normalize_api_url("NEXT_PUBLIC_API_URL", &api_url)?;

        let tenant_id = match lookup("NEXT_PUBLIC_TENANT_ID").filter(|v| !v.trim().is_empty()) {
            Some(value) => validate_tenant_id("NEXT_PUBLIC_TENANT_ID", &value)?,
            None => DEFAULT_TENANT_ID.to_string(),
        };

        let cache_ttl_secs = parse_or_default(&lookup, "API_CACHE_TTL_SECS", DEFAULT_CACHE_TTL_SECS)?;
        let cache_max_capacity =
            parse_or_default(&lookup, "API_CACHE_MAX_CAPACITY", DEFAULT_CACHE_MAX_CAPACITY)?;

        Ok(Self {
            api_url,
            tenant_id,
            cache_ttl: Duration::from_secs(cache_ttl_secs),
            cache_max_capacity,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse and validate the API root, dropping any trailing slash.
fn normalize_api_url(var_name: &str, raw: &str) -> Result<String, ConfigError> {
    let url = Url::parse(raw.trim())
        .map_err(|e| ConfigError::InvalidEnvVar(var_name.to_string(), e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            format!("unsupported scheme '{}'", url.scheme()),
        ));
    }

    Ok(url.as_str().trim_end_matches('/').to_string())
}

fn validate_tenant_id(var_name: &str, raw: &str) -> Result<String, ConfigError> {
    let value = raw.trim();
    HeaderValue::from_str(value)
        .map_err(|e| ConfigError::InvalidEnvVar(var_name.to_string(), e.to_string()))?;
    Ok(value.to_string())
}

fn parse_or_default(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: u64,
) -> Result<u64, ConfigError> {
    lookup(key).map_or(Ok(default), |value| {
        value
            .trim()
            .parse::<u64>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_only_api_url_is_set() {
        let config =
            ClientConfig::from_lookup(lookup(&[("NEXT_PUBLIC_API_URL", "https://api.test/api/")]))
                .unwrap();

        assert_eq!(config.api_url, "https://api.test/api");
        assert_eq!(config.tenant_id, "1");
        assert_eq!(config.cache_ttl, Duration::from_secs(300));
        assert_eq!(config.cache_max_capacity, 1000);
    }

    #[test]
    fn test_missing_api_url() {
        let result = ClientConfig::from_lookup(lookup(&[]));
        assert!(matches!(result, Err(ConfigError::MissingEnvVar(_))));
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let result = ClientConfig::from_lookup(lookup(&[("NEXT_PUBLIC_API_URL", "ftp://x")]));
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar(_, _))));
    }

    #[test]
    fn test_tenant_override() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("NEXT_PUBLIC_API_URL", "http://localhost:4000"),
            ("NEXT_PUBLIC_TENANT_ID", " 17 "),
        ]))
        .unwrap();
        assert_eq!(config.tenant_id, "17");
    }

    #[test]
    fn test_blank_tenant_falls_back_to_default() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("NEXT_PUBLIC_API_URL", "http://localhost:4000"),
            ("NEXT_PUBLIC_TENANT_ID", "  "),
        ]))
        .unwrap();
        assert_eq!(config.tenant_id, DEFAULT_TENANT_ID);
    }

    #[test]
    fn test_tenant_with_control_characters_is_rejected() {
        let result = ClientConfig::new("http://localhost:4000")
            .unwrap()
            .with_tenant_id("bad\nvalue");
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_cache_ttl() {
        let result = ClientConfig::from_lookup(lookup(&[
            ("NEXT_PUBLIC_API_URL", "http://localhost:4000"),
            ("API_CACHE_TTL_SECS", "five"),
        ]));
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar(key, _)) if key == "API_CACHE_TTL_SECS"));
    }
}
