//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `TIENDA_API_BASE_URL` - Base URL of the remote storefront API
//!
//! ## Optional
//! - `TIENDA_HTTP_TIMEOUT_SECS` - Request timeout (default: 30)
//! - `TIENDA_PAGE_SIZE` - Default catalog page size (default: 12)
//! - `TIENDA_SESSION_FILE` - Path of the durable session store

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the remote API, e.g. `https://shop.example.com`
    pub api_base_url: Url,
    /// Per-request timeout
    pub timeout: Duration,
    /// Default page size for catalog listings
    pub default_page_size: u32,
    /// Path of the durable session store, when one is configured
    pub session_file: Option<PathBuf>,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or
    /// unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let api_base_url = get_required_env("TIENDA_API_BASE_URL")?
            .parse::<Url>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("TIENDA_API_BASE_URL".to_string(), e.to_string())
            })?;

        let timeout_secs = get_env_or_default("TIENDA_HTTP_TIMEOUT_SECS", "30")
            .parse::<u64>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("TIENDA_HTTP_TIMEOUT_SECS".to_string(), e.to_string())
            })?;

        let default_page_size = get_env_or_default("TIENDA_PAGE_SIZE", "12")
            .parse::<u32>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("TIENDA_PAGE_SIZE".to_string(), e.to_string())
            })?;

        let session_file = get_optional_env("TIENDA_SESSION_FILE").map(PathBuf::from);

        Ok(Self {
            api_base_url,
            timeout: Duration::from_secs(timeout_secs),
            default_page_size,
            session_file,
        })
    }

    /// Configuration for a given base URL with defaults everywhere else.
    #[must_use]
    pub fn for_base_url(api_base_url: Url) -> Self {
        Self {
            api_base_url,
            timeout: Duration::from_secs(30),
            default_page_size: 12,
            session_file: None,
        }
    }
}

fn get_required_env(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn get_env_or_default(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn get_optional_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}
