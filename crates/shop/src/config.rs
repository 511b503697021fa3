//! Shop configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `STONEFRUIT_API_BASE_URL` - Base URL of the backend API
//!
//! ## Optional
//! - `STONEFRUIT_STORAGE_DIR` - Directory for the local cart snapshot
//!   (default: `.stonefruit`)

use std::path::PathBuf;

use thiserror::Error;
use url::Url;

const DEFAULT_STORAGE_DIR: &str = ".stonefruit";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Shop application configuration.
#[derive(Debug, Clone)]
pub struct ShopConfig {
    /// Base URL of the backend API, without a trailing slash.
    pub api_base_url: String,
    /// Directory holding the local cart snapshot.
    pub storage_dir: PathBuf,
}

impl ShopConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the base URL is missing or does not parse
    /// as an absolute URL with a host.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let api_base_url = validate_base_url(
            "STONEFRUIT_API_BASE_URL",
            &get_required_env("STONEFRUIT_API_BASE_URL")?,
        )?;
        let storage_dir =
            PathBuf::from(get_env_or_default("STONEFRUIT_STORAGE_DIR", DEFAULT_STORAGE_DIR));

        Ok(Self {
            api_base_url,
            storage_dir,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Validate a base URL and normalize it (no trailing slash).
fn validate_base_url(var_name: &str, value: &str) -> Result<String, ConfigError> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::InvalidEnvVar(var_name.to_string(), e.to_string()))?;

    if url.host_str().is_none() {
        return Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            "URL must have a host".to_string(),
        ));
    }

    Ok(value.trim_end_matches('/').to_string())
}
