//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional; defaults point at the public Fake Store
//! API and a locally running backend.
//!
//! - `POCKETMART_CATALOG_URL` - Product catalog base URL
//!   (default: `https://fakestoreapi.com`)
//! - `POCKETMART_BACKEND_URL` - Orders/auth backend base URL
//!   (default: `http://localhost:3000`)
//! - `POCKETMART_SESSION_PATH` - Path of the session file
//!   (default: `$HOME/.pocketmart/session.json`)

use std::path::PathBuf;

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

/// Client application configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the public product catalog.
    pub catalog_url: Url,
    /// Base URL of the private orders/auth backend.
    pub backend_url: Url,
    /// Where the persisted session file lives.
    pub session_path: PathBuf,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a URL variable is set but unparsable, or
    /// if no session path can be derived (no override and no `$HOME`).
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let catalog_url = get_url_or_default("POCKETMART_CATALOG_URL", "https://fakestoreapi.com")?;
        let backend_url = get_url_or_default("POCKETMART_BACKEND_URL", "http://localhost:3000")?;
        let session_path = get_session_path("POCKETMART_SESSION_PATH")?;

        Ok(Self {
            catalog_url,
            backend_url,
            session_path,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Get a URL environment variable with a default, validated.
fn get_url_or_default(key: &str, default: &str) -> Result<Url, ConfigError> {
    let raw = get_env_or_default(key, default);
    Url::parse(&raw).map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

/// Resolve the session file path: explicit override, else under `$HOME`.
fn get_session_path(key: &str) -> Result<PathBuf, ConfigError> {
    if let Ok(value) = std::env::var(key) {
        return Ok(PathBuf::from(value));
    }
    let home = std::env::var("HOME")
        .map_err(|_| ConfigError::MissingEnvVar(format!("{key} (and HOME is unset)")))?;
    Ok(PathBuf::from(home).join(".pocketmart").join("session.json"))
}
