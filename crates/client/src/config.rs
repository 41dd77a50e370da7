//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `ATELIER_API_URL` - Base URL of the CMS backend
//!   (default: `http://localhost:5001/api`)
//! - `ATELIER_SESSION_PATH` - Path of the persisted session blob
//!   (default: `.atelier-session.json`)

use std::path::PathBuf;

use thiserror::Error;
use url::Url;

/// Default backend base URL for local development.
pub const DEFAULT_API_URL: &str = "http://localhost:5001/api";

/// Default location of the persisted session blob.
pub const DEFAULT_SESSION_PATH: &str = ".atelier-session.json";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("invalid API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the CMS backend; resource paths are appended to it.
    pub api_url: Url,
    /// Where the session blob is persisted.
    pub session_path: PathBuf,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from a `.env` file if present.
    /// Every variable has a local-development default.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `ATELIER_API_URL` is set but not a valid
    /// absolute URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let api_url = get_env_or_default("ATELIER_API_URL", DEFAULT_API_URL);
        let session_path = get_env_or_default("ATELIER_SESSION_PATH", DEFAULT_SESSION_PATH);

        Self::new(&api_url, PathBuf::from(session_path))
    }

    /// Build a configuration from explicit values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `api_url` is not a valid absolute URL.
    pub fn new(api_url: &str, session_path: PathBuf) -> Result<Self, ConfigError> {
        let api_url = Url::parse(api_url)?;
        if api_url.cannot_be_a_base() {
            return Err(ConfigError::InvalidEnvVar(
                "ATELIER_API_URL".to_owned(),
                format!("{api_url} cannot be used as a base URL"),
            ));
        }

        Ok(Self {
            api_url,
            session_path,
        })
    }

    /// The base URL without a trailing slash, ready for path joining.
    #[must_use]
    pub fn base(&self) -> &str {
        self.api_url.as_str().trim_end_matches('/')
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid_url() {
        let config = ClientConfig::new("http://localhost:5001/api", PathBuf::from("s.json")).unwrap();
        assert_eq!(config.base(), "http://localhost:5001/api");
    }

    #[test]
    fn test_new_strips_trailing_slash() {
        let config =
            ClientConfig::new("http://localhost:5001/api/", PathBuf::from("s.json")).unwrap();
        assert_eq!(config.base(), "http://localhost:5001/api");
    }

    #[test]
    fn test_new_rejects_garbage() {
        assert!(ClientConfig::new("not a url", PathBuf::from("s.json")).is_err());
    }

    #[test]
    fn test_new_rejects_non_base_url() {
        assert!(ClientConfig::new("mailto:a@b.c", PathBuf::from("s.json")).is_err());
    }

    #[test]
    fn test_defaults_are_valid() {
        assert!(ClientConfig::new(DEFAULT_API_URL, PathBuf::from(DEFAULT_SESSION_PATH)).is_ok());
    }
}
