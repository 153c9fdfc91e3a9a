//! # Configuration Management for Publistore
//!
//! This crate provides the centralized configuration structure for the
//! publistore client: the Supabase project URL and the anonymous-scope API
//! key used to reach the PostgREST endpoint.
//!
//! ## Quick Start
//!
//! ### Programmatic Configuration
//! ```rust
//! use config::SupabaseConfig;
//!
//! let supabase_config = SupabaseConfig::new(
//!     "https://myproject.supabase.co".to_string(),
//!     "my-anon-key".to_string(),
//! );
//! ```
//!
//! ### TOML File Configuration
//! ```toml
//! [supabase]
//! project_url = "https://myproject.supabase.co"
//! anon_key = "my-anon-key"
//! ```
//!
//! Load configuration:
//! ```rust,no_run
//! use config::AppConfig;
//!
//! // Load from publistore.toml, .env, or environment
//! let config = AppConfig::load()?;
//!
//! // Or load from custom path
//! let config = AppConfig::from_file("config/production.toml")?;
//! # Ok::<(), config::ConfigError>(())
//! ```
//!
//! The environment fallback reads `SUPABASE_URL` and `SUPABASE_ANON_KEY`,
//! the same variables the original deployment used.

use serde::{Deserialize, Serialize};
use std::{env, path::Path};
use thiserror::Error;

const DEFAULT_CONFIG_PATH: &str = "./publistore.toml";

const ENV_PROJECT_URL: &str = "SUPABASE_URL";
const ENV_ANON_KEY: &str = "SUPABASE_ANON_KEY";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Environment variable error: {0}")]
    Env(#[from] env::VarError),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub supabase: SupabaseConfig,
}

/// Supabase connection configuration
///
/// The anon key carries only the permissions granted by the server-side
/// row-level security policies; it is safe to ship to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupabaseConfig {
    pub project_url: String,
    pub anon_key: String,
}

impl AppConfig {
    /// Load configuration from a TOML file or the environment.
    ///
    /// Resolution order:
    /// 1. path named by the `PUBLISTORE_CONFIG` environment variable
    /// 2. `./publistore.toml` if it exists
    /// 3. `SUPABASE_URL` / `SUPABASE_ANON_KEY` environment variables
    ///
    /// A `.env` file in the working directory is read first when present.
    pub fn load() -> Result<Self, ConfigError> {
        // Missing .env is fine; variables may come from the real environment
        let _ = dotenvy::dotenv();

        let config = if let Ok(config_path) = env::var("PUBLISTORE_CONFIG") {
            Self::from_file(&config_path)
        } else if Path::new(DEFAULT_CONFIG_PATH).exists() {
            Self::from_file(DEFAULT_CONFIG_PATH)
        } else {
            Self::from_env()
        }?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from `SUPABASE_URL` / `SUPABASE_ANON_KEY`
    pub fn from_env() -> Result<Self, ConfigError> {
        let project_url = env::var(ENV_PROJECT_URL)
            .map_err(|_| ConfigError::Invalid(format!("{ENV_PROJECT_URL} must be set")))?;
        let anon_key = env::var(ENV_ANON_KEY)
            .map_err(|_| ConfigError::Invalid(format!("{ENV_ANON_KEY} must be set")))?;

        let config = Self {
            supabase: SupabaseConfig::new(project_url, anon_key),
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    fn validate(&self) -> Result<(), ConfigError> {
        if self.supabase.project_url.is_empty() {
            return Err(ConfigError::Invalid(
                "Supabase project URL cannot be empty".to_string(),
            ));
        }
        if !self.supabase.project_url.starts_with("http://")
            && !self.supabase.project_url.starts_with("https://")
        {
            return Err(ConfigError::Invalid(
                "Supabase project URL must use http or https".to_string(),
            ));
        }
        if self.supabase.anon_key.is_empty() {
            return Err(ConfigError::Invalid(
                "Supabase anon key cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

impl SupabaseConfig {
    /// Create a new Supabase configuration
    pub fn new(project_url: String, anon_key: String) -> Self {
        Self {
            project_url,
            anon_key,
        }
    }

    /// Base URL of the PostgREST endpoint for this project
    pub fn rest_url(&self) -> String {
        format!("{}/rest/v1", self.project_url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> AppConfig {
        AppConfig {
            supabase: SupabaseConfig::new(
                "https://myproject.supabase.co".to_string(),
                "anon-key".to_string(),
            ),
        }
    }

    #[test]
    fn test_validate_accepts_valid_config() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_url() {
        let mut config = valid_config();
        config.supabase.project_url = String::new();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_validate_rejects_non_http_url() {
        let mut config = valid_config();
        config.supabase.project_url = "ftp://myproject.supabase.co".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_validate_rejects_empty_key() {
        let mut config = valid_config();
        config.supabase.anon_key = String::new();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_rest_url_strips_trailing_slash() {
        let config = SupabaseConfig::new(
            "https://myproject.supabase.co/".to_string(),
            "anon-key".to_string(),
        );
        assert_eq!(config.rest_url(), "https://myproject.supabase.co/rest/v1");
    }

    #[test]
    fn test_from_toml() {
        let toml_str = r#"
            [supabase]
            project_url = "https://myproject.supabase.co"
            anon_key = "anon-key"
        "#;
        let config: AppConfig = toml::from_str(toml_str).expect("parse");
        assert_eq!(config.supabase.anon_key, "anon-key");
    }
}
