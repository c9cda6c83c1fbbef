/**
 * Server Configuration
 *
 * This module loads and validates server configuration from environment
 * variables (a `.env` file is honored via dotenv in `main`).
 *
 * # Configuration Sources
 *
 * | Variable              | Required | Default                  |
 * |-----------------------|----------|--------------------------|
 * | DATABASE_URL          | yes      | -                        |
 * | ACCESS_TOKEN_SECRET   | yes      | -                        |
 * | REFRESH_TOKEN_SECRET  | yes      | -                        |
 * | MODEL_API_BASE_URL    | no       | http://localhost:8000    |
 * | PHOTOS_DIR            | no       | photos                   |
 * | SERVER_PORT           | no       | 3000                     |
 *
 * # Error Handling
 *
 * A missing required variable fails startup with `ConfigError`; the
 * server never runs with a fallback signing secret or without a user
 * store.
 */

use std::path::PathBuf;

use thiserror::Error;

/// Configuration loading failures
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is unset or empty
    #[error("missing required environment variable: {0}")]
    MissingVar(&'static str),

    /// A variable is present but not parseable
    #[error("invalid value for {name}: {value}")]
    InvalidVar { name: &'static str, value: String },
}

/// Application configuration, constructed once at startup and injected
/// into the application state
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Postgres connection string for the user store
    pub database_url: String,
    /// Signing secret for access tokens
    pub access_token_secret: String,
    /// Signing secret for refresh tokens (independent of the access secret)
    pub refresh_token_secret: String,
    /// Base URL of the external model service
    pub model_api_base_url: String,
    /// Root directory for materialized photo assets
    pub photos_dir: PathBuf,
    /// Listen port
    pub port: u16,
}

impl AppConfig {
    /// Load configuration from the environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if any required variable is missing or a
    /// value fails to parse. Startup must abort on this error.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = require_var("DATABASE_URL")?;
        let access_token_secret = require_var("ACCESS_TOKEN_SECRET")?;
        let refresh_token_secret = require_var("REFRESH_TOKEN_SECRET")?;

        let model_api_base_url = std::env::var("MODEL_API_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:8000".to_string());

        let photos_dir =
            PathBuf::from(std::env::var("PHOTOS_DIR").unwrap_or_else(|_| "photos".to_string()));

        let port = match std::env::var("SERVER_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidVar {
                    name: "SERVER_PORT",
                    value: raw,
                })?,
            Err(_) => 3000,
        };

        Ok(Self {
            database_url,
            access_token_secret,
            refresh_token_secret,
            model_api_base_url,
            photos_dir,
            port,
        })
    }
}

/// Read a required variable, treating empty values as missing
fn require_var(name: &'static str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(ConfigError::MissingVar(name)),
    }
}
