//! Application settings loaded from environment variables.

use std::env;

use super::constants::{DEFAULT_MONGODB_DATABASE, DEFAULT_MONGODB_URL};

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub mongodb_url: String,
    pub mongodb_database: String,
    pub mongodb_app_name: Option<String>,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("mongodb_url", &"[REDACTED]")
            .field("mongodb_database", &self.mongodb_database)
            .field("mongodb_app_name", &self.mongodb_app_name)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mongodb_url: DEFAULT_MONGODB_URL.to_string(),
            mongodb_database: DEFAULT_MONGODB_DATABASE.to_string(),
            mongodb_app_name: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables (and `.env` if present).
    ///
    /// Server host and port are read by the `serve` command's arguments.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Missing or unparsable values fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            mongodb_url: lookup("MONGODB_URL").unwrap_or(defaults.mongodb_url),
            mongodb_database: lookup("MONGODB_DATABASE").unwrap_or(defaults.mongodb_database),
            mongodb_app_name: lookup("MONGODB_APP_NAME"),
        }
    }
}
