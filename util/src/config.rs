//! Global application configuration.
//!
//! `AppConfig` is loaded once from the environment (after reading an optional
//! `.env` file) and then shared read-only for the rest of the process. The
//! free functions at the bottom of this module are shorthands over
//! [`AppConfig::global`].

use std::env;
use std::sync::OnceLock;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("{key} has an invalid value: {value}")]
    Invalid { key: &'static str, value: String },
}

/// Represents the complete application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub project_name: String,
    pub log_level: String,
    pub log_file: String,
    pub log_to_stdout: bool,
    pub mongodb_uri: String,
    pub database_name: String,
    pub host: String,
    pub port: u16,
}

static CONFIG_INSTANCE: OnceLock<AppConfig> = OnceLock::new();

impl AppConfig {
    /// Reads `.env` (if present) and builds the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// `MONGODB_URI` is the only required key. Everything else has a default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.into());

        let mongodb_uri = lookup("MONGODB_URI")
            .filter(|uri| !uri.trim().is_empty())
            .ok_or(ConfigError::Missing("MONGODB_URI"))?;

        let port_raw = or("PORT", "3000");
        let port = port_raw.parse().map_err(|_| ConfigError::Invalid {
            key: "PORT",
            value: port_raw.clone(),
        })?;

        Ok(Self {
            env: or("APP_ENV", "development"),
            project_name: or("PROJECT_NAME", "absensi-api"),
            log_level: or("LOG_LEVEL", "api=info,db=info,services=info"),
            log_file: or("LOG_FILE", "api.log"),
            log_to_stdout: or("LOG_TO_STDOUT", "false") == "true",
            mongodb_uri,
            database_name: or("DATABASE_NAME", "absensi"),
            host: or("HOST", "127.0.0.1"),
            port,
        })
    }

    /// Loads the configuration into the process-wide slot.
    ///
    /// Calling this more than once returns the instance stored by the first successful call.
    pub fn init() -> Result<&'static AppConfig, ConfigError> {
        if let Some(cfg) = CONFIG_INSTANCE.get() {
            return Ok(cfg);
        }
        let cfg = Self::from_env()?;
        Ok(CONFIG_INSTANCE.get_or_init(|| cfg))
    }

    /// Returns the global configuration.
    ///
    /// # Panics
    /// Panics if [`AppConfig::init`] has not completed successfully.
    pub fn global() -> &'static AppConfig {
        CONFIG_INSTANCE
            .get()
            .expect("AppConfig::init must run before AppConfig::global")
    }
}

pub fn env() -> String {
    AppConfig::global().env.clone()
}

pub fn project_name() -> String {
    AppConfig::global().project_name.clone()
}

pub fn log_level() -> String {
    AppConfig::global().log_level.clone()
}

pub fn log_file() -> String {
    AppConfig::global().log_file.clone()
}

pub fn log_to_stdout() -> bool {
    AppConfig::global().log_to_stdout
}

pub fn mongodb_uri() -> String {
    AppConfig::global().mongodb_uri.clone()
}

pub fn database_name() -> String {
    AppConfig::global().database_name.clone()
}

pub fn host() -> String {
    AppConfig::global().host.clone()
}

pub fn port() -> u16 {
    AppConfig::global().port
}
