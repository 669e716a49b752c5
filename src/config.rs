//! Configuration module for Mentora.

use serde::Deserialize;
use std::path::Path;

use crate::{MentoraError, Result};

/// Web server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port number to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// CORS allowed origins. Empty means permissive development mode.
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: vec![],
        }
    }
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file.
    #[serde(default = "default_db_path")]
    pub path: String,
}

fn default_db_path() -> String {
    "data/mentora.db".to_string()
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

/// Authentication configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// JWT signing secret. Must be set in production.
    #[serde(default)]
    pub jwt_secret: String,
    /// Bearer token expiry in days.
    #[serde(default = "default_token_expiry_days")]
    pub token_expiry_days: u64,
    /// Display name for the bootstrap admin account.
    #[serde(default = "default_admin_name")]
    pub admin_name: String,
    /// Email for the bootstrap admin account. Seeding is skipped when unset.
    #[serde(default)]
    pub admin_email: Option<String>,
    /// Password for the bootstrap admin account. Seeding is skipped when unset.
    #[serde(default)]
    pub admin_password: Option<String>,
}

fn default_token_expiry_days() -> u64 {
    30
}

fn default_admin_name() -> String {
    "Administrator".to_string()
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::new(),
            token_expiry_days: default_token_expiry_days(),
            admin_name: default_admin_name(),
            admin_email: None,
            admin_password: None,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Optional log file path. Console-only when unset.
    #[serde(default)]
    pub file: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Web server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Authentication settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        toml::from_str(&content).map_err(|e| MentoraError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.database.path, "data/mentora.db");
        assert_eq!(config.auth.token_expiry_days, 30);
        assert!(config.auth.admin_email.is_none());
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_parse_partial_config() {
        let toml_str = r#"
            [server]
            port = 3000

            [auth]
            jwt_secret = "super-secret"
            token_expiry_days = 7
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.auth.jwt_secret, "super-secret");
        assert_eq!(config.auth.token_expiry_days, 7);
        assert_eq!(config.database.path, "data/mentora.db");
    }

    #[test]
    fn test_parse_admin_bootstrap() {
        let toml_str = r#"
            [auth]
            jwt_secret = "s"
            admin_email = "admin@example.com"
            admin_password = "changeme123"
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.auth.admin_email.as_deref(), Some("admin@example.com"));
        assert_eq!(config.auth.admin_name, "Administrator");
    }

    #[test]
    fn test_load_missing_file() {
        let result = Config::load("does/not/exist.toml");
        assert!(result.is_err());
    }
}
