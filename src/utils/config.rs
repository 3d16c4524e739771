//! TOML-based configuration for Dugout
//!
//! Infrastructure configuration (server address, auth, database) is loaded
//! once at startup from a TOML file (`dugout.toml`). Secrets are never kept
//! in the file itself; the file names the environment variable that holds
//! them, and resolution happens at load time.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Root configuration structure loaded from dugout.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DugoutConfig {
    #[serde(default)]
    pub server: ServerConfig,

    pub auth: AuthConfig,

    #[serde(default)]
    pub database: DatabaseConfig,
}

// ============= Server Configuration =============

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
        }
    }
}

// ============= Authentication Configuration =============

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Environment variable name containing the JWT signing secret
    pub jwt_secret_env: String,

    /// Token validity in seconds
    #[serde(default = "default_token_expiry")]
    pub token_expiry: i64,
}

fn default_token_expiry() -> i64 {
    3600
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret_env: "JWT_SECRET".to_string(),
            token_expiry: default_token_expiry(),
        }
    }
}

// ============= Database Configuration =============

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file, or ":memory:" for an ephemeral store
    #[serde(default = "default_database_url")]
    pub url: String,
}

fn default_database_url() -> String {
    "./data/dugout.db".to_string()
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
        }
    }
}

// ============= Errors and Loading =============

/// Configuration loading and validation errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Environment variable '{0}' referenced in config is not set")]
    MissingEnvVar(String),
}

impl DugoutConfig {
    /// Load and validate the configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let config: DugoutConfig = toml::from_str(&content)?;

        config.validate()?;

        Ok(config)
    }

    /// Validate the configuration for env var availability.
    pub fn validate(&self) -> Result<(), ConfigError> {
        std::env::var(&self.auth.jwt_secret_env)
            .map_err(|_| ConfigError::MissingEnvVar(self.auth.jwt_secret_env.clone()))?;
        Ok(())
    }

    /// Get the JWT signing secret from the environment.
    pub fn jwt_secret(&self) -> Result<String, ConfigError> {
        std::env::var(&self.auth.jwt_secret_env)
            .map_err(|_| ConfigError::MissingEnvVar(self.auth.jwt_secret_env.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    // Each test that touches the environment uses its own variable name;
    // tests share the process environment and run concurrently.
    fn create_test_config(secret_env: &str) -> String {
        format!(
            r#"
[server]
host = "127.0.0.1"
port = 3000
log_level = "debug"

[auth]
jwt_secret_env = "{secret_env}"
token_expiry = 3600

[database]
url = ":memory:"
"#
        )
    }

    #[test]
    fn test_parse_config() {
        let content = create_test_config("TEST_JWT_SECRET");
        let config: DugoutConfig = toml::from_str(&content).expect("Failed to parse config");

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.auth.jwt_secret_env, "TEST_JWT_SECRET");
        assert_eq!(config.auth.token_expiry, 3600);
        assert_eq!(config.database.url, ":memory:");
    }

    #[test]
    fn test_defaults_fill_omitted_sections() {
        let content = r#"
[auth]
jwt_secret_env = "TEST_JWT_SECRET"
"#;

        let config: DugoutConfig = toml::from_str(content).expect("Failed to parse config");

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.log_level, "info");
        assert_eq!(config.auth.token_expiry, 3600);
        assert_eq!(config.database.url, "./data/dugout.db");
    }

    #[test]
    fn test_validation_missing_env_var() {
        std::env::remove_var("DUGOUT_UNSET_SECRET");

        let content = r#"
[auth]
jwt_secret_env = "DUGOUT_UNSET_SECRET"
"#;

        let config: DugoutConfig = toml::from_str(content).unwrap();
        let result = config.validate();

        assert!(matches!(result, Err(ConfigError::MissingEnvVar(_))));
    }

    #[test]
    fn test_jwt_secret_resolution() {
        std::env::set_var("DUGOUT_TEST_SECRET_RESOLVE", "resolved-secret");

        let content = create_test_config("DUGOUT_TEST_SECRET_RESOLVE");
        let config: DugoutConfig = toml::from_str(&content).unwrap();

        assert_eq!(config.jwt_secret().unwrap(), "resolved-secret");
    }

    #[test]
    fn test_load_from_file() {
        std::env::set_var(
            "DUGOUT_TEST_SECRET_LOAD",
            "test-secret-at-least-32-characters-long",
        );

        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(create_test_config("DUGOUT_TEST_SECRET_LOAD").as_bytes())
            .expect("write config");

        let config = DugoutConfig::load(file.path()).expect("should load");
        assert_eq!(config.server.log_level, "debug");
    }

    #[test]
    fn test_load_missing_file() {
        let result = DugoutConfig::load("/nonexistent/dugout.toml");
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }
}
