//! Init command implementation
//!
//! Scaffolds a new Dugout deployment with configuration files.

use super::output::Output;
use std::fs;
use std::path::Path;

/// Result of the init operation
pub enum InitResult {
    /// Initialization completed successfully
    Success,
    /// Deployment already exists (dugout.toml found)
    AlreadyExists,
    /// An error occurred during initialization
    Error(String),
}

/// Configuration for the init command
pub struct InitConfig {
    /// Directory to initialize
    pub path: std::path::PathBuf,
    /// Overwrite existing files
    pub force: bool,
    /// Host address for the server
    pub host: String,
    /// Port for the server
    pub port: u16,
}

/// Run the init command
pub fn run(config: InitConfig, output: &Output) -> InitResult {
    output.banner();

    let base_path = &config.path;

    // Check if dugout.toml already exists
    let config_path = base_path.join("dugout.toml");
    if config_path.exists() && !config.force {
        output.warning("dugout.toml already exists!");
        output.hint("Use --force to overwrite existing files");
        return InitResult::AlreadyExists;
    }

    let data_dir = base_path.join("data");
    if !data_dir.exists() {
        if let Err(e) = fs::create_dir_all(&data_dir) {
            output.error(&format!("Failed to create data/: {}", e));
            return InitResult::Error(e.to_string());
        }
        output.created("directory", "data");
    } else {
        output.skipped("data", "already exists");
    }

    let toml_content = generate_dugout_toml(&config);
    if let Err(e) = write_file(&config_path, &toml_content, config.force) {
        output.error(&format!("Failed to create dugout.toml: {}", e));
        return InitResult::Error(e.to_string());
    }
    output.created("config", "dugout.toml");

    let env_example_path = base_path.join(".env.example");
    if let Err(e) = write_file(&env_example_path, generate_env_example(), config.force) {
        output.error(&format!("Failed to create .env.example: {}", e));
        return InitResult::Error(e.to_string());
    }
    output.created("env", ".env.example");

    output.success("Deployment initialized");
    output.info("Next steps:");
    output.hint("1. Copy .env.example to .env and set JWT_SECRET");
    output.hint("2. Start the server: dugout-server");
    output.hint("API docs available at /swagger-ui/ (requires 'swagger-ui' feature)");

    InitResult::Success
}

fn write_file(path: &Path, content: &str, force: bool) -> std::io::Result<()> {
    if path.exists() && !force {
        return Ok(()); // Skip existing files unless force is true
    }
    fs::write(path, content)
}

fn generate_dugout_toml(config: &InitConfig) -> String {
    format!(
        r#"# Dugout server configuration
# Generated by: dugout-server init

[server]
host = "{host}"
port = {port}
log_level = "info"

[auth]
# Name of the environment variable holding the JWT signing secret.
# The secret itself never lives in this file.
jwt_secret_env = "JWT_SECRET"
# Token validity in seconds
token_expiry = 3600

[database]
# SQLite database file; use ":memory:" for an ephemeral store
url = "./data/dugout.db"
"#,
        host = config.host,
        port = config.port
    )
}

fn generate_env_example() -> &'static str {
    r#"# Copy to .env and fill in real values.
# JWT signing secret; use a strong random value of at least 32 characters.
JWT_SECRET=change-me-to-a-long-random-secret
"#
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(path: std::path::PathBuf) -> InitConfig {
        InitConfig {
            path,
            force: false,
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }

    #[test]
    fn test_generate_dugout_toml() {
        let config = test_config(std::path::PathBuf::from("/tmp"));

        let content = generate_dugout_toml(&config);

        assert!(content.contains("[server]"));
        assert!(content.contains("host = \"127.0.0.1\""));
        assert!(content.contains("port = 3000"));
        assert!(content.contains("jwt_secret_env = \"JWT_SECRET\""));
        assert!(content.contains("[database]"));
    }

    #[test]
    fn test_generated_toml_parses() {
        let config = test_config(std::path::PathBuf::from("/tmp"));

        let content = generate_dugout_toml(&config);
        let parsed: crate::utils::config::DugoutConfig =
            toml::from_str(&content).expect("generated config should parse");

        assert_eq!(parsed.server.port, 3000);
        assert_eq!(parsed.auth.jwt_secret_env, "JWT_SECRET");
    }

    #[test]
    fn test_init_creates_files() {
        let dir = tempfile::tempdir().expect("temp dir");
        let config = test_config(dir.path().to_path_buf());
        let output = Output::no_color();

        match run(config, &output) {
            InitResult::Success => (),
            _ => panic!("Expected Success"),
        }

        assert!(dir.path().join("dugout.toml").exists());
        assert!(dir.path().join(".env.example").exists());
        assert!(dir.path().join("data").is_dir());
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().expect("temp dir");
        fs::write(dir.path().join("dugout.toml"), "# existing").expect("seed file");

        let config = test_config(dir.path().to_path_buf());
        let output = Output::no_color();

        match run(config, &output) {
            InitResult::AlreadyExists => (),
            _ => panic!("Expected AlreadyExists"),
        }
    }
}
