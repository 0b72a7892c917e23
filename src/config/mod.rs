use crate::constants::{DEFAULT_HTTP_TIMEOUT_MS, DEFAULT_LOG_FILE_NAME, env_vars};
use crate::error::CliError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Settings of the `nhl` command-line front end.
///
/// The library itself never reads this; the binary turns it into
/// [`ClientOptions`](crate::ClientOptions).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    /// HTTP timeout in milliseconds for API requests.
    #[serde(default = "default_http_timeout_ms")]
    pub http_timeout_ms: u64,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
}

fn default_http_timeout_ms() -> u64 {
    DEFAULT_HTTP_TIMEOUT_MS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            http_timeout_ms: default_http_timeout_ms(),
            log_file_path: None,
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// Falls back to defaults when no file exists; nothing is written.
    ///
    /// # Environment Variables
    /// - `NHL_API_HTTP_TIMEOUT_MS` - Override HTTP timeout in milliseconds
    /// - `NHL_API_LOG_FILE` - Override log file path
    ///
    /// Environment variables take precedence over the config file.
    pub async fn load() -> Result<Self, CliError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            Self::load_from_path(&config_path).await?
        } else {
            Config::default()
        };

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Applies `NHL_API_*` environment overrides in place.
    ///
    /// # Errors
    /// * `CliError::Config` - If `NHL_API_HTTP_TIMEOUT_MS` is not a whole number
    pub fn apply_env_overrides(&mut self) -> Result<(), CliError> {
        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Ok(raw) = std::env::var(env_vars::HTTP_TIMEOUT_MS) {
            self.http_timeout_ms = raw.trim().parse::<u64>().map_err(|_| {
                CliError::config_error(format!(
                    "{}={raw} is not a whole number of milliseconds",
                    env_vars::HTTP_TIMEOUT_MS
                ))
            })?;
        }

        Ok(())
    }

    pub fn validate(&self) -> Result<(), CliError> {
        validate_config(self.http_timeout_ms, &self.log_file_path)
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), CliError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Log file in effect: the configured path or the default one.
    pub fn effective_log_file(&self) -> String {
        match &self.log_file_path {
            Some(path) => path.clone(),
            None => format!("{}/{}", get_log_dir_path(), DEFAULT_LOG_FILE_NAME),
        }
    }

    /// Human-readable summary of the settings in effect.
    pub fn render(&self, config_path: &str, file_exists: bool) -> String {
        let mut out = String::new();
        out.push_str("\nCurrent Configuration\n");
        out.push_str("────────────────────────────────────\n");
        out.push_str("Config Location:\n");
        out.push_str(config_path);
        if !file_exists {
            out.push_str("\n(not created yet, using defaults)");
        }
        out.push_str("\n────────────────────────────────────\n");
        out.push_str("HTTP Timeout:\n");
        out.push_str(&format!("{} ms\n", self.http_timeout_ms));
        out.push_str("────────────────────────────────────\n");
        out.push_str("Log File Location:\n");
        out.push_str(&self.effective_log_file());
        if self.log_file_path.is_none() {
            out.push_str("\n(Default location)");
        }
        out.push('\n');
        out
    }

    /// Prints the current configuration to stdout.
    pub async fn display() -> Result<(), CliError> {
        let config_path = get_config_path();
        let exists = Path::new(&config_path).exists();
        let config = Config::load().await?;
        print!("{}", config.render(&config_path, exists));
        Ok(())
    }

    /// Saves configuration to a custom file path, creating the parent
    /// directory if needed.
    ///
    /// # Errors
    /// * `CliError::Config` - If the provided path has no parent directory
    /// * `CliError::Io` - If there's an I/O error creating directories or writing the file
    /// * `CliError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), CliError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            CliError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        let content = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path without env overrides.
    pub async fn load_from_path(path: &str) -> Result<Self, CliError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    fn clear_env() {
        unsafe {
            std::env::remove_var(env_vars::HTTP_TIMEOUT_MS);
            std::env::remove_var(env_vars::LOG_FILE);
        }
    }

    #[tokio::test]
    async fn test_config_load_existing_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy();

        let config_content = r#"
http_timeout_ms = 2500
log_file_path = "/custom/log/nhl.log"
"#;
        tokio::fs::write(&config_path, config_content).await.unwrap();

        let config = Config::load_from_path(&config_path_str).await.unwrap();
        assert_eq!(config.http_timeout_ms, 2500);
        assert_eq!(config.log_file_path, Some("/custom/log/nhl.log".to_string()));
    }

    #[tokio::test]
    async fn test_config_empty_file_uses_defaults() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "").await.unwrap();

        let config = Config::load_from_path(&config_path.to_string_lossy())
            .await
            .unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.http_timeout_ms, 10_000);
    }

    #[tokio::test]
    async fn test_config_save_and_load_roundtrip() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("nested").join("dir").join("config.toml");
        let config_path_str = config_path.to_string_lossy();
        let config = Config {
            http_timeout_ms: 4000,
            log_file_path: Some("/var/log/nhl.log".to_string()),
        };

        config.save_to_path(&config_path_str).await.unwrap();
        assert!(config_path.exists());

        let content = tokio::fs::read_to_string(&config_path).await.unwrap();
        assert!(content.contains("http_timeout_ms = 4000"), "{content}");

        let loaded = Config::load_from_path(&config_path_str).await.unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_none_log_path_is_not_serialized() {
        let toml_string = toml::to_string_pretty(&Config::default()).unwrap();
        assert!(!toml_string.contains("log_file_path"));
    }

    #[tokio::test]
    async fn test_config_malformed_toml_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "http_timeout_ms = \"soon\"")
            .await
            .unwrap();

        let result = Config::load_from_path(&config_path.to_string_lossy()).await;
        assert!(matches!(result.unwrap_err(), CliError::TomlDeserialize(_)));
    }

    #[tokio::test]
    async fn test_config_load_from_nonexistent_path() {
        let result = Config::load_from_path("/definitely/not/here/config.toml").await;
        assert!(matches!(result.unwrap_err(), CliError::Io(_)));
    }

    #[test]
    fn test_paths_use_app_directory() {
        assert!(Config::get_config_path().ends_with("config.toml"));
        assert!(Config::get_config_path().contains("nhl_api"));
        assert!(Config::get_log_dir_path().contains("nhl_api"));
        assert!(Config::default().effective_log_file().ends_with("nhl_api.log"));
    }

    #[test]
    fn test_render_mentions_settings() {
        let config = Config {
            http_timeout_ms: 1234,
            log_file_path: None,
        };
        let text = config.render("/tmp/nhl_api/config.toml", false);
        assert!(text.contains("1234 ms"));
        assert!(text.contains("/tmp/nhl_api/config.toml"));
        assert!(text.contains("using defaults"));
        assert!(text.contains("(Default location)"));
    }

    #[test]
    #[serial]
    fn test_environment_variable_override() {
        clear_env();
        unsafe {
            std::env::set_var(env_vars::HTTP_TIMEOUT_MS, "750");
            std::env::set_var(env_vars::LOG_FILE, "/env/log/nhl.log");
        }

        let mut config = Config {
            http_timeout_ms: 4000,
            log_file_path: Some("/file/log/nhl.log".to_string()),
        };
        config.apply_env_overrides().unwrap();

        assert_eq!(config.http_timeout_ms, 750);
        assert_eq!(config.log_file_path, Some("/env/log/nhl.log".to_string()));
        clear_env();
    }

    #[test]
    #[serial]
    fn test_unparseable_timeout_env_is_rejected() {
        clear_env();
        unsafe {
            std::env::set_var(env_vars::HTTP_TIMEOUT_MS, "ten seconds");
        }

        let mut config = Config::default();
        let error = config.apply_env_overrides().unwrap_err();
        assert!(matches!(error, CliError::Config(_)));
        assert!(error.to_string().contains("NHL_API_HTTP_TIMEOUT_MS=ten seconds"));
        assert_eq!(config.http_timeout_ms, DEFAULT_HTTP_TIMEOUT_MS);
        clear_env();
    }
}
