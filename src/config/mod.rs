use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod user_prompts;
pub mod validation;

pub use paths::{get_config_path, get_log_dir_path};
use user_prompts::prompt_for_api_domain;
use validation::validate_config;

fn default_league_id() -> String {
    "league".to_string()
}

/// Default HTTP timeout in seconds
fn default_http_timeout() -> u64 {
    crate::constants::DEFAULT_HTTP_TIMEOUT_SECONDS
}

/// Configuration structure for the console.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Scheduling API domain. Should include the https:// prefix.
    pub api_domain: String,
    /// League identifier; names exported template files.
    #[serde(default = "default_league_id")]
    pub league_id: String,
    /// Path to the log file. Defaults to the platform log directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for API requests.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_domain: String::new(),
            league_id: default_league_id(),
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// If no config file exists, prompts the user for the API domain and
    /// creates one. Environment variables override file values.
    ///
    /// # Environment Variables
    /// - `FIELDTIME_API_DOMAIN` - Override API domain
    /// - `FIELDTIME_LEAGUE_ID` - Override league identifier
    /// - `FIELDTIME_LOG_FILE` - Override log file path
    /// - `FIELDTIME_HTTP_TIMEOUT` - Override HTTP timeout in seconds
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            Self::load_from_file(&config_path).await?
        } else if let Ok(api_domain) = std::env::var("FIELDTIME_API_DOMAIN") {
            Config {
                api_domain,
                ..Config::default()
            }
        } else {
            let api_domain = prompt_for_api_domain().await?;
            let config = Config {
                api_domain,
                ..Config::default()
            };
            config.save().await?;
            config
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads and parses a config file without prompts or env overrides.
    pub async fn load_from_file(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        Ok(toml::from_str(&content)?)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(api_domain) = std::env::var("FIELDTIME_API_DOMAIN") {
            self.api_domain = api_domain;
        }

        if let Ok(league_id) = std::env::var("FIELDTIME_LEAGUE_ID") {
            self.league_id = league_id;
        }

        if let Ok(log_file_path) = std::env::var("FIELDTIME_LOG_FILE") {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = std::env::var("FIELDTIME_HTTP_TIMEOUT")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.http_timeout_seconds = timeout;
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(&self.api_domain, &self.league_id, &self.log_file_path)
    }

    /// Saves the configuration to the default config file location,
    /// creating parent directories as needed.
    pub async fn save(&self) -> Result<(), AppError> {
        self.save_to_file(&get_config_path()).await
    }

    /// Saves the configuration to an explicit path.
    pub async fn save_to_file(&self, path: &str) -> Result<(), AppError> {
        let content = toml::to_string_pretty(self)?;

        if let Some(parent) = Path::new(path).parent() {
            fs::create_dir_all(parent).await?;
        }

        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Prints the current configuration to stdout.
    pub async fn display() -> Result<(), AppError> {
        let config = Self::load().await?;
        println!("Config file: {}", get_config_path());
        println!("API domain: {}", config.api_domain);
        println!("League id: {}", config.league_id);
        println!(
            "Log file: {}",
            config
                .log_file_path
                .as_deref()
                .unwrap_or("(default location)")
        );
        println!("HTTP timeout: {}s", config.http_timeout_seconds);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[tokio::test]
    async fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml").to_string_lossy().to_string();

        let config = Config {
            api_domain: "https://api.example.com".to_string(),
            league_id: "agsa".to_string(),
            log_file_path: None,
            http_timeout_seconds: 12,
        };
        config.save_to_file(&path).await.unwrap();

        let loaded = Config::load_from_file(&path).await.unwrap();
        assert_eq!(loaded.api_domain, "https://api.example.com");
        assert_eq!(loaded.league_id, "agsa");
        assert_eq!(loaded.http_timeout_seconds, 12);
    }

    #[tokio::test]
    async fn test_load_defaults_for_missing_optional_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        tokio::fs::write(&path, "api_domain = \"https://api.example.com\"\n")
            .await
            .unwrap();

        let loaded = Config::load_from_file(&path.to_string_lossy()).await.unwrap();
        assert_eq!(loaded.league_id, "league");
        assert_eq!(
            loaded.http_timeout_seconds,
            crate::constants::DEFAULT_HTTP_TIMEOUT_SECONDS
        );
        assert!(loaded.log_file_path.is_none());
    }

    #[tokio::test]
    #[serial]
    async fn test_env_overrides_take_precedence() {
        // SAFETY: serialized via #[serial]; no concurrent env access in this test binary
        unsafe {
            std::env::set_var("FIELDTIME_API_DOMAIN", "https://override.example.com");
            std::env::set_var("FIELDTIME_LEAGUE_ID", "override-league");
            std::env::set_var("FIELDTIME_HTTP_TIMEOUT", "5");
        }

        let mut config = Config {
            api_domain: "https://file.example.com".to_string(),
            league_id: "file-league".to_string(),
            log_file_path: None,
            http_timeout_seconds: 30,
        };
        config.apply_env_overrides();

        assert_eq!(config.api_domain, "https://override.example.com");
        assert_eq!(config.league_id, "override-league");
        assert_eq!(config.http_timeout_seconds, 5);

        unsafe {
            std::env::remove_var("FIELDTIME_API_DOMAIN");
            std::env::remove_var("FIELDTIME_LEAGUE_ID");
            std::env::remove_var("FIELDTIME_HTTP_TIMEOUT");
        }
    }

    #[test]
    fn test_validate_rejects_empty_domain() {
        let config = Config::default();
        assert!(config.validate().is_err());
    }
}
