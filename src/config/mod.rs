use crate::constants::{self, env_vars};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

pub mod paths;
pub mod user_prompts;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use user_prompts::prompt_for_api_key;
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and layering of runtime settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// SportsDataIO subscription key. Sent as the `key` query parameter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Season whose schedule is fetched, e.g. 2025 for the 2025-26 season.
    #[serde(default = "default_season")]
    pub season: i32,
    /// Base URL of the API. A bare domain is reached over https.
    #[serde(default = "default_api_domain")]
    pub api_domain: String,
    /// Where the raw API payload is written. Overwritten on every run.
    #[serde(default = "default_raw_output_path")]
    pub raw_output_path: String,
    /// Path to the log file. If not specified, logs go to the default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for the schedule request. Defaults to 30 seconds.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
}

fn default_season() -> i32 {
    constants::DEFAULT_SEASON
}

fn default_api_domain() -> String {
    constants::DEFAULT_API_DOMAIN.to_string()
}

fn default_raw_output_path() -> String {
    constants::DEFAULT_RAW_OUTPUT_PATH.to_string()
}

fn default_http_timeout() -> u64 {
    constants::DEFAULT_HTTP_TIMEOUT_SECONDS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_key: None,
            season: default_season(),
            api_domain: default_api_domain(),
            raw_output_path: default_raw_output_path(),
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
        }
    }
}

/// Per-run values that take precedence over both the config file and the
/// environment. Usually built from command line flags.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub api_key: Option<String>,
    pub season: Option<i32>,
    pub api_domain: Option<String>,
    pub raw_output_path: Option<String>,
    pub log_file_path: Option<String>,
    pub http_timeout_seconds: Option<u64>,
}

impl Config {
    /// Loads configuration from the default config file location, falling
    /// back to defaults when no file exists, then applies environment
    /// variable overrides.
    ///
    /// # Environment Variables
    /// - `NHL_API_KEY` - Override API key
    /// - `NHL_SEASON` - Override season (ignored unless it parses as a year)
    /// - `NHL_API_DOMAIN` - Override API domain
    /// - `NHL_RAW_OUTPUT` - Override raw JSON output path
    /// - `NHL_LOG_FILE` - Override log file path
    /// - `NHL_HTTP_TIMEOUT` - Override HTTP timeout in seconds
    ///
    /// The result is not validated; callers validate once every layer,
    /// including command line overrides, has been applied.
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            debug!("Loading config from {config_path}");
            Self::load_from_path(&config_path).await?
        } else {
            debug!("No config file at {config_path}, using defaults");
            Config::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Loads configuration from a custom file path without env overrides.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Overrides fields from `NHL_*` environment variables when they are set.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(api_key) = std::env::var(env_vars::API_KEY) {
            self.api_key = Some(api_key);
        }

        if let Some(season) = std::env::var(env_vars::SEASON)
            .ok()
            .and_then(|s| s.trim().parse::<i32>().ok())
        {
            self.season = season;
        }

        if let Ok(api_domain) = std::env::var(env_vars::API_DOMAIN) {
            self.api_domain = api_domain;
        }

        if let Ok(raw_output_path) = std::env::var(env_vars::RAW_OUTPUT) {
            self.raw_output_path = raw_output_path;
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = std::env::var(env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.trim().parse::<u64>().ok())
        {
            self.http_timeout_seconds = timeout;
        }
    }

    /// Applies per-run overrides on top of the loaded configuration.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(api_key) = &overrides.api_key {
            self.api_key = Some(api_key.clone());
        }
        if let Some(season) = overrides.season {
            self.season = season;
        }
        if let Some(api_domain) = &overrides.api_domain {
            self.api_domain = api_domain.clone();
        }
        if let Some(raw_output_path) = &overrides.raw_output_path {
            self.raw_output_path = raw_output_path.clone();
        }
        if let Some(log_file_path) = &overrides.log_file_path {
            self.log_file_path = Some(log_file_path.clone());
        }
        if let Some(timeout) = overrides.http_timeout_seconds {
            self.http_timeout_seconds = timeout;
        }
    }

    /// Makes sure an API key is available, asking for one on stdin if no
    /// layer provided it. A prompted key is saved to the config file so the
    /// question is only asked once.
    pub async fn ensure_api_key(&mut self) -> Result<(), AppError> {
        let has_key = self
            .api_key
            .as_deref()
            .is_some_and(|key| !key.trim().is_empty());
        if has_key {
            return Ok(());
        }

        let api_key = prompt_for_api_key().await?;
        if api_key.is_empty() {
            return Err(AppError::config_error(format!(
                "An API key is required. Set {} or pass --api-key",
                env_vars::API_KEY
            )));
        }
        let config_path = get_config_path();
        Self::store_api_key(&config_path, &api_key).await?;
        info!("Saved API key to {config_path}");
        self.api_key = Some(api_key);
        Ok(())
    }

    /// Writes `api_key` into the config file at `path`, keeping every other
    /// stored setting as it is on disk.
    ///
    /// Env and command line overrides of the current run are never written.
    pub async fn store_api_key(path: &str, api_key: &str) -> Result<(), AppError> {
        let mut stored = if Path::new(path).exists() {
            Self::load_from_path(path).await?
        } else {
            Config::default()
        };
        stored.api_key = Some(api_key.to_string());
        stored.save_to_path(path).await
    }

    /// Returns the API key or a configuration error if none is set.
    pub fn require_api_key(&self) -> Result<&str, AppError> {
        self.api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| AppError::config_error("API key is not configured"))
    }

    /// Validates the configuration settings
    ///
    /// # Returns
    /// * `Ok(())` - Configuration is valid
    /// * `Err(AppError)` - Configuration validation failed
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(self)
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays the effective configuration settings to stdout.
    /// The API key is masked.
    pub fn display(&self) {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();

        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        println!("{config_path}");
        if !Path::new(&config_path).exists() {
            println!("(Not created yet)");
        }
        println!("────────────────────────────────────");
        println!("API Domain:");
        println!("{}", self.api_domain);
        println!("────────────────────────────────────");
        println!("API Key:");
        match self.api_key.as_deref() {
            Some(key) if !key.is_empty() => println!("{}", mask_api_key(key)),
            _ => println!("(Not set)"),
        }
        println!("────────────────────────────────────");
        println!("Season:");
        println!("{}", self.season);
        println!("────────────────────────────────────");
        println!("Raw Output:");
        println!("{}", self.raw_output_path);
        println!("────────────────────────────────────");
        println!("HTTP Timeout:");
        println!("{} seconds", self.http_timeout_seconds);
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &self.log_file_path {
            println!("{custom_path}.YYYY-MM-DD");
        } else {
            println!("{log_dir}/{}.YYYY-MM-DD", constants::DEFAULT_LOG_FILE_NAME);
            println!("(Default location, one file per day)");
        }
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if it doesn't exist. Every field is
    /// written as given.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.as_os_str().is_empty() && !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        let content = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }
}

/// Hides all but the last four characters of a key.
pub fn mask_api_key(key: &str) -> String {
    let visible = 4;
    let count = key.chars().count();
    if count <= visible {
        return "*".repeat(count);
    }
    let tail: String = key.chars().skip(count - visible).collect();
    format!("{}{tail}", "*".repeat(count - visible))
}
