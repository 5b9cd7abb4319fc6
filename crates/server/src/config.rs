//! # Application Configuration
//!
//! This module defines the configuration structure for `bannergen-server` and
//! the logic for loading it in layers: built-in defaults, an optional
//! `config.yml` (with `${VAR}` substitution), the `PORT` variable, and
//! `BANNERGEN_`-prefixed environment variables for nested keys.

use bannergen::fetcher::{DEFAULT_FETCH_TIMEOUT_SECS, DEFAULT_USER_AGENT};
use bannergen::providers::ProviderSettings;
use bannergen::PipelineOptions;
use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use regex::Regex;
use serde::Deserialize;
use std::env;
use std::fs;
use tracing::info;

/// A custom error type for configuration issues.
#[derive(Debug)]
pub enum ConfigError {
    /// Indicates an error from the underlying `config` crate.
    General(String),
    /// Indicates a required configuration file was not found.
    NotFound(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::General(msg) => write!(f, "Configuration error: {msg}"),
            ConfigError::NotFound(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::General(err.to_string())
    }
}

/// The root configuration structure, mapping directly to `config.yml`.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// The port for the server to listen on. Loaded from `PORT` env var.
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(default)]
    pub extraction: ExtractionConfig,
    /// The generation provider. The credential itself stays in the environment.
    #[serde(default)]
    pub provider: ProviderSettings,
}

fn default_port() -> u16 {
    8080
}

/// How source pages are retrieved.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct FetchConfig {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_FETCH_TIMEOUT_SECS
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ExtractionConfig {
    #[serde(default = "default_max_colors")]
    pub max_colors: usize,
}

fn default_max_colors() -> usize {
    PipelineOptions::default().max_colors
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            max_colors: default_max_colors(),
        }
    }
}

// Helper to read a file, substitute env vars, and return its content.
// Returns Ok(None) if the file does not exist, or an error if it fails to read.
fn read_and_substitute(path: &str) -> Result<Option<String>, ConfigError> {
    if !std::path::Path::new(path).exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path)
        .map_err(|e| ConfigError::General(format!("Failed to read config file '{path}': {e}")))?;

    let re = Regex::new(r"\$\{(?P<var>[A-Z0-9_]+)\}")
        .map_err(|e| ConfigError::General(format!("Invalid substitution pattern: {e}")))?;
    let expanded_content = re.replace_all(&content, |caps: &regex::Captures| {
        let var_name = &caps["var"];
        env::var(var_name).unwrap_or_default()
    });

    Ok(Some(expanded_content.to_string()))
}

/// Loads the application configuration from a file and environment variables.
///
/// - An explicit `config_path_override` must exist; the default
///   `config.yml` next to the crate manifest is optional.
/// - `PORT` overrides the top-level port.
/// - Nested keys are overridden by `BANNERGEN_...` variables
///   (e.g., `BANNERGEN_FETCH__TIMEOUT_SECS`, `BANNERGEN_PROVIDER__MODEL_NAME`).
pub fn get_config(config_path_override: Option<&str>) -> Result<AppConfig, ConfigError> {
    let base_path = env!("CARGO_MANIFEST_DIR");
    let mut builder = ConfigBuilder::builder();

    match config_path_override {
        Some(override_path) => {
            let content = read_and_substitute(override_path)?.ok_or_else(|| {
                ConfigError::NotFound(format!("Config file not found at '{override_path}'."))
            })?;
            info!("Loading configuration from '{override_path}'.");
            builder = builder.add_source(File::from_str(&content, FileFormat::Yaml));
        }
        None => {
            let user_config_path = format!("{base_path}/config.yml");
            if let Some(content) = read_and_substitute(&user_config_path)? {
                info!("Loading user-defined configuration from '{user_config_path}'.");
                builder = builder.add_source(File::from_str(&content, FileFormat::Yaml));
            } else {
                info!("'{user_config_path}' not found. Using built-in defaults.");
            }
        }
    }

    let settings = builder
        .set_override_option("port", env::var("PORT").ok())?
        .add_source(
            Environment::with_prefix("BANNERGEN")
                .prefix_separator("_")
                .try_parsing(true)
                .separator("__"),
        )
        .build()?;

    let config: AppConfig = settings.try_deserialize()?;
    Ok(config)
}
