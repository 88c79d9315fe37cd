//! # Application Configuration
//!
//! This module defines the configuration for `druidgen-server` and loads it
//! from programmatic defaults, an optional `config.yml` file and environment
//! variables, in that order of precedence (later layers win).

use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use druidgen::providers::druid::DEFAULT_DRUID_SQL_URL;
use regex::Regex;
use serde::Deserialize;
use std::env;
use std::fmt;
use std::fs;
use tracing::info;

/// The environment variable holding the Gemini credential.
pub const GOOGLE_API_KEY_VAR: &str = "GOOGLE_API_KEY";

/// A custom error type for configuration issues.
#[derive(Debug)]
pub enum ConfigError {
    /// Indicates an error from the underlying `config` crate.
    General(String),
    /// Indicates an explicitly requested configuration file was not found.
    NotFound(String),
    /// Indicates a required value (named by its environment variable) is absent.
    Missing(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::General(msg) => write!(f, "Configuration error: {msg}"),
            ConfigError::NotFound(msg) => write!(f, "{msg}"),
            ConfigError::Missing(key) => {
                write!(f, "Required configuration value '{key}' is not set")
            }
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
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// The port for the server to listen on. Loaded from `PORT` env var.
    #[serde(default = "default_port")]
    pub port: u16,
    /// The Druid SQL endpoint used for schema lookups. Loaded from `DRUID_SQL_URL`.
    #[serde(default = "default_druid_sql_url")]
    pub druid_sql_url: String,
    /// The single origin allowed by CORS. Loaded from `ALLOWED_ORIGIN`.
    #[serde(default = "default_allowed_origin")]
    pub allowed_origin: String,
    /// Upper bound for each outbound call. Loaded from `REQUEST_TIMEOUT_SECS`.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Settings for the text-generation provider.
    #[serde(default)]
    pub generation: GenerationConfig,
}

fn default_port() -> u16 {
    8000
}

fn default_druid_sql_url() -> String {
    DEFAULT_DRUID_SQL_URL.to_string()
}

fn default_allowed_origin() -> String {
    "http://localhost:18081".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

/// Configuration for the text-generation provider.
#[derive(Deserialize, Clone)]
pub struct GenerationConfig {
    /// The type of provider ("gemini" or "local").
    #[serde(default = "default_provider")]
    pub provider: String,
    /// The API URL. Derived from `model_name` for Gemini when absent.
    #[serde(default)]
    pub api_url: Option<String>,
    /// The API key. Falls back to `GOOGLE_API_KEY` for Gemini.
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_model_name")]
    pub model_name: String,
    /// Replaces the built-in prompt. Placeholders: `{table_name}`, `{columns}`, `{question}`.
    #[serde(default)]
    pub prompt_template: Option<String>,
}

fn default_provider() -> String {
    "gemini".to_string()
}

fn default_model_name() -> String {
    "gemini-1.5-flash".to_string()
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            api_url: None,
            api_key: None,
            model_name: default_model_name(),
            prompt_template: None,
        }
    }
}

// The key must never end up in logs.
impl fmt::Debug for GenerationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenerationConfig")
            .field("provider", &self.provider)
            .field("api_url", &self.api_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model_name", &self.model_name)
            .field("prompt_template", &self.prompt_template)
            .finish()
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
        .map_err(|e| ConfigError::General(e.to_string()))?;
    let expanded_content = re.replace_all(&content, |caps: &regex::Captures| {
        let var_name = &caps["var"];
        env::var(var_name).unwrap_or_default()
    });

    Ok(Some(expanded_content.to_string()))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Loads the application configuration from a file and environment variables.
///
/// - With `config_path_override`, that file must exist. Otherwise `config.yml`
///   in the crate directory is used when present.
/// - Top-level keys like `port` are overridden by `PORT`, `DRUID_SQL_URL`, etc.
/// - Nested keys are overridden by `DRUIDGEN_...` variables
///   (e.g., `DRUIDGEN_GENERATION__API_KEY`).
///
/// The Gemini provider needs a credential; its absence is an error.
pub fn get_config(config_path_override: Option<&str>) -> Result<AppConfig, ConfigError> {
    let mut builder = ConfigBuilder::builder();

    match config_path_override {
        Some(path) => {
            let content = read_and_substitute(path)?
                .ok_or_else(|| ConfigError::NotFound(format!("Config file not found at '{path}'.")))?;
            info!("Loading configuration from '{path}'.");
            builder = builder.add_source(File::from_str(&content, FileFormat::Yaml));
        }
        None => {
            let user_config_path = format!("{}/config.yml", env!("CARGO_MANIFEST_DIR"));
            if let Some(content) = read_and_substitute(&user_config_path)? {
                info!("Loading user-defined configuration from '{user_config_path}'.");
                builder = builder.add_source(File::from_str(&content, FileFormat::Yaml));
            }
        }
    }

    let settings = builder
        .add_source(Environment::default())
        .add_source(
            Environment::with_prefix("DRUIDGEN")
                .prefix_separator("_")
                .try_parsing(true)
                .separator("__"),
        )
        .build()?;

    let mut config: AppConfig = settings.try_deserialize()?;

    config.generation.api_key = non_empty(config.generation.api_key.take());
    config.generation.api_url = non_empty(config.generation.api_url.take());
    if config.generation.provider == "gemini" && config.generation.api_key.is_none() {
        config.generation.api_key = non_empty(env::var(GOOGLE_API_KEY_VAR).ok());
        if config.generation.api_key.is_none() {
            return Err(ConfigError::Missing(GOOGLE_API_KEY_VAR.to_string()));
        }
    }

    Ok(config)
}
