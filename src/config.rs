//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::model::{DailyTargets, Meal};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub entry: EntryConfig,

    #[serde(default)]
    pub targets: TargetsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Food-log API connection
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

/// Defaults for new entries
#[derive(Debug, Clone, Deserialize)]
pub struct EntryConfig {
    #[serde(default = "default_meal")]
    pub default_meal: String,
}

fn default_meal() -> String {
    Meal::default().label().to_string()
}

impl Default for EntryConfig {
    fn default() -> Self {
        Self {
            default_meal: default_meal(),
        }
    }
}

/// Daily nutrition targets shown next to the total
#[derive(Debug, Clone, Deserialize)]
pub struct TargetsConfig {
    #[serde(default = "default_targets_enabled")]
    pub enabled: bool,

    #[serde(default = "default_kcal")]
    pub kcal: f64,

    #[serde(default = "default_protein")]
    pub protein: f64,

    #[serde(default = "default_carbs")]
    pub carbs: f64,

    #[serde(default = "default_fat")]
    pub fat: f64,
}

fn default_targets_enabled() -> bool {
    true
}

fn default_kcal() -> f64 {
    DailyTargets::default().kcal
}

fn default_protein() -> f64 {
    DailyTargets::default().protein
}

fn default_carbs() -> f64 {
    DailyTargets::default().carbs
}

fn default_fat() -> f64 {
    DailyTargets::default().fat
}

impl Default for TargetsConfig {
    fn default() -> Self {
        Self {
            enabled: default_targets_enabled(),
            kcal: default_kcal(),
            protein: default_protein(),
            carbs: default_carbs(),
            fat: default_fat(),
        }
    }
}

impl TargetsConfig {
    /// Targets to display, if enabled
    pub fn daily_targets(&self) -> Option<DailyTargets> {
        self.enabled.then(|| DailyTargets {
            kcal: self.kcal,
            protein: self.protein,
            carbs: self.carbs,
            fat: self.fat,
        })
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,

    pub file: Option<String>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment.
    ///
    /// The first existing file wins; a file that exists but cannot be
    /// loaded is an error rather than a fallback to defaults.
    pub fn load_default() -> Result<Self, ConfigError> {
        let config_paths: Vec<PathBuf> = [
            dirs::config_dir().map(|p| p.join("foodlog").join("config.toml")),
            Some(PathBuf::from("./foodlog.toml")),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self::load_first(&config_paths)
    }

    /// Load the first of `paths` that exists, or env-only defaults
    pub fn load_first(paths: &[PathBuf]) -> Result<Self, ConfigError> {
        match paths.iter().find(|path| path.exists()) {
            Some(path) => {
                let config = Self::load_with_env(path)?;
                tracing::info!("Loaded config from {:?}", path);
                Ok(config)
            }
            None => {
                tracing::info!("Using default config with environment overrides");
                Ok(Self::from_env())
            }
        }
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply `FOODLOG_*` overrides from a variable lookup
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        // API overrides
        if let Some(url) = lookup("FOODLOG_API_URL") {
            self.api.base_url = url;
        }
        if let Some(timeout) = lookup("FOODLOG_REQUEST_TIMEOUT") {
            if let Ok(secs) = timeout.parse() {
                self.api.request_timeout_secs = secs;
            }
        }

        // Entry overrides
        if let Some(meal) = lookup("FOODLOG_DEFAULT_MEAL") {
            self.entry.default_meal = meal;
        }

        // Logging overrides
        if let Some(level) = lookup("FOODLOG_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("FOODLOG_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Food Log Configuration
#
# Environment variables override these settings:
# - FOODLOG_API_URL
# - FOODLOG_REQUEST_TIMEOUT
# - FOODLOG_DEFAULT_MEAL
# - FOODLOG_LOG_LEVEL
# - FOODLOG_LOG_FORMAT

[api]
# Base URL of the food-log backend
base_url = "http://127.0.0.1:5000"

# Request timeout in seconds
request_timeout_secs = 30

[entry]
# Meal new entries are logged under: 早餐, 午餐, 晚餐, 點心
default_meal = "午餐"

[targets]
# Show progress towards daily targets next to the total
enabled = true

# Daily targets (kcal, grams)
kcal = 2650
protein = 130
carbs = 350
fat = 70

[logging]
# Log level: trace, debug, info, warn, error
level = "warn"

# Log format: pretty (for development) or json (for production)
format = "pretty"

# Optional log file path
# file = "/var/log/foodlog/foodlog.log"
"#
    .to_string()
}
