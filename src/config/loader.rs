//! Configuration Loader
//!
//! Loads and validates configuration from TOML files matching config.toml structure.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use crate::strategy::params::{AnalysisParams, LagSelection};

/// Environment variable overriding `analysis.zscore_window`
pub const ZSCORE_WINDOW_ENV: &str = "COINT_ZSCORE_WINDOW";

/// Main configuration structure matching config.toml
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub analysis: AnalysisSection,
    #[serde(default)]
    pub logging: LoggingSection,
}

/// Analysis configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisSection {
    /// Rolling window for the spread z-score (in observations)
    pub zscore_window: usize,
    /// Include the z-score series in results
    #[serde(default = "default_include_zscore")]
    pub include_zscore: bool,
    /// ADF lag selection: "aic", "bic" or "fixed"
    #[serde(default = "default_lag_selection")]
    pub lag_selection: String,
    /// Maximum ADF lag (required for "fixed"; Schwert's rule when absent)
    #[serde(default)]
    pub max_lag: Option<usize>,
}

fn default_include_zscore() -> bool {
    true
}

fn default_lag_selection() -> String {
    "aic".to_string()
}

impl AnalysisSection {
    /// Get z-score window with environment variable override
    /// Checks COINT_ZSCORE_WINDOW env var first, falls back to config value
    pub fn get_zscore_window(&self) -> usize {
        std::env::var(ZSCORE_WINDOW_ENV)
            .ok()
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(self.zscore_window)
    }
}

/// Logging configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSection {
    /// Log level: "trace", "debug", "info", "warn", "error"
    pub level: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

/// Load configuration from a TOML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

impl Config {
    /// Validate all configuration parameters
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.analysis_params()?
            .validate()
            .map_err(|e| ConfigError::ValidationError(e.to_string()))?;

        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            other => Err(ConfigError::ValidationError(format!(
                "logging.level must be one of trace/debug/info/warn/error, got {}",
                other
            ))),
        }
    }

    /// Convert to pipeline parameters, applying environment overrides
    pub fn analysis_params(&self) -> Result<AnalysisParams, ConfigError> {
        let lag_selection: LagSelection = self
            .analysis
            .lag_selection
            .parse()
            .map_err(|e: crate::strategy::params::ConfigError| {
                ConfigError::ValidationError(e.to_string())
            })?;

        Ok(AnalysisParams {
            zscore_window: self.analysis.get_zscore_window(),
            include_zscore: self.analysis.include_zscore,
            lag_selection,
            max_lag: self.analysis.max_lag,
        })
    }
}
