//! Analysis Parameters
//!
//! Configuration structs for the cointegration pipeline.
//! Defaults reproduce the conventional Engle-Granger setup (AIC lag selection,
//! Schwert maximum lag) with a 21-period z-score window.

use serde::{Deserialize, Serialize};

/// How the ADF regression picks its number of lagged differences
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LagSelection {
    /// Minimize Akaike information criterion over 0..=max_lag
    #[default]
    Aic,
    /// Minimize Bayesian information criterion over 0..=max_lag
    Bic,
    /// Use exactly max_lag lags
    Fixed,
}

impl std::str::FromStr for LagSelection {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "aic" => Ok(LagSelection::Aic),
            "bic" => Ok(LagSelection::Bic),
            "fixed" => Ok(LagSelection::Fixed),
            other => Err(ConfigError::InvalidLagSelection(other.to_string())),
        }
    }
}

/// Main analysis configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisParams {
    /// Trailing window for the spread z-score
    pub zscore_window: usize,
    /// Attach the z-score series to the result
    pub include_zscore: bool,
    /// ADF lag selection method
    pub lag_selection: LagSelection,
    /// Upper bound on ADF lags; `None` uses Schwert's rule
    pub max_lag: Option<usize>,
}

impl Default for AnalysisParams {
    fn default() -> Self {
        Self {
            zscore_window: 21,
            include_zscore: true,
            lag_selection: LagSelection::Aic,
            max_lag: None,
        }
    }
}

impl AnalysisParams {
    /// Create a new config with custom z-score window
    pub fn with_window(mut self, window: usize) -> Self {
        self.zscore_window = window;
        self
    }

    /// Create a new config with custom lag selection
    pub fn with_lag_selection(mut self, selection: LagSelection) -> Self {
        self.lag_selection = selection;
        self
    }

    /// Create a new config with an explicit maximum lag
    pub fn with_max_lag(mut self, max_lag: usize) -> Self {
        self.max_lag = Some(max_lag);
        self
    }

    /// Create a new config that omits the z-score series
    pub fn without_zscore(mut self) -> Self {
        self.include_zscore = false;
        self
    }

    /// Validate parameters that do not depend on the sample length
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.zscore_window < 2 {
            return Err(ConfigError::InvalidWindow(self.zscore_window));
        }
        if self.lag_selection == LagSelection::Fixed && self.max_lag.is_none() {
            return Err(ConfigError::MissingMaxLag);
        }
        Ok(())
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid z-score window: {0} (minimum 2)")]
    InvalidWindow(usize),
    #[error("Fixed lag selection requires max_lag")]
    MissingMaxLag,
    #[error("Invalid lag selection: {0} (expected aic, bic or fixed)")]
    InvalidLagSelection(String),
}
