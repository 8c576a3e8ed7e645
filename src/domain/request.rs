//! Request Records
//!
//! Input bodies accepted at the transport boundary. Field names match the
//! JSON the trading bot posts (`series1`, `series2`, `hedgeRatio`).

use serde::{Deserialize, Serialize};

use crate::domain::error::CointError;
use crate::domain::series::PairedSeries;

/// Body of a cointegration request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CointegrationRequest {
    pub series1: Vec<f64>,
    pub series2: Vec<f64>,
    /// Rolling z-score window; falls back to the configured default
    #[serde(default)]
    pub window: Option<usize>,
}

impl CointegrationRequest {
    /// Validate the two series into the pipeline's boundary type
    pub fn into_pair(self) -> Result<(PairedSeries, Option<usize>), CointError> {
        let pair = PairedSeries::new(self.series1, self.series2)?;
        Ok((pair, self.window))
    }
}

/// Body of a standalone spread request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpreadRequest {
    pub series1: Vec<f64>,
    pub series2: Vec<f64>,
    pub hedge_ratio: f64,
}
