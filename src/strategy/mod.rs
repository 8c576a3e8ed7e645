//! Strategy Layer - Engle-Granger Cointegration
//!
//! Statistical building blocks and the pipeline that combines them:
//! - Least squares via normal equations (`ols`)
//! - No-intercept hedge ratio and spread
//! - Augmented Dickey-Fuller on residuals with automatic lag selection
//! - MacKinnon p-values and critical values for the cointegration test
//! - Zero crossings and rolling z-score of the spread
//!
//! Entry point: `CointegrationAnalyzer`

pub mod params;
pub mod ols;
pub mod regression;
pub mod spread;
pub mod mackinnon;
pub mod adf;
pub mod engle_granger;
pub mod crossings;
pub mod zscore;
pub mod cointegration;

pub use params::{AnalysisParams, LagSelection, ConfigError};
pub use regression::hedge_ratio;
pub use engle_granger::{engle_granger, MIN_OBSERVATIONS};
pub use crossings::zero_crossings;
pub use zscore::rolling_zscore;
pub use cointegration::{
    compute_cointegration, compute_spread, is_cointegrated, CointegrationAnalysis,
    CointegrationAnalyzer, COINT_P_VALUE_THRESHOLD,
};
