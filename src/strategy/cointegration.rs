//! Cointegration Pipeline
//!
//! Hedge ratio -> spread -> Engle-Granger test (on the raw pair) ->
//! zero crossings -> rolling z-score -> decision and rounding.
//!
//! # Decision rule
//!
//! A pair is flagged cointegrated when BOTH hold, with strict comparisons on
//! unrounded values:
//!
//! - `p_value < COINT_P_VALUE_THRESHOLD` (0.5)
//! - `test_statistic < critical_values.five_pct`
//!
//! 0.5 is far looser than the 0.05 normally used for this test. It is kept
//! as-is because downstream pair selection depends on it; in practice the
//! 5% critical-value condition is the binding one.

use serde::Serialize;
use tracing::debug;

use crate::domain::{
    round2, CointError, CointegrationResult, PairedSeries, StationarityTestResult,
};
use crate::strategy::crossings::zero_crossings;
use crate::strategy::engle_granger::engle_granger;
use crate::strategy::params::AnalysisParams;
use crate::strategy::regression::hedge_ratio;
use crate::strategy::spread;
use crate::strategy::zscore::{rolling_zscore, validate_window};

/// p-value cut-off of the decision rule (intentionally loose, see module docs)
pub const COINT_P_VALUE_THRESHOLD: f64 = 0.5;

/// Apply the decision rule
pub fn is_cointegrated(p_value: f64, test_statistic: f64, critical_value_5pct: f64) -> bool {
    p_value < COINT_P_VALUE_THRESHOLD && test_statistic < critical_value_5pct
}

/// Full pipeline output, before and after rounding
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CointegrationAnalysis {
    /// The rounded terminal record
    pub result: CointegrationResult,
    /// Unrounded Engle-Granger outcome
    pub stationarity: StationarityTestResult,
    /// Unrounded no-intercept hedge ratio
    pub hedge_ratio: f64,
    /// A - hedge_ratio * B
    pub spread: Vec<f64>,
}

/// Stateless analyzer; holds only immutable parameters and can be shared
/// across threads
#[derive(Debug, Clone, Default)]
pub struct CointegrationAnalyzer {
    params: AnalysisParams,
}

impl CointegrationAnalyzer {
    pub fn new(params: AnalysisParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &AnalysisParams {
        &self.params
    }

    /// Run the pipeline and return the terminal record
    pub fn analyze(&self, pair: &PairedSeries) -> Result<CointegrationResult, CointError> {
        self.analyze_detailed(pair).map(|analysis| analysis.result)
    }

    /// Run the pipeline and keep the intermediate artifacts
    pub fn analyze_detailed(&self, pair: &PairedSeries) -> Result<CointegrationAnalysis, CointError> {
        let (a, b) = (pair.series_a(), pair.series_b());
        let window = self.params.zscore_window;

        validate_window(window, pair.len())?;

        let stationarity = engle_granger(a, b, &self.params)?;
        let hedge = hedge_ratio(a, b)?;
        let spread = spread::compute_spread(a, b, hedge)?;
        let crossings = zero_crossings(&spread);

        let zscore_list = if self.params.include_zscore {
            Some(rolling_zscore(&spread, window)?)
        } else {
            None
        };

        let coint_flag = is_cointegrated(
            stationarity.p_value,
            stationarity.test_statistic,
            stationarity.critical_values.five_pct,
        );

        debug!(
            "Cointegration: flag={}, p={:.4}, t={:.4}, crit5={:.4}, hedge={:.4}, crossings={}",
            coint_flag,
            stationarity.p_value,
            stationarity.test_statistic,
            stationarity.critical_values.five_pct,
            hedge,
            crossings
        );

        let result = CointegrationResult {
            coint_flag,
            p_value: round2(stationarity.p_value),
            t_value: round2(stationarity.test_statistic),
            critical_value: round2(stationarity.critical_values.five_pct),
            hedge_ratio: round2(hedge),
            zero_crossing: crossings,
            zscore_list,
        };

        Ok(CointegrationAnalysis {
            result,
            stationarity,
            hedge_ratio: hedge,
            spread,
        })
    }
}

/// Test two series for cointegration with default parameters and the given
/// z-score window
pub fn compute_cointegration(
    series_a: &[f64],
    series_b: &[f64],
    window: usize,
) -> Result<CointegrationResult, CointError> {
    let pair = PairedSeries::from_slices(series_a, series_b)?;
    CointegrationAnalyzer::new(AnalysisParams::default().with_window(window)).analyze(&pair)
}

/// Standalone spread: series_a[i] - hedge_ratio * series_b[i]
pub fn compute_spread(
    series_a: &[f64],
    series_b: &[f64],
    hedge_ratio: f64,
) -> Result<Vec<f64>, CointError> {
    spread::compute_spread(series_a, series_b, hedge_ratio)
}
