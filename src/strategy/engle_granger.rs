//! Engle-Granger Two-Step Cointegration Test
//!
//! 1. Cointegrating regression of A on [1, B] by OLS
//! 2. ADF test (no deterministic terms) on its residual
//!
//! The statistic is judged against MacKinnon's cointegration distribution for
//! two variables, not the plain ADF distribution: the residual comes from an
//! estimated regression and is biased toward looking stationary.
//!
//! The intercept-bearing regression here is independent of the no-intercept
//! hedge ratio; both are part of the pipeline.

use tracing::debug;

use crate::domain::{CointError, StationarityTestResult};
use crate::strategy::adf;
use crate::strategy::mackinnon;
use crate::strategy::ols;
use crate::strategy::params::AnalysisParams;

/// Minimum observations for the test.
///
/// At N = 24 Schwert's rule allows 9 lags, leaving the widest lag-selection
/// regression 14 rows for 10 regressors.
pub const MIN_OBSERVATIONS: usize = 24;

/// Cointegrating regressions with R-squared at or above this are treated as
/// perfectly collinear
fn collinearity_threshold() -> f64 {
    1.0 - 100.0 * f64::EPSILON.sqrt()
}

/// Run the Engle-Granger test of `series_a` against `series_b`.
///
/// # Errors
///
/// - `LengthMismatch` when the series differ in length
/// - `InsufficientData` below `MIN_OBSERVATIONS`
/// - `DegenerateInput` when B is constant (singular cointegrating regression)
///   or when A is constant
pub fn engle_granger(
    series_a: &[f64],
    series_b: &[f64],
    params: &AnalysisParams,
) -> Result<StationarityTestResult, CointError> {
    if series_a.len() != series_b.len() {
        return Err(CointError::LengthMismatch {
            len_a: series_a.len(),
            len_b: series_b.len(),
        });
    }

    let n = series_a.len();
    if n < MIN_OBSERVATIONS {
        return Err(CointError::InsufficientData {
            required: MIN_OBSERVATIONS,
            actual: n,
        });
    }

    let coint_fit = ols::fit(series_a, &ols::with_constant(series_b)).ok_or_else(|| {
        CointError::DegenerateInput(
            "cointegrating regression is singular (series B is constant)".to_string(),
        )
    })?;

    if coint_fit.centered_tss == 0.0 {
        return Err(CointError::DegenerateInput(
            "series A is constant; cointegrating residual undefined".to_string(),
        ));
    }

    let critical_values = mackinnon::critical_values(n - 1);

    if coint_fit.centered_r_squared() >= collinearity_threshold() {
        debug!(
            "Cointegrating regression is perfectly collinear (R2={:.10}); statistic set to -inf",
            coint_fit.centered_r_squared()
        );
        return Ok(StationarityTestResult {
            test_statistic: f64::NEG_INFINITY,
            p_value: 0.0,
            critical_values,
            used_lag: 0,
            nobs: n - 1,
        });
    }

    let outcome = adf::adf_no_constant(&coint_fit.residuals, params.lag_selection, params.max_lag)?;
    let p_value = mackinnon::p_value(outcome.statistic);

    debug!(
        "Engle-Granger: alpha={:.4}, beta={:.4}, stat={:.4}, p={:.4}, crit5={:.4}",
        coint_fit.params[0], coint_fit.params[1], outcome.statistic, p_value, critical_values.five_pct
    );

    Ok(StationarityTestResult {
        test_statistic: outcome.statistic,
        p_value,
        critical_values,
        used_lag: outcome.used_lag,
        nobs: outcome.nobs,
    })
}
