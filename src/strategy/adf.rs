//! Augmented Dickey-Fuller Test (no deterministic terms)
//!
//! Regression on a residual series x:
//!
//!   dx[t] = gamma * x[t-1] + sum_{i=1..p} phi_i * dx[t-i] + e[t]
//!
//! The statistic is the t-value of gamma. The lag order p is either fixed or
//! chosen by minimizing AIC/BIC over p = 0..=max_lag, with every candidate
//! fitted on the same max_lag-trimmed sample so the criteria are comparable.
//! The chosen p is then refitted on the longest sample it allows.

use nalgebra::DMatrix;
use tracing::debug;

use crate::domain::CointError;
use crate::strategy::ols::{self, OlsFit};
use crate::strategy::params::LagSelection;

/// Result of an ADF regression
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdfOutcome {
    /// t-value of the lagged-level coefficient
    pub statistic: f64,
    /// Number of lagged differences in the final regression
    pub used_lag: usize,
    /// Observations in the final regression
    pub nobs: usize,
    /// Largest lag considered
    pub max_lag: usize,
}

/// Largest lag a sample of `nobs` observations supports: nobs/2 - 1
pub fn lag_limit(nobs: usize) -> usize {
    (nobs / 2).saturating_sub(1)
}

/// Schwert's rule ceil(12 * (nobs/100)^(1/4)), capped at `lag_limit`
pub fn schwert_max_lag(nobs: usize) -> usize {
    let rule = (12.0 * (nobs as f64 / 100.0).powf(0.25)).ceil() as usize;
    rule.min(lag_limit(nobs))
}

/// Run the ADF regression without constant or trend on `x`
pub fn adf_no_constant(
    x: &[f64],
    selection: LagSelection,
    max_lag: Option<usize>,
) -> Result<AdfOutcome, CointError> {
    let nobs = x.len();
    if nobs < 4 {
        return Err(CointError::InsufficientData { required: 4, actual: nobs });
    }

    let limit = lag_limit(nobs);
    let max_lag = match max_lag {
        Some(m) if m > limit => return Err(CointError::InvalidLag { max_lag: m, limit }),
        Some(m) => m,
        None => schwert_max_lag(nobs),
    };

    let diffs: Vec<f64> = x.windows(2).map(|w| w[1] - w[0]).collect();

    let used_lag = match selection {
        LagSelection::Fixed => max_lag,
        LagSelection::Aic | LagSelection::Bic => select_lag(x, &diffs, max_lag, selection)?,
    };

    let (y, design) = lagged_design(x, &diffs, used_lag, used_lag);
    let fit = ols::fit(&y, &design).ok_or_else(|| {
        CointError::DegenerateInput(format!(
            "ADF regression with {} lags is singular",
            used_lag
        ))
    })?;

    let statistic = fit.t_value(0);
    debug!(
        "ADF regression: lag={} (max {}), nobs={}, stat={:.4}",
        used_lag, max_lag, fit.nobs, statistic
    );

    Ok(AdfOutcome {
        statistic,
        used_lag,
        nobs: fit.nobs,
        max_lag,
    })
}

/// Pick the lag minimizing the information criterion on a common sample
fn select_lag(
    x: &[f64],
    diffs: &[f64],
    max_lag: usize,
    selection: LagSelection,
) -> Result<usize, CointError> {
    let mut best: Option<(f64, usize)> = None;

    for lags in 0..=max_lag {
        let (y, design) = lagged_design(x, diffs, max_lag, lags);
        let Some(fit) = ols::fit(&y, &design) else {
            debug!("ADF lag {} skipped: singular design", lags);
            continue;
        };

        let ic = information_criterion(&fit, selection);
        if ic.is_nan() {
            continue;
        }

        // Strict comparison keeps the smallest lag on ties
        match best {
            Some((best_ic, _)) if ic >= best_ic => {}
            _ => best = Some((ic, lags)),
        }
    }

    best.map(|(_, lag)| lag).ok_or_else(|| {
        CointError::DegenerateInput("no ADF lag order could be fitted".to_string())
    })
}

fn information_criterion(fit: &OlsFit, selection: LagSelection) -> f64 {
    match selection {
        LagSelection::Bic => fit.bic(),
        _ => fit.aic(),
    }
}

/// Response dx[t] and design [x[t], dx[t-1], .., dx[t-lags]] for t = trim..
///
/// `diffs[t] = x[t+1] - x[t]`, so row t explains the move out of x[t].
fn lagged_design(x: &[f64], diffs: &[f64], trim: usize, lags: usize) -> (Vec<f64>, DMatrix<f64>) {
    let rows = diffs.len() - trim;
    let y = diffs[trim..].to_vec();
    let design = DMatrix::from_fn(rows, lags + 1, |r, c| {
        let t = trim + r;
        if c == 0 {
            x[t]
        } else {
            diffs[t - c]
        }
    });
    (y, design)
}
