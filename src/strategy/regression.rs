//! Hedge Ratio Estimation
//!
//! Single-factor least squares of series A on series B with no intercept:
//! minimize sum (a_i - beta * b_i)^2, giving beta = sum(a_i * b_i) / sum(b_i^2).
//!
//! This is deliberately separate from the intercept-bearing regression inside
//! the Engle-Granger test; the two coefficients generally differ.

use crate::domain::CointError;

/// Estimate the no-intercept hedge ratio of `series_a` on `series_b`
pub fn hedge_ratio(series_a: &[f64], series_b: &[f64]) -> Result<f64, CointError> {
    if series_a.len() != series_b.len() {
        return Err(CointError::LengthMismatch {
            len_a: series_a.len(),
            len_b: series_b.len(),
        });
    }

    if series_a.len() < 2 {
        return Err(CointError::DegenerateInput(format!(
            "hedge ratio needs at least 2 observations, got {}",
            series_a.len()
        )));
    }

    let sum_bb: f64 = series_b.iter().map(|b| b * b).sum();
    if sum_bb == 0.0 {
        return Err(CointError::DegenerateInput(
            "series B is all zeros; hedge ratio undefined".to_string(),
        ));
    }

    let sum_ab: f64 = series_a.iter().zip(series_b).map(|(a, b)| a * b).sum();

    Ok(sum_ab / sum_bb)
}
