//! Spread Builder
//!
//! spread[i] = series_a[i] - hedge_ratio * series_b[i]

use crate::domain::CointError;

/// Build the residual spread of A against B for a given hedge ratio
pub fn compute_spread(
    series_a: &[f64],
    series_b: &[f64],
    hedge_ratio: f64,
) -> Result<Vec<f64>, CointError> {
    if series_a.len() != series_b.len() {
        return Err(CointError::LengthMismatch {
            len_a: series_a.len(),
            len_b: series_b.len(),
        });
    }

    Ok(series_a
        .iter()
        .zip(series_b)
        .map(|(a, b)| a - hedge_ratio * b)
        .collect())
}
