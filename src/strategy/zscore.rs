//! Rolling Z-Score
//!
//! Trailing-window normalization of the spread:
//!
//!   z[i] = (x[i] - rolling_mean) / rolling_std
//!
//! over the `window` observations ending at i (inclusive), with sample
//! standard deviation (denominator window - 1). The first window - 1
//! entries are NaN. A flat window divides by zero and yields NaN or +-inf.

use crate::domain::CointError;

/// Compute the rolling z-score of `series`
pub fn rolling_zscore(series: &[f64], window: usize) -> Result<Vec<f64>, CointError> {
    validate_window(window, series.len())?;

    let mut result = vec![f64::NAN; window - 1];
    result.reserve(series.len() + 1 - window);

    for end in window..=series.len() {
        let slice = &series[end - window..end];
        let mean = rolling_mean(slice);
        let std_dev = rolling_std(slice, mean);
        let current = series[end - 1];
        result.push((current - mean) / std_dev);
    }

    Ok(result)
}

/// Window must satisfy 2 <= window <= len
pub fn validate_window(window: usize, len: usize) -> Result<(), CointError> {
    if window < 2 || window > len {
        return Err(CointError::InvalidWindow { window, len });
    }
    Ok(())
}

fn rolling_mean(slice: &[f64]) -> f64 {
    slice.iter().sum::<f64>() / slice.len() as f64
}

/// Sample standard deviation (Bessel-corrected)
fn rolling_std(slice: &[f64], mean: f64) -> f64 {
    let variance = slice
        .iter()
        .map(|&x| {
            let diff = x - mean;
            diff * diff
        })
        .sum::<f64>()
        / (slice.len() - 1) as f64;

    variance.sqrt()
}
