//! Paired Series
//!
//! The single boundary type for the pipeline: two index-aligned `f64`
//! series validated once on construction.

use crate::domain::error::CointError;

/// Minimum length of a paired series
pub const MIN_SERIES_LEN: usize = 2;

/// Two equal-length, finite observation series (A is regressed on B)
#[derive(Debug, Clone, PartialEq)]
pub struct PairedSeries {
    series_a: Vec<f64>,
    series_b: Vec<f64>,
}

impl PairedSeries {
    /// Validate and wrap two series
    pub fn new(series_a: Vec<f64>, series_b: Vec<f64>) -> Result<Self, CointError> {
        if series_a.len() != series_b.len() {
            return Err(CointError::LengthMismatch {
                len_a: series_a.len(),
                len_b: series_b.len(),
            });
        }

        if series_a.len() < MIN_SERIES_LEN {
            return Err(CointError::InsufficientData {
                required: MIN_SERIES_LEN,
                actual: series_a.len(),
            });
        }

        check_finite(&series_a, 'A')?;
        check_finite(&series_b, 'B')?;

        Ok(Self { series_a, series_b })
    }

    /// Validate and copy two borrowed series
    pub fn from_slices(series_a: &[f64], series_b: &[f64]) -> Result<Self, CointError> {
        Self::new(series_a.to_vec(), series_b.to_vec())
    }

    pub fn series_a(&self) -> &[f64] {
        &self.series_a
    }

    pub fn series_b(&self) -> &[f64] {
        &self.series_b
    }

    /// Number of observations (N)
    pub fn len(&self) -> usize {
        self.series_a.len()
    }

    /// Always false once constructed; kept for clippy's `len_without_is_empty`
    pub fn is_empty(&self) -> bool {
        self.series_a.is_empty()
    }

    /// Consume into the raw (A, B) vectors
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.series_a, self.series_b)
    }
}

fn check_finite(series: &[f64], label: char) -> Result<(), CointError> {
    match series.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(CointError::NonFiniteInput { series: label, index }),
        None => Ok(()),
    }
}
