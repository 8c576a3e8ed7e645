//! Pipeline Error Types
//!
//! Every failure the cointegration pipeline can surface. All of them are
//! detected synchronously from the inputs, so none is retryable.

use thiserror::Error;

/// Errors produced by the cointegration pipeline
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CointError {
    /// The two input series differ in length
    #[error("Length mismatch: series A has {len_a} observations, series B has {len_b}")]
    LengthMismatch { len_a: usize, len_b: usize },

    /// A regression could not be solved (zero denominator or singular design)
    #[error("Degenerate input: {0}")]
    DegenerateInput(String),

    /// Too few observations for the requested computation
    #[error("Insufficient data: expected at least {required} observations, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// Rolling window outside `2..=N`
    #[error("Invalid window: {window} (must be 2 <= window <= {len})")]
    InvalidWindow { window: usize, len: usize },

    /// NaN or infinite value in an input series
    #[error("Non-finite value in series {series} at index {index}")]
    NonFiniteInput { series: char, index: usize },

    /// Explicit ADF maximum lag exceeds what the sample supports
    #[error("Invalid lag: max_lag {max_lag} exceeds limit {limit} for this sample")]
    InvalidLag { max_lag: usize, limit: usize },
}

impl CointError {
    /// True when the error comes from the caller's inputs rather than from
    /// the numerical properties of the data
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            CointError::LengthMismatch { .. }
                | CointError::InvalidWindow { .. }
                | CointError::NonFiniteInput { .. }
                | CointError::InvalidLag { .. }
        )
    }
}
