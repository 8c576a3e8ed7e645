//! Ordinary Least Squares
//!
//! Dense multi-regressor OLS over an `nalgebra` design matrix, solved through
//! the normal equations: beta = (X'X)^-1 X'y.
//!
//! Exposes what the unit-root machinery needs from a fit: coefficient
//! t-values, the Gaussian log-likelihood and the AIC/BIC built from it,
//! and centered R-squared.

use nalgebra::{DMatrix, DVector};
use std::f64::consts::PI;

/// A solved least-squares regression
#[derive(Debug, Clone)]
pub struct OlsFit {
    /// Estimated coefficients, one per design column
    pub params: Vec<f64>,
    /// Standard errors of the coefficients
    pub std_errors: Vec<f64>,
    /// Residuals y - X*beta
    pub residuals: Vec<f64>,
    /// Sum of squared residuals
    pub ssr: f64,
    /// Total sum of squares around the mean of y
    pub centered_tss: f64,
    /// Number of observations
    pub nobs: usize,
    /// Number of regressors (design columns)
    pub k: usize,
}

impl OlsFit {
    /// t-value of coefficient `j`
    pub fn t_value(&self, j: usize) -> f64 {
        self.params[j] / self.std_errors[j]
    }

    /// Gaussian log-likelihood at the OLS estimate
    pub fn log_likelihood(&self) -> f64 {
        let n = self.nobs as f64;
        -n / 2.0 * ((2.0 * PI).ln() + (self.ssr / n).ln() + 1.0)
    }

    /// Akaike information criterion: -2 llf + 2k
    pub fn aic(&self) -> f64 {
        -2.0 * self.log_likelihood() + 2.0 * self.k as f64
    }

    /// Bayesian information criterion: -2 llf + ln(n) k
    pub fn bic(&self) -> f64 {
        -2.0 * self.log_likelihood() + (self.nobs as f64).ln() * self.k as f64
    }

    /// 1 - SSR / TSS; meaningful when the design includes a constant
    pub fn centered_r_squared(&self) -> f64 {
        1.0 - self.ssr / self.centered_tss
    }
}

/// Fit `y` on the columns of `x`.
///
/// Returns `None` when the design is not full rank or leaves no residual
/// degrees of freedom (n <= k).
pub fn fit(y: &[f64], x: &DMatrix<f64>) -> Option<OlsFit> {
    let (n, k) = x.shape();
    if k == 0 || y.len() != n || n <= k {
        return None;
    }

    let y_vec = DVector::from_column_slice(y);
    let xt = x.transpose();
    let xtx_inv = (&xt * x).try_inverse()?;
    let beta = &xtx_inv * (&xt * &y_vec);

    let residuals = &y_vec - x * &beta;
    let ssr = residuals.dot(&residuals);
    let sigma2 = ssr / (n - k) as f64;

    let std_errors = (0..k)
        .map(|j| (sigma2 * xtx_inv[(j, j)]).sqrt())
        .collect();

    let mean_y = y.iter().sum::<f64>() / n as f64;
    let centered_tss = y.iter().map(|v| (v - mean_y).powi(2)).sum();

    Some(OlsFit {
        params: beta.iter().copied().collect(),
        std_errors,
        residuals: residuals.iter().copied().collect(),
        ssr,
        centered_tss,
        nobs: n,
        k,
    })
}

/// Design matrix `[1, x]` for a single regressor with intercept
pub fn with_constant(x: &[f64]) -> DMatrix<f64> {
    DMatrix::from_fn(x.len(), 2, |i, j| if j == 0 { 1.0 } else { x[i] })
}
