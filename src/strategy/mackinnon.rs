//! MacKinnon Response Surfaces
//!
//! Distribution of the Engle-Granger cointegration t-statistic for two
//! series with a constant in the cointegrating regression.
//!
//! - p-values: MacKinnon (1994) "Approximate asymptotic distribution functions
//!   for unit-root and cointegration tests", normal CDF of a polynomial in tau,
//!   with separate small-p and large-p fits split at tau*.
//! - critical values: MacKinnon (2010) "Critical values for cointegration
//!   tests", crit(T) = b0 + b1/T + b2/T^2.
//!
//! Only the constant-trend, N = 2 rows of the published tables are needed.

use statrs::distribution::{ContinuousCDF, Normal};

use crate::domain::CriticalValues;

/// Above this statistic the p-value is 1
const TAU_MAX: f64 = 0.92;
/// Below this statistic the p-value is 0
const TAU_MIN: f64 = -18.86;
/// Split point between the small-p and large-p polynomials
const TAU_STAR: f64 = -2.62;

/// Small-p polynomial coefficients, ascending powers of tau
const TAU_SMALL_P: [f64; 3] = [2.92, 1.5012, 3.9796e-2];
/// Large-p polynomial coefficients, ascending powers of tau
const TAU_LARGE_P: [f64; 4] = [2.1945, 6.4695e-1, -2.9198e-1, -4.2377e-2];

/// Finite-sample critical value surfaces (b0, b1, b2) at 1%, 5%, 10%
const CRIT_1PCT: [f64; 3] = [-3.89644, -10.9519, -22.527];
const CRIT_5PCT: [f64; 3] = [-3.33613, -6.1101, -6.823];
const CRIT_10PCT: [f64; 3] = [-3.04445, -4.2412, -2.720];

/// Approximate p-value of a cointegration t-statistic
pub fn p_value(tau: f64) -> f64 {
    if tau.is_nan() {
        return f64::NAN;
    }
    if tau > TAU_MAX {
        return 1.0;
    }
    if tau < TAU_MIN {
        return 0.0;
    }

    let z = if tau <= TAU_STAR {
        polyval(&TAU_SMALL_P, tau)
    } else {
        polyval(&TAU_LARGE_P, tau)
    };

    standard_normal_cdf(z)
}

/// Critical values for a sample of `nobs` observations
pub fn critical_values(nobs: usize) -> CriticalValues {
    let inv = 1.0 / nobs as f64;
    CriticalValues {
        one_pct: polyval(&CRIT_1PCT, inv),
        five_pct: polyval(&CRIT_5PCT, inv),
        ten_pct: polyval(&CRIT_10PCT, inv),
    }
}

/// Evaluate sum c_i x^i (Horner)
fn polyval(coefs: &[f64], x: f64) -> f64 {
    coefs.iter().rev().fold(0.0, |acc, c| acc * x + c)
}

fn standard_normal_cdf(z: f64) -> f64 {
    match Normal::new(0.0, 1.0) {
        Ok(normal) => normal.cdf(z),
        // Parameters are constant and valid
        Err(_) => f64::NAN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_asymptotic_five_pct_maps_to_five_pct() {
        // tau at the asymptotic 5% critical value
        assert_relative_eq!(p_value(-3.33613), 0.05, epsilon = 1e-3);
    }

    #[test]
    fn test_p_value_bounds() {
        assert_eq!(p_value(1.5), 1.0);
        assert_eq!(p_value(-25.0), 0.0);
        assert_eq!(p_value(f64::NEG_INFINITY), 0.0);
        assert!(p_value(f64::NAN).is_nan());
    }

    #[test]
    fn test_p_value_monotone() {
        let taus = [-6.0, -4.0, -3.0, -2.62, -2.0, -1.0, 0.0, 0.5];
        let ps: Vec<f64> = taus.iter().map(|&t| p_value(t)).collect();
        for w in ps.windows(2) {
            assert!(w[0] < w[1], "p-values must increase with tau: {:?}", ps);
        }
    }

    #[test]
    fn test_p_value_continuous_at_split() {
        let below = p_value(TAU_STAR);
        let above = p_value(TAU_STAR + 1e-9);
        assert!((below - above).abs() < 0.01);
    }

    #[test]
    fn test_critical_values_finite_sample() {
        let cv = critical_values(99);
        let t = 99.0_f64;
        assert_relative_eq!(cv.five_pct, -3.33613 - 6.1101 / t - 6.823 / (t * t), epsilon = 1e-12);
        assert_relative_eq!(cv.one_pct, -3.89644 - 10.9519 / t - 22.527 / (t * t), epsilon = 1e-12);
        assert_relative_eq!(cv.ten_pct, -3.04445 - 4.2412 / t - 2.720 / (t * t), epsilon = 1e-12);
        assert!(cv.one_pct < cv.five_pct && cv.five_pct < cv.ten_pct);
    }

    #[test]
    fn test_critical_values_approach_asymptote() {
        let cv = critical_values(1_000_000);
        assert_relative_eq!(cv.five_pct, -3.33613, epsilon = 1e-4);
    }

    #[test]
    fn test_polyval() {
        // 1 + 2x + 3x^2 at x = 2
        assert_eq!(polyval(&[1.0, 2.0, 3.0], 2.0), 17.0);
    }
}
