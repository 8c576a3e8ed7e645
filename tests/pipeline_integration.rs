//! Cointegration Pipeline Integration Tests
//!
//! Drive the public API end to end:
//! 1. Request JSON -> PairedSeries -> CointegrationAnalyzer -> result JSON
//! 2. Degenerate and malformed inputs surface as typed errors
//! 3. PairScreener ranking over a small universe
//!
//! All data is generated from fixed seeds.

use std::collections::BTreeMap;

use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use coint_pairs::application::PairScreener;
use coint_pairs::domain::{CointError, CointegrationRequest, CointegrationResult, PairedSeries};
use coint_pairs::strategy::{
    compute_cointegration, compute_spread, AnalysisParams, CointegrationAnalyzer, LagSelection,
};

// ============================================================================
// Test Fixtures
// ============================================================================

fn random_walk(rng: &mut StdRng, n: usize, start: f64) -> Vec<f64> {
    let mut level = start;
    (0..n)
        .map(|_| {
            level += rng.gen_range(-1.0..1.0);
            level
        })
        .collect()
}

/// A = k * B + bounded noise, with B a random walk
fn cointegrated_pair(n: usize, k: f64, seed: u64) -> (Vec<f64>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let b = random_walk(&mut rng, n, 100.0);
    let a = b.iter().map(|x| k * x + rng.gen_range(-1.0..1.0)).collect();
    (a, b)
}

/// 30-point pair with known test output (t = -5.39 at 2 lags)
fn reference_pair() -> (Vec<f64>, Vec<f64>) {
    let a = vec![
        77.5, 78.08, 77.56, 78.46, 78.22, 80.62, 81.13, 81.65, 80.81, 79.76, 81.19, 82.33,
        81.9, 82.04, 81.0, 82.14, 82.4, 81.07, 79.88, 80.16, 81.43, 81.59, 81.56, 81.41,
        82.24, 83.21, 82.18, 84.32, 84.34, 85.97,
    ];
    let b = vec![
        49.44, 50.41, 50.15, 50.0, 50.12, 51.12, 51.9, 52.07, 51.81, 51.1, 51.56, 52.26,
        52.95, 52.79, 51.96, 52.4, 52.27, 51.94, 51.56, 51.36, 51.93, 52.29, 52.19, 51.77,
        52.48, 52.96, 53.23, 53.82, 54.04, 54.99,
    ];
    (a, b)
}

fn bits(values: &[f64]) -> Vec<u64> {
    values.iter().map(|v| v.to_bits()).collect()
}

// ============================================================================
// Pipeline
// ============================================================================

#[test]
fn test_cointegrated_pair_end_to_end() {
    let (a, b) = cointegrated_pair(250, 1.8, 7);
    let body = serde_json::json!({ "series1": a, "series2": b, "window": 21 }).to_string();

    let request: CointegrationRequest = serde_json::from_str(&body).unwrap();
    let (pair, window) = request.into_pair().unwrap();
    let params = AnalysisParams::default().with_window(window.unwrap());
    let result = CointegrationAnalyzer::new(params).analyze(&pair).unwrap();

    assert!(result.coint_flag);
    assert!(result.t_value < result.critical_value);
    assert_relative_eq!(result.hedge_ratio, 1.8, epsilon = 0.02);
    assert!(result.zero_crossing > 10);

    let zscores = result.zscore_list.as_ref().unwrap();
    assert_eq!(zscores.len(), 250);
    assert!(zscores[..20].iter().all(|z| z.is_nan()));
    assert!(zscores[20..].iter().all(|z| z.is_finite()));
}

#[test]
fn test_reference_pair_result() {
    let (a, b) = reference_pair();
    let result = compute_cointegration(&a, &b, 5).unwrap();

    assert!(result.coint_flag);
    assert_eq!(result.t_value, -5.39);
    assert_eq!(result.p_value, 0.0);
    assert_eq!(result.critical_value, -3.55);
    // no-intercept hedge ratio 1.56276...
    assert_eq!(result.hedge_ratio, 1.56);
    assert_eq!(result.zero_crossing, 16);
}

#[test]
fn test_repeated_runs_are_bit_identical() {
    let (a, b) = cointegrated_pair(120, 0.7, 11);

    let first = compute_cointegration(&a, &b, 15).unwrap();
    let second = compute_cointegration(&a, &b, 15).unwrap();

    assert_eq!(first.coint_flag, second.coint_flag);
    assert_eq!(first.p_value.to_bits(), second.p_value.to_bits());
    assert_eq!(first.t_value.to_bits(), second.t_value.to_bits());
    assert_eq!(first.critical_value.to_bits(), second.critical_value.to_bits());
    assert_eq!(first.hedge_ratio.to_bits(), second.hedge_ratio.to_bits());
    assert_eq!(first.zero_crossing, second.zero_crossing);
    assert_eq!(
        bits(first.zscore_list.as_ref().unwrap()),
        bits(second.zscore_list.as_ref().unwrap())
    );
}

#[test]
fn test_exact_multiple_is_perfectly_cointegrated() {
    let b: Vec<f64> = (0..40).map(|i| 10.0 + i as f64 + (i as f64).sin()).collect();
    let a: Vec<f64> = b.iter().map(|x| 2.0 * x).collect();

    let result = compute_cointegration(&a, &b, 5).unwrap();

    assert_eq!(result.hedge_ratio, 2.0);
    assert_eq!(result.t_value, f64::NEG_INFINITY);
    assert_eq!(result.p_value, 0.0);
    assert!(result.coint_flag);
    // Spread is identically zero: no crossings, every z-score is 0/0
    assert_eq!(result.zero_crossing, 0);
    assert!(result.zscore_list.unwrap().iter().all(|z| z.is_nan()));
}

#[test]
fn test_detailed_spread_matches_standalone_spread() {
    let (a, b) = cointegrated_pair(90, 1.2, 3);
    let pair = PairedSeries::new(a.clone(), b.clone()).unwrap();
    let analysis = CointegrationAnalyzer::default().analyze_detailed(&pair).unwrap();

    let spread = compute_spread(&a, &b, analysis.hedge_ratio).unwrap();
    assert_eq!(bits(&spread), bits(&analysis.spread));
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_length_mismatch_rejected() {
    let result = compute_cointegration(&[1.0; 30], &[1.0; 29], 5);
    assert_eq!(result, Err(CointError::LengthMismatch { len_a: 30, len_b: 29 }));
}

#[test]
fn test_constant_series_is_degenerate() {
    let mut rng = StdRng::seed_from_u64(2);
    let a = random_walk(&mut rng, 30, 50.0);
    let b = vec![5.0; 30];

    let result = compute_cointegration(&a, &b, 5);
    assert!(matches!(result, Err(CointError::DegenerateInput(_))));
}

#[test]
fn test_non_finite_values_rejected() {
    let mut a: Vec<f64> = (0..30).map(|i| i as f64).collect();
    let b = a.clone();
    a[12] = f64::NAN;

    let result = compute_cointegration(&a, &b, 5);
    assert_eq!(result, Err(CointError::NonFiniteInput { series: 'A', index: 12 }));
}

#[test]
fn test_invalid_window_rejected() {
    let (a, b) = cointegrated_pair(40, 1.0, 1);
    assert_eq!(
        compute_cointegration(&a, &b, 1),
        Err(CointError::InvalidWindow { window: 1, len: 40 })
    );
    assert_eq!(
        compute_cointegration(&a, &b, 41),
        Err(CointError::InvalidWindow { window: 41, len: 40 })
    );
}

#[test]
fn test_spread_length_mismatch() {
    assert!(matches!(
        compute_spread(&[1.0, 2.0], &[1.0], 1.0),
        Err(CointError::LengthMismatch { .. })
    ));
}

// ============================================================================
// Serialization
// ============================================================================

#[test]
fn test_result_json_shape() {
    let (a, b) = cointegrated_pair(60, 1.1, 19);
    let result = compute_cointegration(&a, &b, 10).unwrap();
    let json = serde_json::to_value(&result).unwrap();

    for key in [
        "cointFlag", "pValue", "tValue", "criticalValue", "hedgeRatio", "zeroCrossing", "zscoreList",
    ] {
        assert!(json.get(key).is_some(), "missing key {}", key);
    }
    // Leading NaN z-scores serialize as null
    assert!(json["zscoreList"][0].is_null());
    assert!(json["zscoreList"][59].is_number());
    assert_eq!(json["zeroCrossing"], result.zero_crossing);
}

#[test]
fn test_collinear_result_json_reads_back() {
    let b: Vec<f64> = (0..40).map(|i| 10.0 + i as f64 + (i as f64).sin()).collect();
    let a: Vec<f64> = b.iter().map(|x| 2.0 * x).collect();
    let result = compute_cointegration(&a, &b, 5).unwrap();

    let json = serde_json::to_string(&result).unwrap();
    let parsed: CointegrationResult = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.t_value, f64::NEG_INFINITY);
    assert_eq!(parsed.coint_flag, result.coint_flag);
    assert_eq!(parsed.hedge_ratio, 2.0);
    assert!(parsed.zscore_list.unwrap().iter().all(|z| z.is_nan()));
}

// ============================================================================
// Screening
// ============================================================================

#[test]
fn test_screener_finds_constructed_pair() {
    let (a, b) = cointegrated_pair(200, 1.5, 23);
    let mut universe = BTreeMap::new();
    universe.insert("AAA".to_string(), a);
    universe.insert("BBB".to_string(), b);
    universe.insert("SHORT".to_string(), vec![1.0, 2.0, 3.0]);

    // Under AIC this draw picks 15 lags and a weak statistic (-3.13); BIC
    // keeps 0 lags and the iid noise gives a decisive one
    let params = AnalysisParams::default().with_lag_selection(LagSelection::Bic);
    let report = PairScreener::new(params).screen(&universe);

    assert_eq!(report.tested, 3);
    assert_eq!(report.skipped.len(), 2);
    assert_eq!(report.pairs.len(), 1);
    assert_eq!(report.pairs[0].sym1, "AAA");
    assert_eq!(report.pairs[0].sym2, "BBB");
}

#[test]
fn test_screener_matches_single_pair_analysis() {
    let (a, b) = reference_pair();
    let mut universe = BTreeMap::new();
    universe.insert("AAA".to_string(), a.clone());
    universe.insert("BBB".to_string(), b.clone());

    let report = PairScreener::default().screen(&universe);
    let direct = compute_cointegration(&a, &b, 21).unwrap();

    assert_eq!(report.pairs.len(), 1);
    let screened = &report.pairs[0].result;
    assert_eq!(screened.t_value, direct.t_value);
    assert_eq!(screened.p_value, direct.p_value);
    assert_eq!(screened.hedge_ratio, direct.hedge_ratio);
    assert_eq!(screened.zero_crossing, direct.zero_crossing);
    assert_eq!(
        bits(screened.zscore_list.as_ref().unwrap()),
        bits(direct.zscore_list.as_ref().unwrap())
    );
}
