//! Result Records
//!
//! Output types of the pipeline. `CointegrationResult` serializes with the
//! camelCase keys downstream consumers expect (`cointFlag`, `pValue`, ...).

use serde::{Deserialize, Deserializer, Serialize};

/// Critical values of the cointegration test statistic
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CriticalValues {
    #[serde(rename = "1%")]
    pub one_pct: f64,
    #[serde(rename = "5%")]
    pub five_pct: f64,
    #[serde(rename = "10%")]
    pub ten_pct: f64,
}

/// Outcome of the Engle-Granger stationarity test (unrounded)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationarityTestResult {
    /// ADF t-statistic on the cointegrating residual
    #[serde(deserialize_with = "null_as_neg_infinity")]
    pub test_statistic: f64,
    /// MacKinnon approximate p-value
    #[serde(deserialize_with = "null_as_nan")]
    pub p_value: f64,
    pub critical_values: CriticalValues,
    /// Number of lagged differences selected for the ADF regression
    pub used_lag: usize,
    /// Observations in the final ADF regression
    pub nobs: usize,
}

/// Terminal artifact of the pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CointegrationResult {
    pub coint_flag: bool,
    /// Rounded to 2 decimals
    #[serde(deserialize_with = "null_as_nan")]
    pub p_value: f64,
    /// Rounded to 2 decimals; -inf (`null` in JSON) for perfectly collinear pairs
    #[serde(deserialize_with = "null_as_neg_infinity")]
    pub t_value: f64,
    /// 5% critical value, rounded to 2 decimals
    pub critical_value: f64,
    /// Rounded to 2 decimals
    pub hedge_ratio: f64,
    pub zero_crossing: usize,
    /// Rolling z-score of the spread; leading entries are NaN (`null` in JSON)
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "nulls_as_nan"
    )]
    pub zscore_list: Option<Vec<f64>>,
}

// serde_json writes non-finite floats as `null`; these read them back.

fn null_as_nan<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Option::<f64>::deserialize(deserializer).map(|v| v.unwrap_or(f64::NAN))
}

/// The only non-finite statistic the test produces is -inf
fn null_as_neg_infinity<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Option::<f64>::deserialize(deserializer).map(|v| v.unwrap_or(f64::NEG_INFINITY))
}

fn nulls_as_nan<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Vec<f64>>, D::Error> {
    Option::<Vec<Option<f64>>>::deserialize(deserializer).map(|list| {
        list.map(|values| values.into_iter().map(|v| v.unwrap_or(f64::NAN)).collect())
    })
}

/// Round to 2 decimal places.
///
/// Rounds the exact binary value with ties to even, so 0.125 -> 0.12 and
/// 2.675 (stored just below 2.675) -> 2.67. Non-finite values pass through.
pub fn round2(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{:.2}", value).parse().unwrap_or(value)
}
