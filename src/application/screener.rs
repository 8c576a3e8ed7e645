//! Pair Screener
//!
//! Runs the cointegration pipeline over every unordered pair of named series
//! and ranks the cointegrated ones by zero crossings (more crossings = more
//! frequent mean reversion = more trade opportunities).
//!
//! Discovery only; sizing and allocation across pairs are out of scope.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{CointError, CointegrationResult, PairedSeries};
use crate::strategy::{AnalysisParams, CointegrationAnalyzer};

/// A cointegrated pair and its analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CointegratedPair {
    pub sym1: String,
    pub sym2: String,
    #[serde(flatten)]
    pub result: CointegrationResult,
}

/// A pair whose analysis failed
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedPair {
    pub sym1: String,
    pub sym2: String,
    pub error: CointError,
}

/// Summary of a screening run
#[derive(Debug, Clone, Default)]
pub struct ScreeningReport {
    /// Cointegrated pairs, most zero crossings first
    pub pairs: Vec<CointegratedPair>,
    /// Pairs that could not be analyzed
    pub skipped: Vec<SkippedPair>,
    /// Number of pairs tested
    pub tested: usize,
}

/// Screens a universe of series for cointegrated pairs
#[derive(Debug, Clone, Default)]
pub struct PairScreener {
    analyzer: CointegrationAnalyzer,
}

impl PairScreener {
    pub fn new(params: AnalysisParams) -> Self {
        Self {
            analyzer: CointegrationAnalyzer::new(params),
        }
    }

    /// Test each unordered pair once, in symbol order
    pub fn screen(&self, universe: &BTreeMap<String, Vec<f64>>) -> ScreeningReport {
        let symbols: Vec<&String> = universe.keys().collect();
        let mut report = ScreeningReport::default();

        tracing::info!("Screening {} symbols for cointegrated pairs", symbols.len());

        for (i, sym1) in symbols.iter().enumerate() {
            for sym2 in &symbols[i + 1..] {
                report.tested += 1;

                match self.analyze_pair(&universe[*sym1], &universe[*sym2]) {
                    Ok(result) if result.coint_flag => {
                        tracing::debug!(
                            "{}/{} cointegrated: t={}, p={}, crossings={}",
                            sym1, sym2, result.t_value, result.p_value, result.zero_crossing
                        );
                        report.pairs.push(CointegratedPair {
                            sym1: (*sym1).clone(),
                            sym2: (*sym2).clone(),
                            result,
                        });
                    }
                    Ok(_) => {}
                    Err(error) => {
                        tracing::warn!("Skipping {}/{}: {}", sym1, sym2, error);
                        report.skipped.push(SkippedPair {
                            sym1: (*sym1).clone(),
                            sym2: (*sym2).clone(),
                            error,
                        });
                    }
                }
            }
        }

        // Stable: ties keep symbol order
        report
            .pairs
            .sort_by(|a, b| b.result.zero_crossing.cmp(&a.result.zero_crossing));

        tracing::info!(
            "Screening done: {} tested, {} cointegrated, {} skipped",
            report.tested,
            report.pairs.len(),
            report.skipped.len()
        );

        report
    }

    fn analyze_pair(&self, a: &[f64], b: &[f64]) -> Result<CointegrationResult, CointError> {
        let pair = PairedSeries::from_slices(a, b)?;
        self.analyzer.analyze(&pair)
    }
}
