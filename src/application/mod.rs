//! Application Layer
//!
//! Use cases built on the cointegration pipeline.

pub mod screener;

pub use screener::{PairScreener, CointegratedPair, SkippedPair, ScreeningReport};
