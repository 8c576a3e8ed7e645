//! coint-pairs - Engle-Granger cointegration for pairs trading
//!
//! Tests whether two price series are cointegrated and produces the
//! quantities a pairs strategy trades on: hedge ratio, spread zero
//! crossings and a rolling spread z-score.
//!
//! # Modules
//!
//! - `domain`: Core types (PairedSeries, CointegrationResult, CointError)
//! - `strategy`: Statistics (OLS, ADF, MacKinnon tables, z-score) and the pipeline
//! - `application`: Pair screening over a universe of series
//! - `config`: Configuration loading and validation
//! - `adapters`: CLI

pub mod domain;
pub mod strategy;
pub mod application;
pub mod config;
pub mod adapters;
