//! CLI Command Handlers
//!
//! Implementation of all CLI commands. Inputs are JSON files shaped like the
//! HTTP bodies the trading bot posts; results are printed to stdout as JSON
//! and logs go to stderr.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::application::PairScreener;
use crate::config::{load_config, Config, ZSCORE_WINDOW_ENV};
use crate::domain::{CointegrationRequest, SpreadRequest};
use crate::strategy::{compute_spread, AnalysisParams, CointegrationAnalyzer};

/// coint-pairs - Engle-Granger cointegration for pairs trading
#[derive(Parser, Debug)]
#[command(
    name = "coint-pairs",
    version = env!("CARGO_PKG_VERSION"),
    author = env!("CARGO_PKG_AUTHORS"),
    about = "Engle-Granger cointegration for pairs trading",
    long_about = "Tests two price series for cointegration and reports the hedge ratio, \
                  spread zero crossings and rolling spread z-score used to trade the pair."
)]
pub struct CliApp {
    /// The command to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Test a pair of series for cointegration
    Analyze(AnalyzeCmd),

    /// Compute the spread for a given hedge ratio
    Spread(SpreadCmd),

    /// Screen a universe of series for cointegrated pairs
    Scan(ScanCmd),
}

/// Test a pair for cointegration
#[derive(Parser, Debug)]
pub struct AnalyzeCmd {
    /// JSON file: {"series1": [...], "series2": [...], "window": 21}
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Path to configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override z-score window
    #[arg(short, long, value_name = "PERIODS")]
    pub window: Option<usize>,

    /// Omit the z-score series from the output
    #[arg(long)]
    pub no_zscore: bool,

    /// Include unrounded test results and the spread series
    #[arg(long)]
    pub detailed: bool,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,
}

/// Compute a spread
#[derive(Parser, Debug)]
pub struct SpreadCmd {
    /// JSON file: {"series1": [...], "series2": [...], "hedgeRatio": 1.2}
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,
}

/// Screen for cointegrated pairs
#[derive(Parser, Debug)]
pub struct ScanCmd {
    /// JSON file: {"BTC-USD": [...], "ETH-USD": [...], ...}
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Path to configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override z-score window
    #[arg(short, long, value_name = "PERIODS")]
    pub window: Option<usize>,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,
}

impl Command {
    fn config_path(&self) -> Option<&Path> {
        match self {
            Command::Analyze(cmd) => cmd.config.as_deref(),
            Command::Scan(cmd) => cmd.config.as_deref(),
            Command::Spread(_) => None,
        }
    }
}

/// Execute the CLI command
pub fn execute(app: CliApp) -> Result<()> {
    let config = app.command.config_path().map(read_config).transpose()?;

    // Initialize logging based on flags, falling back to the config level
    let level = config.as_ref().map_or("warn", |c| c.logging.level.as_str());
    init_logging(app.verbose, app.debug, level)?;

    match app.command {
        Command::Analyze(cmd) => analyze_command(cmd, config.as_ref()),
        Command::Spread(cmd) => spread_command(cmd),
        Command::Scan(cmd) => scan_command(cmd, config.as_ref()),
    }
}

/// Initialize logging system
fn init_logging(verbose: bool, debug: bool, default_level: &str) -> Result<()> {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Handle analyze command
fn analyze_command(cmd: AnalyzeCmd, config: Option<&Config>) -> Result<()> {
    let request: CointegrationRequest = read_json(&cmd.input)?;
    let (pair, request_window) = request
        .into_pair()
        .context("Invalid cointegration request")?;

    let mut params = resolve_params(config, cmd.window.or(request_window))?;
    if cmd.no_zscore {
        params = params.without_zscore();
    }

    tracing::info!(
        "Analyzing pair: {} observations, window {}, lag selection {:?}",
        pair.len(),
        params.zscore_window,
        params.lag_selection
    );

    let analyzer = CointegrationAnalyzer::new(params);
    if cmd.detailed {
        let analysis = analyzer.analyze_detailed(&pair)?;
        print_json(&analysis, cmd.pretty)
    } else {
        let result = analyzer.analyze(&pair)?;
        print_json(&result, cmd.pretty)
    }
}

/// Handle spread command
fn spread_command(cmd: SpreadCmd) -> Result<()> {
    let request: SpreadRequest = read_json(&cmd.input)?;
    let spread = compute_spread(&request.series1, &request.series2, request.hedge_ratio)?;
    print_json(&spread, cmd.pretty)
}

/// Handle scan command
fn scan_command(cmd: ScanCmd, config: Option<&Config>) -> Result<()> {
    let universe: BTreeMap<String, Vec<f64>> = read_json(&cmd.input)?;
    let params = resolve_params(config, cmd.window)?;

    let report = PairScreener::new(params).screen(&universe);
    if !report.skipped.is_empty() {
        tracing::warn!("{} of {} pairs could not be analyzed", report.skipped.len(), report.tested);
    }

    print_json(&report.pairs, cmd.pretty)
}

fn read_config(path: &Path) -> Result<Config> {
    let path = expand_path(path);
    load_config(&path)
        .with_context(|| format!("Failed to load configuration from {}", path.display()))
}

/// Config file (or defaults + env override), then the explicit window
fn resolve_params(config: Option<&Config>, window: Option<usize>) -> Result<AnalysisParams> {
    let mut params = match config {
        Some(config) => config.analysis_params()?,
        None => default_params(),
    };

    if let Some(window) = window {
        params = params.with_window(window);
    }

    params.validate()?;
    Ok(params)
}

fn default_params() -> AnalysisParams {
    let params = AnalysisParams::default();
    match std::env::var(ZSCORE_WINDOW_ENV).ok().and_then(|v| v.trim().parse().ok()) {
        Some(window) => params.with_window(window),
        None => params,
    }
}

/// Expand `~` in user-supplied paths
fn expand_path(path: &Path) -> PathBuf {
    PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).to_string())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let path = expand_path(path);
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read input file {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON from {}", path.display()))
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let output = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", output);
    Ok(())
}
