//! coint-pairs - Engle-Granger cointegration for pairs trading
//!
//! Thin CLI over the library pipeline.

use anyhow::Result;

use coint_pairs::adapters::cli;

fn main() -> Result<()> {
    // Load .env file if it exists (COINT_ZSCORE_WINDOW and RUST_LOG may live there)
    dotenvy::dotenv().ok();

    let app = cli::init();
    cli::execute(app)
}
