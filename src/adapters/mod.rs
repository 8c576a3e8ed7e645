//! Adapters Layer
//!
//! Transport shims around the pipeline. Only the CLI is provided; it reads
//! request bodies from JSON files and prints results as JSON.

pub mod cli;
