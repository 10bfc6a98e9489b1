// src/lib.rs

pub mod cli;
pub mod client;
pub mod config;
pub mod constants;
pub mod downloader;
pub mod error;
pub mod extractor;
pub mod logging;
pub mod models;
pub mod naming;
pub mod symbols;
pub mod ui;

mod workflows;

use crate::{cli::Cli, error::AppResult};
use log::debug;

/// Dispatches a parsed command line to the matching workflow. The mode
/// argument group makes the two arms mutually exclusive and mandatory.
pub async fn run_from_cli(args: &Cli) -> AppResult<()> {
    debug!("arguments: {:?}", args);
    if args.config_file.is_some() {
        workflows::run_batch(args).await
    } else {
        workflows::run_single(args).await
    }
}
