// src/main.rs

use clap::Parser;
use fitvid_dl::{cli::Cli, logging, run_from_cli, symbols};
use std::process;

#[tokio::main]
async fn main() {
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let args = Cli::parse();
    logging::init(args.log_level);

    if let Err(e) = run_from_cli(&args).await {
        eprintln!("\n{} {}", *symbols::ERROR, e);
        process::exit(1);
    }
}
