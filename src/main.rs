//! Receipt Points CLI
//!
//! Runs the receipt points HTTP service, or scores a single receipt file.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --bind 127.0.0.1:9000 --workers 4
//! cargo run -- --log-format json serve
//! cargo run -- points receipt.json
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Log filter (default `info`)
//! - `RECEIPT_POINTS_BIND`, `RECEIPT_POINTS_WORKERS`, `RECEIPT_POINTS_LOG_FORMAT`:
//!   Defaults for the matching flags
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (listener bind failure, unreadable receipt file, etc.)

use receipt_points::cli::{self, Command};
use receipt_points::core::scoring::score_breakdown;
use receipt_points::{io, logging, server};
use std::path::Path;
use std::process;

fn main() {
    let args = cli::parse_args();

    if let Err(e) = logging::init_logging(args.log_format) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    let result = match args.command() {
        Command::Serve => serve(args.to_server_config()),
        Command::Points { file } => points(&file),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn serve(config: server::ServerConfig) -> Result<(), String> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(config.workers)
        .enable_all()
        .build()
        .map_err(|e| format!("Failed to create tokio runtime: {}", e))?;

    runtime
        .block_on(server::run(&config))
        .map_err(|e| e.to_string())
}

fn points(path: &Path) -> Result<(), String> {
    let receipt = io::read_receipt(path).map_err(|e| e.to_string())?;
    let mut output = std::io::stdout();
    io::write_breakdown(&score_breakdown(&receipt), &mut output).map_err(|e| e.to_string())
}
