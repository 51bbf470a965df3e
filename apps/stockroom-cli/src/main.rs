//! # Stockroom Entry Point
//!
//! Parses flags and hands over to [`stockroom_cli::run`]. Nothing is kept
//! between runs: the inventory starts empty every time.

use std::process::ExitCode;

use clap::Parser;

use stockroom_cli::cli::Args;

fn main() -> ExitCode {
    let args = Args::parse();

    match stockroom_cli::run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("stockroom: {e}");
            ExitCode::FAILURE
        }
    }
}
