//! chara-expand CLI entry point.
//!
//! Parses arguments, installs the tracing subscriber (respecting
//! `RUST_LOG`, with a default level derived from `--verbose`/`--quiet`),
//! executes the selected command, and prints a user-facing error with a
//! nonzero exit code on failure.

use chara_expand::cli::Cli;
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(error) = cli.execute() {
        eprintln!("{} {error:#}", "error:".red().bold());
        std::process::exit(1);
    }
}
