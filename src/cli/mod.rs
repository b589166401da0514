//! Command-line interface for chara-expand.
//!
//! Each command is implemented as a separate module with its own argument
//! struct and execution logic:
//!
//! - `expand` - expand the placeholder tags in a prompt
//! - `list` - list the namespaces and keys under the data directory
//! - `validate` - check every dictionary file for problems
//!
//! # Usage
//!
//! ```bash
//! # Expand a prompt with a fixed seed
//! chara-expand expand "@characters:alice masterpiece" --seed 12345
//!
//! # Produce a batch of four expansions with consecutive seeds
//! chara-expand expand "@characters:random" --seed 100 --count 4
//!
//! # Inspect the dictionaries
//! chara-expand list --keys
//! chara-expand validate
//! ```
//!
//! # Global options
//!
//! All commands share `--data-dir` (also settable through the
//! `CHARA_EXPAND_DATA_DIR` environment variable) and the mutually
//! exclusive `--verbose`/`--quiet` verbosity switches.

mod expand;
mod list;
mod validate;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::constants::DEFAULT_DATA_DIR;

/// Top-level CLI for the chara-expand prompt expander.
#[derive(Parser)]
#[command(
    name = "chara-expand",
    about = "Expand @namespace:key placeholders in image-generation prompts",
    version,
    long_about = "chara-expand rewrites prompts for image-generation tools by replacing \
                  @namespace:key placeholders with text from YAML dictionaries, \
                  deterministically reproducible from a seed."
)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    command: Commands,

    /// Directory containing the dictionary files.
    #[arg(
        short = 'd',
        long,
        global = true,
        default_value = DEFAULT_DATA_DIR,
        env = "CHARA_EXPAND_DATA_DIR"
    )]
    data_dir: PathBuf,

    /// Enable verbose output (shows per-tag expansion details).
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Expand the placeholder tags in a prompt.
    Expand(expand::ExpandCommand),

    /// List the namespaces (and optionally keys) under the data directory.
    List(list::ListCommand),

    /// Validate every dictionary file under the data directory.
    Validate(validate::ValidateCommand),
}

impl Cli {
    /// Default logging filter derived from the verbosity flags, used when
    /// `RUST_LOG` is not set.
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        }
    }

    /// Execute the selected command.
    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Expand(cmd) => cmd.execute(&self.data_dir),
            Commands::List(cmd) => cmd.execute(&self.data_dir),
            Commands::Validate(cmd) => cmd.execute(&self.data_dir),
        }
    }
}
