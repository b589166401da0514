//! Expand a prompt from the command line.
//!
//! Mirrors what the host image-generation pipeline does for a batch: each
//! of the `--count` expansions uses the next consecutive seed, so image N
//! of a batch is reproducible on its own by passing `seed + N`.

use anyhow::{Result, bail};
use clap::Args;
use std::path::Path;

use crate::expand::Expander;

/// Command to expand the placeholder tags in a prompt.
#[derive(Args)]
pub struct ExpandCommand {
    /// Prompt text containing `@namespace:key` placeholders.
    prompt: String,

    /// Seed for deterministic random selection.
    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    /// Number of expansions to produce, using consecutive seeds.
    #[arg(long, default_value_t = 1)]
    count: u32,

    /// Output format: text or json.
    #[arg(long, default_value = "text")]
    format: String,
}

impl ExpandCommand {
    /// Run the expansion(s) and print one result per line.
    pub fn execute(self, data_dir: &Path) -> Result<()> {
        if self.format != "text" && self.format != "json" {
            bail!(
                "unknown output format '{}' (expected 'text' or 'json')",
                self.format
            );
        }

        let expander = Expander::new(data_dir);
        for index in 0..u64::from(self.count) {
            let seed = self.seed.wrapping_add(index);
            let expanded = expander.expand(&self.prompt, seed);
            if self.format == "json" {
                println!(
                    "{}",
                    serde_json::json!({ "seed": seed, "prompt": expanded })
                );
            } else {
                println!("{expanded}");
            }
        }
        Ok(())
    }
}
