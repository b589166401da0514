//! Validate the dictionary files under the data directory.
//!
//! Checks every discovered namespace with the strict loading path and
//! classifies every entry, reporting:
//!
//! - unreadable or malformed YAML files
//! - files whose top-level document is not a key-to-entry mapping
//! - empty namespaces (usually an authoring mistake)
//! - entries declaring both `include` and `exclude`
//!
//! Problems are printed to stderr and the command fails with a nonzero
//! exit code, making it suitable for CI over a dictionary repository.

use anyhow::{Result, bail};
use clap::Args;
use std::path::Path;

use crate::dictionary::{self, EntryError};

/// Command to validate every dictionary file.
#[derive(Args)]
pub struct ValidateCommand {}

impl ValidateCommand {
    /// Check all namespaces and fail if any problem is found.
    pub fn execute(self, data_dir: &Path) -> Result<()> {
        if !data_dir.exists() {
            bail!("data directory {} does not exist", data_dir.display());
        }

        let namespaces = dictionary::discover_namespaces(data_dir);
        let mut problems: Vec<String> = Vec::new();

        for namespace in &namespaces {
            match dictionary::try_load_namespace(data_dir, namespace) {
                Err(error) => problems.push(format!("{namespace}: {error}")),
                Ok(None) => {}
                Ok(Some(mapping)) => {
                    if mapping.is_empty() {
                        problems.push(format!("{namespace}: namespace is empty"));
                        continue;
                    }
                    for (key, value) in &mapping {
                        let Some(key) = key.as_str() else {
                            problems.push(format!("{namespace}: non-string key {key:?}"));
                            continue;
                        };
                        if let Err(EntryError::ConflictingFilter) = dictionary::classify(value) {
                            problems.push(format!(
                                "{namespace}:{key}: declares both 'include' and 'exclude'"
                            ));
                        }
                    }
                }
            }
        }

        if problems.is_empty() {
            println!(
                "{} namespace(s) OK under {}",
                namespaces.len(),
                data_dir.display()
            );
            return Ok(());
        }

        for problem in &problems {
            eprintln!("{problem}");
        }
        bail!("validation failed with {} problem(s)", problems.len());
    }
}
