//! List the dictionaries available under the data directory.

use anyhow::Result;
use clap::Args;
use std::path::Path;

use crate::dictionary;

/// Command to list namespaces and, optionally, their keys.
#[derive(Args)]
pub struct ListCommand {
    /// Also print the keys of each namespace.
    #[arg(short, long)]
    keys: bool,
}

impl ListCommand {
    /// Print every discovered namespace with its entry count.
    pub fn execute(self, data_dir: &Path) -> Result<()> {
        let namespaces = dictionary::discover_namespaces(data_dir);
        if namespaces.is_empty() {
            println!("no dictionaries found under {}", data_dir.display());
            return Ok(());
        }

        for namespace in namespaces {
            let mapping = dictionary::load_namespace(data_dir, &namespace);
            println!("{} ({} entries)", namespace, mapping.len());
            if self.keys {
                for (key, _) in &mapping {
                    if let Some(name) = key.as_str() {
                        println!("  {name}");
                    }
                }
            }
        }
        Ok(())
    }
}
