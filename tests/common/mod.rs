//! Shared helpers for the integration suite.
//!
//! Every test builds its own temporary data directory so tests are fully
//! isolated and can run in parallel.

use std::fs;
use std::path::Path;
use tempfile::TempDir;

use chara_expand::Expander;

/// A temporary data directory populated with dictionary files.
pub struct DataDir {
    root: TempDir,
}

impl DataDir {
    /// Create an empty data directory.
    pub fn new() -> Self {
        Self {
            root: TempDir::new().expect("failed to create temp data dir"),
        }
    }

    /// Write `<namespace>.yaml` with the given content, creating parent
    /// directories for subdirectory namespaces.
    pub fn write_namespace(&self, namespace: &str, content: &str) -> &Self {
        let path = self.path().join(format!("{namespace}.yaml"));
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create namespace directory");
        }
        fs::write(path, content).expect("failed to write dictionary file");
        self
    }

    /// Path of the data directory.
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// An expander reading from this data directory.
    pub fn expander(&self) -> Expander {
        Expander::new(self.path())
    }
}

/// A small character sheet used by several tests.
pub const ALICE: &str = "alice:
  base: 1girl
  hair:
    - blonde hair
    - short hair
  eye: blue eyes
";
