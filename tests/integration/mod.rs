//! Integration test suite for chara-expand.
//!
//! End-to-end tests that exercise the expansion pipeline against real
//! temporary data directories, plus CLI tests driving the built binary.
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! Tests are organized by functionality area:
//! - **expansion**: basic tag resolution and attribute records
//! - **filters**: include/exclude aggregation and conflicts
//! - **randomness**: seeded `random` key determinism
//! - **cleanup_behavior**: whitespace/punctuation cleanup and newlines
//! - **lora_passthrough**: non-placeholder markup preservation
//! - **subdirectories**: namespaces backed by nested dictionary files
//! - **cli**: the `expand`, `list`, and `validate` commands

// Shared test utilities (from parent tests/ directory)
#[path = "../common/mod.rs"]
mod common;

mod cli;
mod subdirectories;
