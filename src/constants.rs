//! Global constants used throughout the chara-expand codebase.
//!
//! This module contains the reserved dictionary field names and other
//! string constants that are used across multiple modules. Defining them
//! centrally keeps the placeholder grammar and the YAML schema in one
//! discoverable place.

/// Reserved key that triggers seeded random selection within a namespace.
///
/// A tag written as `@characters:random` resolves to one of the keys
/// currently present in `characters.yaml`, chosen with the per-call
/// seeded generator.
pub const RANDOM_KEY: &str = "random";

/// Reserved situation field holding the prompt fragment to append.
pub const PROMPT_FIELD: &str = "prompt";

/// Reserved situation field listing attribute names to omit.
pub const EXCLUDE_FIELD: &str = "exclude";

/// Reserved situation field listing attribute names to keep exclusively.
pub const INCLUDE_FIELD: &str = "include";

/// File extension of dictionary files under the data directory.
pub const DICTIONARY_EXTENSION: &str = "yaml";

/// Default data directory, relative to the working directory.
pub const DEFAULT_DATA_DIR: &str = "data";

/// Separator used when joining normalized values into prompt text.
pub const VALUE_SEPARATOR: &str = ", ";
