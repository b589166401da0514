//! Dictionary loading.
//!
//! A namespace is a named collection of entries backed by one YAML file
//! under the data directory: `@outfits/winter:coat` reads
//! `<data_dir>/outfits/winter.yaml` and looks up the key `coat`.
//!
//! Files are reloaded fresh on every expansion call, freshness over
//! performance, so external edits to the dictionaries take effect
//! immediately. The engine-facing [`load_namespace`] never fails: a
//! missing, unreadable, malformed, or empty file degrades to an empty
//! mapping with a warning diagnostic. The strict [`try_load_namespace`]
//! surfaces those problems as typed errors for the `validate` command.

use serde_yaml::{Mapping, Value};
use std::path::{Component, Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

use crate::constants::DICTIONARY_EXTENSION;

pub mod entry;

pub use entry::{AttrValue, Entry, EntryError, Filter, Situation, classify};

/// Errors from the strict dictionary loading path.
#[derive(Error, Debug)]
pub enum DictionaryError {
    /// The namespace would resolve outside the data directory.
    #[error("namespace '{namespace}' escapes the data directory")]
    InvalidNamespace {
        /// Namespace as written in the tag.
        namespace: String,
    },

    /// The dictionary file exists but could not be read.
    #[error("failed to read dictionary file {path}")]
    Io {
        /// Path of the offending file.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The dictionary file is not valid YAML.
    #[error("failed to parse dictionary file {path}")]
    Parse {
        /// Path of the offending file.
        path: String,
        /// Underlying parse error.
        #[source]
        source: serde_yaml::Error,
    },

    /// The dictionary file parsed but its document is not a mapping.
    #[error("dictionary file {path} is not a key-to-entry mapping")]
    NotAMapping {
        /// Path of the offending file.
        path: String,
    },
}

/// Resolve a namespace to its backing file path.
///
/// Namespaces coming from the tag scanner are word characters and `/`
/// only, but this function is also reachable with arbitrary strings
/// through the public API, so absolute paths and parent-directory
/// components are rejected outright.
pub fn namespace_path(data_dir: &Path, namespace: &str) -> Result<PathBuf, DictionaryError> {
    let relative = Path::new(namespace);
    let valid = !namespace.is_empty()
        && relative
            .components()
            .all(|component| matches!(component, Component::Normal(_)));
    if !valid {
        return Err(DictionaryError::InvalidNamespace {
            namespace: namespace.to_string(),
        });
    }
    Ok(data_dir
        .join(relative)
        .with_extension(DICTIONARY_EXTENSION))
}

/// Load a namespace strictly, distinguishing the failure modes.
///
/// Returns `Ok(None)` when the backing file does not exist. An empty file
/// (or an explicit `null` document) is a present-but-empty namespace and
/// returns `Ok(Some(empty))`.
pub fn try_load_namespace(
    data_dir: &Path,
    namespace: &str,
) -> Result<Option<Mapping>, DictionaryError> {
    let path = namespace_path(data_dir, namespace)?;
    if !path.exists() {
        return Ok(None);
    }
    let text = std::fs::read_to_string(&path).map_err(|source| DictionaryError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let document: Value =
        serde_yaml::from_str(&text).map_err(|source| DictionaryError::Parse {
            path: path.display().to_string(),
            source,
        })?;
    match document {
        Value::Mapping(mapping) => Ok(Some(mapping)),
        Value::Null => Ok(Some(Mapping::new())),
        _ => Err(DictionaryError::NotAMapping {
            path: path.display().to_string(),
        }),
    }
}

/// Load a namespace for expansion.
///
/// Never fails: every failure mode degrades to an empty mapping with a
/// `warn!` diagnostic, and the caller treats the affected tags as missing.
pub fn load_namespace(data_dir: &Path, namespace: &str) -> Mapping {
    match try_load_namespace(data_dir, namespace) {
        Ok(Some(mapping)) => mapping,
        Ok(None) => {
            tracing::warn!(
                "dictionary file {}.{} not found under {}",
                namespace,
                DICTIONARY_EXTENSION,
                data_dir.display()
            );
            Mapping::new()
        }
        Err(error) => {
            tracing::warn!("skipping namespace '{}': {}", namespace, error);
            Mapping::new()
        }
    }
}

/// Discover every namespace present under the data directory, in sorted
/// order, including subdirectory namespaces (`outfits/winter`).
///
/// Unreadable directory entries are skipped; a missing data directory
/// yields an empty list.
pub fn discover_namespaces(data_dir: &Path) -> Vec<String> {
    let mut namespaces: Vec<String> = WalkDir::new(data_dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|dir_entry| dir_entry.file_type().is_file())
        .filter(|dir_entry| {
            dir_entry
                .path()
                .extension()
                .is_some_and(|extension| extension == DICTIONARY_EXTENSION)
        })
        .filter_map(|dir_entry| {
            let relative = dir_entry.path().strip_prefix(data_dir).ok()?;
            let stem = relative.with_extension("");
            let name = stem
                .components()
                .filter_map(|component| component.as_os_str().to_str())
                .collect::<Vec<_>>()
                .join("/");
            (!name.is_empty()).then_some(name)
        })
        .collect();
    namespaces.sort();
    namespaces
}
