//! Entry classification.
//!
//! Dictionary values arrive as untyped YAML. This module resolves each raw
//! value exactly once into a tagged [`Entry`] variant so the rest of the
//! pipeline can match exhaustively instead of re-inspecting YAML shapes:
//!
//! - a mapping carrying any of the reserved fields (`prompt`, `include`,
//!   `exclude`) is a [`Situation`];
//! - any other mapping is an attribute record (a character sheet);
//! - everything else normalizes to plain scalar text.
//!
//! Attribute order is significant: it is the order values appear in the
//! expanded prompt. `serde_yaml`'s `Mapping` preserves declaration order,
//! which classification carries over into the ordered pair list.

use serde_yaml::{Mapping, Value};
use thiserror::Error;

use crate::constants::{EXCLUDE_FIELD, INCLUDE_FIELD, PROMPT_FIELD, VALUE_SEPARATOR};

/// A normalized attribute value: one string, or an ordered list of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    /// A single text fragment, used as-is.
    Single(String),
    /// An ordered sequence of fragments, joined with `", "` on render.
    Many(Vec<String>),
}

impl AttrValue {
    /// Render the value as prompt text. Sequences join in element order;
    /// no collection syntax from the data representation ever appears.
    pub fn render(&self) -> String {
        match self {
            Self::Single(text) => text.clone(),
            Self::Many(items) => items.join(VALUE_SEPARATOR),
        }
    }

    /// Whether the value contributes nothing to the output.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Single(text) => text.is_empty(),
            Self::Many(items) => items.is_empty(),
        }
    }
}

/// An include-or-exclude directive declared by a situation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// Attribute names to omit from every attribute record in the call.
    Exclude(Vec<String>),
    /// Attribute names to keep exclusively.
    Include(Vec<String>),
}

/// A situation record: an optional prompt fragment plus an optional filter.
///
/// Filter fields never appear in output themselves; only the `prompt`
/// field contributes text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Situation {
    /// Text appended verbatim (after normalization) for this tag.
    pub prompt: Option<AttrValue>,
    /// Filter applied to attribute records elsewhere in the same call.
    pub filter: Option<Filter>,
}

/// A dictionary entry, classified once at resolution time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// Plain text (string, number, boolean, or a top-level sequence
    /// normalized to comma-joined text).
    Scalar(String),
    /// Ordered attribute-name → value record.
    Attributes(Vec<(String, AttrValue)>),
    /// Situation record with prompt and/or filter.
    Situation(Situation),
}

/// Classification failure for a single entry.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum EntryError {
    /// The entry declares both `include` and `exclude`, which is invalid;
    /// such an entry contributes no expansion.
    #[error("entry declares both 'include' and 'exclude'")]
    ConflictingFilter,
}

/// Resolve a raw YAML value into its [`Entry`] variant.
pub fn classify(value: &Value) -> Result<Entry, EntryError> {
    match value {
        Value::Mapping(mapping) => classify_mapping(mapping),
        Value::Sequence(items) => {
            let joined = items.iter().filter_map(scalar_text).collect::<Vec<_>>();
            Ok(Entry::Scalar(joined.join(VALUE_SEPARATOR)))
        }
        Value::Tagged(tagged) => classify(&tagged.value),
        other => Ok(Entry::Scalar(scalar_text(other).unwrap_or_default())),
    }
}

fn classify_mapping(mapping: &Mapping) -> Result<Entry, EntryError> {
    let exclude = field(mapping, EXCLUDE_FIELD);
    let include = field(mapping, INCLUDE_FIELD);
    let prompt = field(mapping, PROMPT_FIELD);

    if exclude.is_some() && include.is_some() {
        return Err(EntryError::ConflictingFilter);
    }

    if exclude.is_none() && include.is_none() && prompt.is_none() {
        let attrs = mapping
            .iter()
            .filter_map(|(name, value)| {
                let name = scalar_text(name)?;
                let value = attr_value(value)?;
                Some((name, value))
            })
            .collect();
        return Ok(Entry::Attributes(attrs));
    }

    let filter = if let Some(names) = exclude {
        Some(Filter::Exclude(name_list(names)))
    } else {
        include.map(|names| Filter::Include(name_list(names)))
    };

    Ok(Entry::Situation(Situation {
        prompt: prompt.and_then(attr_value),
        filter,
    }))
}

fn field<'a>(mapping: &'a Mapping, name: &str) -> Option<&'a Value> {
    mapping.get(name)
}

/// Text form of a scalar YAML value. Mappings and sequences have no scalar
/// text; nulls are absent rather than the literal `null`.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Tagged(tagged) => scalar_text(&tagged.value),
        Value::Null | Value::Sequence(_) | Value::Mapping(_) => None,
    }
}

/// Normalize an attribute value. `None` means the attribute is absent and
/// its name must not surface in the output.
fn attr_value(value: &Value) -> Option<AttrValue> {
    match value {
        Value::Sequence(items) => {
            Some(AttrValue::Many(items.iter().filter_map(scalar_text).collect()))
        }
        Value::Tagged(tagged) => attr_value(&tagged.value),
        other => scalar_text(other).map(AttrValue::Single),
    }
}

/// Parse a filter list. A bare string is accepted as a one-element list.
fn name_list(value: &Value) -> Vec<String> {
    match value {
        Value::Sequence(items) => items.iter().filter_map(scalar_text).collect(),
        other => scalar_text(other).map(|name| vec![name]).unwrap_or_default(),
    }
}
