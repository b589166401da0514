//! The expansion pipeline.
//!
//! One [`Expander::expand`] call is a single linear pass:
//!
//! 1. **Scan** the prompt for `@namespace:key` placeholders.
//! 2. **Resolve** each tag in order: reload its namespace from disk, draw
//!    a key from the seeded generator if the tag asked for `random`, and
//!    classify the raw value into an [`Entry`].
//! 3. **Aggregate filters** across every situation tag. Mixing `include`
//!    and `exclude` across the call is a conflict: the prompt is returned
//!    unchanged, with no partial substitution.
//! 4. **Assemble**: substitute each tag's matched text with its
//!    contribution (first remaining occurrence, one per tag), then run the
//!    [`cleanup`] rules.
//!
//! Determinism: all random selections in one call come from a single
//! generator seeded from the caller's seed and are drawn in left-to-right
//! tag order, so the same prompt, seed, and dictionary files always
//! produce the same text. Per-tag failures (missing namespace or key,
//! empty random pool, an entry declaring both filters) degrade to an empty
//! contribution plus a diagnostic; only the cross-tag filter conflict
//! degrades the whole call to a no-op.

use rand::prelude::*;
use rand::rngs::StdRng;
use std::collections::HashSet;
use std::path::PathBuf;

use crate::constants::{RANDOM_KEY, VALUE_SEPARATOR};
use crate::dictionary::{self, AttrValue, Entry, EntryError, Filter};
use crate::scanner::{self, TagMatch};

pub mod cleanup;

/// The call-wide filter directive aggregated from all situation tags.
///
/// Never mixed: a call is pass-through, exclude-only, or include-only.
#[derive(Debug, Clone, PartialEq, Eq)]
enum FilterDirective {
    /// No situation declared a filter; every attribute is kept.
    PassThrough,
    /// Attributes with these names are omitted.
    Exclude(HashSet<String>),
    /// Only attributes with these names are kept.
    Include(HashSet<String>),
}

/// A scanned tag bound to its resolved entry.
///
/// `entry` is `None` for every locally-recovered failure (missing
/// namespace or key, empty random pool, invalid entry); such tags are
/// replaced by the empty string during assembly.
struct ResolvedTag {
    source: String,
    namespace: String,
    key: String,
    entry: Option<Entry>,
}

/// The prompt expansion engine.
///
/// Holds only the data directory path. Dictionaries are reloaded from
/// disk on every call, so edits to the YAML files take effect on the next
/// expansion without restarting the host.
///
/// # Examples
///
/// ```rust,no_run
/// use chara_expand::Expander;
///
/// let expander = Expander::new("data");
/// let expanded = expander.expand("@characters:alice masterpiece", 12345);
/// println!("{expanded}");
/// ```
pub struct Expander {
    data_dir: PathBuf,
}

impl Expander {
    /// Create an expander reading dictionaries under `data_dir`.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Expand every placeholder tag in `prompt`.
    ///
    /// Pure given fixed dictionary file contents: the same prompt and seed
    /// always produce the same output. A prompt without placeholders is
    /// returned unchanged, byte for byte. All failure modes degrade to
    /// diagnostics rather than errors; the worst case is a no-op that
    /// returns the input text.
    pub fn expand(&self, prompt: &str, seed: u64) -> String {
        let tags = scanner::scan(prompt);
        if tags.is_empty() {
            return prompt.to_string();
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let resolved: Vec<ResolvedTag> = tags
            .into_iter()
            .map(|tag| self.resolve(tag, &mut rng))
            .collect();

        let Some(directive) = aggregate_filters(&resolved) else {
            tracing::error!(
                "cannot mix 'include' and 'exclude' across situations; prompt left unchanged"
            );
            return prompt.to_string();
        };

        let mut result = prompt.to_string();
        let mut expanded = Vec::new();
        for tag in &resolved {
            let text = contribution(tag.entry.as_ref(), &directive);
            result = result.replacen(&tag.source, &text, 1);
            if tag.entry.is_some() {
                expanded.push(format!("{}:{}", tag.namespace, tag.key));
            }
        }

        let result = cleanup::tidy(&result);
        if !expanded.is_empty() {
            tracing::debug!("{} => {}", expanded.join(" + "), result);
        }
        result
    }

    /// Resolve one tag: load its namespace, settle `random`, classify.
    fn resolve(&self, tag: TagMatch, rng: &mut StdRng) -> ResolvedTag {
        let dict = dictionary::load_namespace(&self.data_dir, &tag.namespace);
        let TagMatch {
            source,
            namespace,
            key,
        } = tag;

        let key = if key == RANDOM_KEY {
            let pool: Vec<String> = dict
                .iter()
                .filter_map(|(name, _)| name.as_str().map(str::to_string))
                .collect();
            match pool.choose(rng) {
                Some(chosen) => chosen.clone(),
                None => {
                    tracing::warn!("no keys available in '{}' for random selection", namespace);
                    return ResolvedTag {
                        source,
                        namespace,
                        key,
                        entry: None,
                    };
                }
            }
        } else {
            key
        };

        let Some(raw) = dict.get(key.as_str()) else {
            tracing::warn!("key '{}' not found in namespace '{}'", key, namespace);
            return ResolvedTag {
                source,
                namespace,
                key,
                entry: None,
            };
        };

        match dictionary::classify(raw) {
            Ok(entry) => ResolvedTag {
                source,
                namespace,
                key,
                entry: Some(entry),
            },
            Err(EntryError::ConflictingFilter) => {
                tracing::error!(
                    "cannot specify both 'exclude' and 'include' in {}:{}",
                    namespace,
                    key
                );
                ResolvedTag {
                    source,
                    namespace,
                    key,
                    entry: None,
                }
            }
        }
    }
}

/// Merge the filter lists of every situation tag into one directive.
///
/// Returns `None` on the cross-tag conflict (both an exclude-set and an
/// include-set ended up non-empty), which rejects the whole call.
fn aggregate_filters(resolved: &[ResolvedTag]) -> Option<FilterDirective> {
    let mut excludes: HashSet<String> = HashSet::new();
    let mut includes: HashSet<String> = HashSet::new();

    for tag in resolved {
        if let Some(Entry::Situation(situation)) = &tag.entry {
            match &situation.filter {
                Some(Filter::Exclude(names)) => excludes.extend(names.iter().cloned()),
                Some(Filter::Include(names)) => includes.extend(names.iter().cloned()),
                None => {}
            }
        }
    }

    if !excludes.is_empty() && !includes.is_empty() {
        return None;
    }
    Some(if !includes.is_empty() {
        FilterDirective::Include(includes)
    } else if !excludes.is_empty() {
        FilterDirective::Exclude(excludes)
    } else {
        FilterDirective::PassThrough
    })
}

/// Text a resolved tag contributes to the prompt.
fn contribution(entry: Option<&Entry>, directive: &FilterDirective) -> String {
    match entry {
        None => String::new(),
        Some(Entry::Scalar(text)) => text.clone(),
        Some(Entry::Situation(situation)) => situation
            .prompt
            .as_ref()
            .map(AttrValue::render)
            .unwrap_or_default(),
        Some(Entry::Attributes(attrs)) => render_attributes(attrs, directive),
    }
}

/// Render an attribute record under the active filter directive, in
/// declared attribute order, skipping empty values.
fn render_attributes(attrs: &[(String, AttrValue)], directive: &FilterDirective) -> String {
    let mut parts: Vec<String> = Vec::new();
    for (name, value) in attrs {
        let keep = match directive {
            FilterDirective::PassThrough => true,
            FilterDirective::Exclude(names) => !names.contains(name),
            FilterDirective::Include(names) => names.contains(name),
        };
        if keep && !value.is_empty() {
            parts.push(value.render());
        }
    }
    parts.join(VALUE_SEPARATOR)
}
