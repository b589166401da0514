//! Placeholder tag scanning.
//!
//! Finds every `@<namespace>:<key>` occurrence in a prompt, in order of
//! appearance, keeping the exact matched text so the assembler can later
//! substitute each occurrence in place.
//!
//! Matching is purely textual: anything outside the placeholder grammar is
//! left alone, including LoRA-style `<name:weight>` annotations, which the
//! pattern can never match because it requires a leading `@`.

use regex::Regex;
use std::sync::OnceLock;

/// A single placeholder occurrence found in a prompt.
///
/// `source` is the exact matched text (e.g. `@outfits/winter:random`) and
/// is what gets replaced during assembly. `key` is the key as written,
/// before any `random` resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagMatch {
    /// Full matched text, including the `@` and `:`.
    pub source: String,
    /// Namespace portion; may contain `/` for subdirectory dictionaries.
    pub namespace: String,
    /// Key portion, a single word token.
    pub key: String,
}

/// Pattern for `@<namespace>:<key>` placeholders.
///
/// Namespaces are word characters plus `/`; keys are word characters only,
/// so a key ends at the first comma, space, or other punctuation.
fn tag_regex() -> &'static Regex {
    static TAG_RE: OnceLock<Regex> = OnceLock::new();
    TAG_RE.get_or_init(|| Regex::new(r"@([\w/]+):(\w+)").expect("tag pattern is valid"))
}

/// Scan a prompt for placeholder tags, in order of first appearance.
///
/// Returns an empty vector when the prompt contains no placeholders, in
/// which case expansion is a no-op.
pub fn scan(prompt: &str) -> Vec<TagMatch> {
    tag_regex()
        .captures_iter(prompt)
        .map(|caps| TagMatch {
            source: caps[0].to_string(),
            namespace: caps[1].to_string(),
            key: caps[2].to_string(),
        })
        .collect()
}
