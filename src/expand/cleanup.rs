//! Whitespace and punctuation cleanup after tag substitution.
//!
//! Substituting empty or short contributions leaves duplicated separators
//! behind (`x, , y`), and multi-fragment contributions can introduce runs
//! of spaces. Three rules repair this, in a fixed order:
//!
//! 1. collapse runs of two or more commas, optionally separated by
//!    spaces/tabs, into a single comma;
//! 2. strip a comma sitting at the start of a line;
//! 3. collapse runs of spaces and tabs into one space.
//!
//! None of the rules ever touches a newline: line structure is part of the
//! output contract, and a trailing comma immediately before a newline is
//! intentional prompt formatting that must survive.

use regex::Regex;
use std::sync::OnceLock;

fn comma_runs() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r",(?:[ \t]*,)+").expect("comma run pattern is valid"))
}

fn leading_commas() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?m)^[ \t]*,[ \t]*").expect("leading comma pattern is valid"))
}

fn blank_runs() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[ \t]+").expect("blank run pattern is valid"))
}

/// Apply the three cleanup rules to an assembled prompt.
pub fn tidy(text: &str) -> String {
    let collapsed = comma_runs().replace_all(text, ",");
    let stripped = leading_commas().replace_all(&collapsed, "");
    blank_runs().replace_all(&stripped, " ").into_owned()
}
