//! Placeholder discovery and substitution in path patterns.
//!
//! A placeholder is `{name}` where `name` is one or more ASCII letters,
//! digits or underscores. Anything else in braces (`{}`, `{a-b}`, a lone
//! `{`) is plain text.

use std::collections::{HashMap, HashSet};
use std::fmt::Display;
use std::sync::OnceLock;

use indexmap::IndexMap;
use regex::Regex;

use crate::combinations::generate_combinations;
use crate::error::{PatternError, PatternResult};

fn placeholder_regex() -> &'static Regex {
    static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
    PLACEHOLDER.get_or_init(|| {
        Regex::new(r"\{([A-Za-z0-9_]+)\}").expect("placeholder pattern is a valid regex")
    })
}

/// Find the names of all placeholders in `pattern`.
///
/// ```
/// use ff_patterns::extract_placeholders;
///
/// let keys = extract_placeholders("/path/{var_name}/{year}");
/// assert!(keys.contains("var_name") && keys.contains("year"));
/// assert_eq!(keys.len(), 2);
/// ```
pub fn extract_placeholders(pattern: &str) -> HashSet<String> {
    placeholder_regex()
        .captures_iter(pattern)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// Distinct placeholder names in order of first appearance.
pub fn placeholders_in_order(pattern: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    placeholder_regex()
        .captures_iter(pattern)
        .filter_map(|caps| {
            let name = &caps[1];
            seen.insert(name.to_string()).then(|| name.to_string())
        })
        .collect()
}

/// Substitute every placeholder using `lookup`.
///
/// Fails with [`PatternError::MissingVariable`] on the first placeholder
/// `lookup` has no value for.
pub fn render_with<F>(pattern: &str, mut lookup: F) -> PatternResult<String>
where
    F: FnMut(&str) -> Option<String>,
{
    let mut rendered = String::with_capacity(pattern.len());
    let mut last = 0;

    for caps in placeholder_regex().captures_iter(pattern) {
        let whole = caps.get(0).expect("group 0 always participates");
        let name = &caps[1];
        let value = lookup(name).ok_or_else(|| PatternError::MissingVariable(name.to_string()))?;

        rendered.push_str(&pattern[last..whole.start()]);
        rendered.push_str(&value);
        last = whole.end();
    }

    rendered.push_str(&pattern[last..]);
    Ok(rendered)
}

/// Render `pattern` with values taken from `vars`.
pub fn render_pattern<V: Display>(pattern: &str, vars: &IndexMap<String, V>) -> PatternResult<String> {
    render_with(pattern, |name| vars.get(name).map(ToString::to_string))
}

/// Render `pattern` once per combination of `spec`, in odometer order.
///
/// Rendering is lazy; an item is an error only when the pattern names a
/// placeholder the value spec does not define.
pub fn expand_pattern<'a, K, T>(
    pattern: &'a str,
    spec: &'a [(K, Vec<T>)],
) -> impl Iterator<Item = PatternResult<String>> + 'a
where
    K: AsRef<str>,
    T: Display,
{
    generate_combinations(spec).map(move |combination| {
        let vars: HashMap<&str, &T> = combination
            .into_iter()
            .map(|(name, value)| (name.as_ref(), value))
            .collect();
        render_with(pattern, |name| vars.get(name).map(ToString::to_string))
    })
}
