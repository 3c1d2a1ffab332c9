//! Natural ("human") sort order.
//!
//! `natural_key("file10.nc")` splits the text into alternating non-digit and
//! digit runs, `["file", 10, ".nc"]`, so that digit runs compare by value
//! and `file2` sorts before `file10`.
//!
//! Only ASCII digits `0-9` form number runs. Other Unicode decimal digits,
//! such as `٣` or `３`, are treated as ordinary text and compare by code
//! point.

use std::cmp::Ordering;
use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

fn digit_run_regex() -> &'static Regex {
    static DIGITS: OnceLock<Regex> = OnceLock::new();
    DIGITS.get_or_init(|| Regex::new(r"[0-9]+").expect("digit pattern is a valid regex"))
}

/// One run of a [`NaturalKey`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeyPart {
    /// A run of ASCII digits, stored without leading zeros (`"0"` for zero)
    /// so that values of any size compare correctly.
    Number(String),
    /// A run of non-digit characters. May be empty at the start or end.
    Text(String),
}

impl KeyPart {
    fn number(digits: &str) -> Self {
        let trimmed = digits.trim_start_matches('0');
        Self::Number(if trimmed.is_empty() { "0" } else { trimmed }.to_string())
    }

    fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    fn as_str(&self) -> &str {
        match self {
            Self::Number(digits) => digits,
            Self::Text(text) => text,
        }
    }
}

impl Ord for KeyPart {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a.len().cmp(&b.len()).then_with(|| a.cmp(b)),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            // Keys from natural_key alternate text/number at fixed positions,
            // so this only orders hand-built parts: compare as text.
            _ => self
                .as_str()
                .cmp(other.as_str())
                .then_with(|| self.is_number().cmp(&other.is_number())),
        }
    }
}

impl PartialOrd for KeyPart {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for KeyPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(digits) => write!(f, "{}", digits),
            Self::Text(text) => write!(f, "{:?}", text),
        }
    }
}

/// Sort key produced by [`natural_key`]. Compares element by element.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NaturalKey(Vec<KeyPart>);

impl NaturalKey {
    pub fn parts(&self) -> &[KeyPart] {
        &self.0
    }
}

/// Build the natural sort key of `text`.
///
/// The key always starts and ends with a text run, which is empty when
/// `text` starts or ends with a digit: `"1a2"` gives `["", 1, "a", 2, ""]`.
pub fn natural_key(text: &str) -> NaturalKey {
    let mut parts = Vec::new();
    let mut last = 0;

    for digits in digit_run_regex().find_iter(text) {
        parts.push(KeyPart::Text(text[last..digits.start()].to_string()));
        parts.push(KeyPart::number(digits.as_str()));
        last = digits.end();
    }
    parts.push(KeyPart::Text(text[last..].to_string()));

    NaturalKey(parts)
}

/// Compare two strings in natural order.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    natural_key(a).cmp(&natural_key(b))
}

/// Sort `items` in natural order. The sort is stable.
pub fn sort_natural<S: AsRef<str>>(items: &mut [S]) {
    items.sort_by_cached_key(|item| natural_key(item.as_ref()));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> KeyPart {
        KeyPart::Text(s.to_string())
    }

    fn num(s: &str) -> KeyPart {
        KeyPart::Number(s.to_string())
    }

    #[test]
    fn test_sort_numeric_suffixes() {
        let mut items = vec!["a10", "a1", "a2"];
        sort_natural(&mut items);
        assert_eq!(items, vec!["a1", "a2", "a10"]);
    }

    #[test]
    fn test_key_keeps_empty_edges() {
        assert_eq!(
            natural_key("1a2").parts(),
            &[text(""), num("1"), text("a"), num("2"), text("")]
        );
        assert_eq!(natural_key("abc").parts(), &[text("abc")]);
        assert_eq!(natural_key("").parts(), &[text("")]);
    }

    #[test]
    fn test_leading_zeros_compare_by_value() {
        assert_eq!(natural_cmp("x007", "x7"), Ordering::Equal);
        assert_eq!(natural_cmp("x008", "x10"), Ordering::Less);
    }

    #[test]
    fn test_numbers_beyond_u64() {
        assert_eq!(
            natural_cmp("run99999999999999999999", "run100000000000000000000"),
            Ordering::Less
        );
    }

    #[test]
    fn test_prefix_sorts_first() {
        assert_eq!(natural_cmp("tas", "tas_1"), Ordering::Less);
        assert_eq!(natural_cmp("tas1", "tas1.nc"), Ordering::Less);
    }

    #[test]
    fn test_runs_alternate() {
        for sample in ["10", "b", "b10", "10b", "a1b22c333"] {
            for (i, part) in natural_key(sample).parts().iter().enumerate() {
                assert_eq!(part.is_number(), i % 2 == 1, "{sample}: {part}");
            }
        }
        assert_eq!(natural_cmp("10", "b"), Ordering::Less);
    }

    #[test]
    fn test_mixed_parts_compare_as_text() {
        assert_eq!(num("10").cmp(&text("b")), Ordering::Less);
        assert_eq!(text("b").cmp(&num("10")), Ordering::Greater);
        assert_eq!(text("7").cmp(&num("7")), Ordering::Less);
    }

    #[test]
    fn test_non_ascii_digits_are_text() {
        assert_eq!(natural_key("a３").parts(), &[text("a３")]);
        assert_eq!(natural_key("٣2").parts(), &[text("٣"), num("2"), text("")]);
    }

    #[test]
    fn test_file_paths() {
        let mut paths = vec![
            "/data/r10i1p1/tas.nc".to_string(),
            "/data/r2i1p1/tas.nc".to_string(),
            "/data/r1i1p1/tas.nc".to_string(),
        ];
        sort_natural(&mut paths);
        assert_eq!(
            paths,
            vec!["/data/r1i1p1/tas.nc", "/data/r2i1p1/tas.nc", "/data/r10i1p1/tas.nc"]
        );
    }
}
