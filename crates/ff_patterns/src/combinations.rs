//! Cartesian product of named candidate lists.
//!
//! A value spec is an ordered list of `(name, candidates)` pairs. Each
//! combination picks one candidate per name. Enumeration runs like an
//! odometer: the last name cycles fastest, the first slowest.

use std::iter::FusedIterator;

use serde_json::{Map, Value};

use crate::error::{json_type_name, PatternError, PatternResult};

/// One point of the product: every name paired with its chosen value, in
/// spec order.
pub type Combination<'a, K, T> = Vec<(&'a K, &'a T)>;

/// Lazy iterator over all combinations of a value spec.
///
/// Created by [`generate_combinations`]. Values are borrowed from the spec.
/// Once exhausted it stays exhausted; call [`generate_combinations`] again
/// to re-enumerate.
#[derive(Debug, Clone)]
pub struct Combinations<'a, K, T> {
    spec: &'a [(K, Vec<T>)],
    indices: Vec<usize>,
    remaining: Option<usize>,
    exhausted: bool,
}

impl<'a, K, T> Combinations<'a, K, T> {
    fn new(spec: &'a [(K, Vec<T>)]) -> Self {
        let remaining = spec
            .iter()
            .try_fold(1usize, |acc, (_, candidates)| acc.checked_mul(candidates.len()));

        Self {
            spec,
            indices: vec![0; spec.len()],
            remaining,
            exhausted: spec.iter().any(|(_, candidates)| candidates.is_empty()),
        }
    }

    /// Advance the rightmost index, carrying to the left on wrap.
    fn advance(&mut self) {
        let spec = self.spec;
        for (position, (_, candidates)) in spec.iter().enumerate().rev() {
            self.indices[position] += 1;
            if self.indices[position] < candidates.len() {
                return;
            }
            self.indices[position] = 0;
        }
        self.exhausted = true;
    }
}

impl<'a, K, T> Iterator for Combinations<'a, K, T> {
    type Item = Combination<'a, K, T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        let current = self
            .spec
            .iter()
            .zip(&self.indices)
            .map(|((name, candidates), &index)| (name, &candidates[index]))
            .collect();

        self.advance();
        if let Some(remaining) = self.remaining.as_mut() {
            *remaining = remaining.saturating_sub(1);
        }

        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match (self.exhausted, self.remaining) {
            (true, _) => (0, Some(0)),
            (false, Some(remaining)) => (remaining, Some(remaining)),
            (false, None) => (usize::MAX, None),
        }
    }
}

impl<K, T> FusedIterator for Combinations<'_, K, T> {}

/// Lazily enumerate every combination of `spec`.
///
/// An empty value spec yields a single empty combination. A name with no
/// candidates makes the product empty.
///
/// ```
/// use ff_patterns::generate_combinations;
///
/// let spec = vec![("a", vec![1, 2]), ("b", vec![3, 4]), ("c", vec![5])];
/// let first: Vec<_> = generate_combinations(&spec).next().unwrap();
/// assert_eq!(first, vec![(&"a", &1), (&"b", &3), (&"c", &5)]);
/// assert_eq!(generate_combinations(&spec).count(), 4);
/// ```
pub fn generate_combinations<K, T>(spec: &[(K, Vec<T>)]) -> Combinations<'_, K, T> {
    Combinations::new(spec)
}

/// Eager variant of [`generate_combinations`] returning owned values.
pub fn all_combinations<K: Clone, T: Clone>(spec: &[(K, Vec<T>)]) -> Vec<Vec<(K, T)>> {
    generate_combinations(spec)
        .map(|combination| {
            combination
                .into_iter()
                .map(|(name, value)| (name.clone(), value.clone()))
                .collect()
        })
        .collect()
}

/// Turn a JSON/YAML mapping into a value spec, keeping key order.
///
/// Arrays list the candidates; any other scalar is a single candidate.
/// Nested mappings are rejected.
pub fn spec_from_map(map: &Map<String, Value>) -> PatternResult<Vec<(String, Vec<Value>)>> {
    map.iter()
        .map(|(name, value)| {
            let candidates = match value {
                Value::Array(items) => items.clone(),
                Value::Object(_) => {
                    return Err(PatternError::InvalidSpec(format!(
                        "candidates for '{}' must be a list or a scalar, got {}",
                        name,
                        json_type_name(value)
                    )))
                }
                scalar => vec![scalar.clone()],
            };
            Ok((name.clone(), candidates))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn owned(spec: &[(&'static str, Vec<i32>)]) -> Vec<Vec<(&'static str, i32)>> {
        all_combinations(spec)
    }

    #[test]
    fn test_odometer_order() {
        let spec = vec![("a", vec![1, 2]), ("b", vec![3, 4]), ("c", vec![5])];
        assert_eq!(
            owned(&spec),
            vec![
                vec![("a", 1), ("b", 3), ("c", 5)],
                vec![("a", 1), ("b", 4), ("c", 5)],
                vec![("a", 2), ("b", 3), ("c", 5)],
                vec![("a", 2), ("b", 4), ("c", 5)],
            ]
        );
    }

    #[test]
    fn test_empty_candidates_yield_nothing() {
        let spec: Vec<(&str, Vec<i32>)> = vec![("a", vec![])];
        assert_eq!(generate_combinations(&spec).count(), 0);

        let spec = vec![("a", vec![1, 2]), ("b", vec![])];
        assert_eq!(generate_combinations(&spec).count(), 0);
    }

    #[test]
    fn test_empty_spec_yields_one_empty_combination() {
        let spec: Vec<(&str, Vec<i32>)> = Vec::new();
        let all: Vec<_> = generate_combinations(&spec).collect();
        assert_eq!(all.len(), 1);
        assert!(all[0].is_empty());
    }

    #[test]
    fn test_exhausted_stays_exhausted() {
        let spec = vec![("a", vec![1])];
        let mut combos = generate_combinations(&spec);
        assert!(combos.next().is_some());
        assert!(combos.next().is_none());
        assert!(combos.next().is_none());
    }

    #[test]
    fn test_size_hint_counts_down() {
        let spec = vec![("a", vec![1, 2, 3]), ("b", vec![4, 5])];
        let mut combos = generate_combinations(&spec);
        assert_eq!(combos.size_hint(), (6, Some(6)));
        combos.next();
        assert_eq!(combos.size_hint(), (5, Some(5)));
        assert_eq!(combos.by_ref().count(), 5);
        assert_eq!(combos.size_hint(), (0, Some(0)));
    }

    #[test]
    fn test_values_are_borrowed() {
        let spec = vec![("path", vec![String::from("x")])];
        let combo = generate_combinations(&spec).next().unwrap();
        assert!(std::ptr::eq(combo[0].1, &spec[0].1[0]));
    }

    #[test]
    fn test_spec_from_map() {
        let value = json!({"model": ["a", "b"], "year": 2000});
        let spec = spec_from_map(value.as_object().unwrap()).unwrap();
        assert_eq!(
            spec,
            vec![
                ("model".to_string(), vec![json!("a"), json!("b")]),
                ("year".to_string(), vec![json!(2000)]),
            ]
        );
    }

    #[test]
    fn test_spec_from_map_rejects_nested_mapping() {
        let value = json!({"model": {"a": 1}});
        let err = spec_from_map(value.as_object().unwrap()).unwrap_err();
        assert!(err.to_string().contains("got object"));
    }
}
