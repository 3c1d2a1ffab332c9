//! # ff_patterns
//!
//! Pattern helpers for filefinder.
//!
//! File paths are described by patterns such as
//! `/data/{model}/{year}/{variable}.nc`. This crate provides the pieces a
//! finder needs around such patterns:
//!
//! - Placeholder discovery and rendering
//! - Expansion of candidate values into every combination
//! - Merging default keys with overrides
//! - Natural ordering of the paths that were found
//!
//! ## Example
//!
//! ```rust
//! use ff_patterns::{expand_pattern, extract_placeholders, sort_natural};
//!
//! let pattern = "/data/{model}/run{run}.nc";
//! assert_eq!(extract_placeholders(pattern).len(), 2);
//!
//! let spec = vec![("model", vec!["a"]), ("run", vec!["10", "2"])];
//! let mut paths: Vec<String> = expand_pattern(pattern, &spec)
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! sort_natural(&mut paths);
//!
//! assert_eq!(paths, vec!["/data/a/run2.nc", "/data/a/run10.nc"]);
//! ```

pub mod combinations;
pub mod error;
pub mod loader;
pub mod merge;
pub mod natural;
pub mod placeholders;

pub use combinations::{all_combinations, generate_combinations, spec_from_map, Combination, Combinations};
pub use error::{PatternError, PatternResult};
pub use loader::{display_value, load_value_file, parse_scalar, parse_value_list};
pub use merge::{merge_keys, merge_maps};
pub use natural::{natural_cmp, natural_key, sort_natural, KeyPart, NaturalKey};
pub use placeholders::{
    expand_pattern, extract_placeholders, placeholders_in_order, render_pattern, render_with,
};
