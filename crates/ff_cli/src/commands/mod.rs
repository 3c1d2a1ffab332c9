//! CLI command definitions.
//!
//! Each subcommand wraps one of the pattern helpers from `ff_patterns`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde_json::{Map, Value};

use ff_patterns::{load_value_file, merge_keys, parse_value_list};

pub mod combos;
pub mod expand;
pub mod keys;
pub mod merge;
pub mod sort;

/// ff - path pattern helpers for filefinder
#[derive(Parser)]
#[command(name = "ff")]
#[command(version, about = "ff - path pattern helpers for filefinder")]
#[command(long_about = r#"
ff works on path patterns such as /data/{model}/{year}/{variable}.nc

COMMANDS:
  keys    → List the placeholders of a pattern
  sort    → Sort paths in natural order (file2 before file10)
  expand  → Render a pattern for every combination of values
  combos  → Print every combination of values
  merge   → Merge a key file with --set overrides

VALUES:
  --spec FILE        YAML or JSON mapping of name → value or list of values
  --set KEY=V1,V2    Override (or add) a name; repeatable

EXIT CODES:
  0 - Success
  1 - General error
  2 - Invalid arguments
  3 - Pattern or value spec error
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the placeholders of a pattern
    Keys(keys::KeysArgs),

    /// Sort items in natural order
    Sort(sort::SortArgs),

    /// Render a pattern for every combination of values
    Expand(expand::ExpandArgs),

    /// Print every combination of values
    Combos(combos::CombosArgs),

    /// Merge a key file with overrides
    Merge(merge::MergeArgs),
}

/// Value options shared by the commands that take keys.
#[derive(Args, Debug, Default)]
pub struct ValueArgs {
    /// YAML or JSON file with the base keys
    #[arg(long, value_name = "FILE")]
    pub spec: Option<PathBuf>,

    /// Override a key, KEY=VALUE or KEY=V1,V2,...
    #[arg(long = "set", value_name = "KEY=VALUES")]
    pub set: Vec<String>,
}

impl ValueArgs {
    /// Overrides given with `--set`, in command-line order.
    pub fn overrides(&self) -> Result<Map<String, Value>> {
        let mut overrides = Map::new();
        for raw in &self.set {
            let (key, values) = parse_set(raw)?;
            overrides.insert(key, values);
        }
        Ok(overrides)
    }

    /// Base keys from `--spec` merged with `--set` overrides.
    pub fn resolve(&self) -> Result<Map<String, Value>> {
        let base = match &self.spec {
            Some(path) => Some(
                load_value_file(path)
                    .with_context(|| format!("Failed to load keys from {:?}", path))?,
            ),
            None => None,
        };

        let merged = merge_keys(base.as_ref(), &self.overrides()?)
            .context("Failed to merge keys")?;
        Ok(merged)
    }
}

/// Split `KEY=V1,V2` into the key and its value (a list when more than one).
fn parse_set(raw: &str) -> Result<(String, Value)> {
    let (key, values) = raw
        .split_once('=')
        .filter(|(key, _)| !key.trim().is_empty())
        .with_context(|| format!("Invalid --set argument (expected KEY=VALUES): {}", raw))?;

    let mut values = parse_value_list(values);
    let value = if values.len() == 1 {
        values.remove(0)
    } else {
        Value::Array(values)
    };

    Ok((key.trim().to_string(), value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["ff", "--verbose", "--quiet", "keys", "{a}"]).is_err());
        assert!(Cli::try_parse_from(["ff", "keys", "{a}", "-v"]).is_ok());
        assert!(Cli::try_parse_from(["ff", "-q", "keys", "{a}"]).is_ok());
    }

    #[test]
    fn test_set_values_keep_their_text() {
        assert_eq!(
            parse_set("run=1.50,007,1e3").unwrap(),
            ("run".to_string(), json!(["1.50", "007", "1e3"]))
        );
    }

    #[test]
    fn test_parse_set() {
        assert_eq!(parse_set("year=2000").unwrap(), ("year".to_string(), json!(2000)));
        assert_eq!(
            parse_set("model=a,b").unwrap(),
            ("model".to_string(), json!(["a", "b"]))
        );
        assert!(parse_set("novalue").is_err());
        assert!(parse_set("=1").is_err());
    }

    #[test]
    fn test_overrides_keep_order_and_last_wins() {
        let args = ValueArgs {
            spec: None,
            set: vec!["b=1".into(), "a=2".into(), "b=3".into()],
        };
        let overrides = args.overrides().unwrap();
        assert_eq!(overrides.keys().collect::<Vec<_>>(), vec!["b", "a"]);
        assert_eq!(overrides["b"], json!(3));
    }

    #[test]
    fn test_resolve_without_spec() {
        let args = ValueArgs {
            spec: None,
            set: vec!["a=1".into()],
        };
        assert_eq!(Value::Object(args.resolve().unwrap()), json!({"a": 1}));
    }
}
