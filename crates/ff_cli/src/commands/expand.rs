//! Expand command - Render a pattern for every combination of values.

use anyhow::{Context, Result};
use clap::Args;
use tracing::{info, warn};

use ff_patterns::{display_value, expand_pattern, extract_placeholders, sort_natural, spec_from_map};

use super::ValueArgs;

#[derive(Args)]
pub struct ExpandArgs {
    /// Path pattern, e.g. "/data/{model}/{year}.nc"
    pattern: String,

    #[command(flatten)]
    values: ValueArgs,

    /// Print the paths in natural order instead of enumeration order
    #[arg(long)]
    sort: bool,
}

pub fn execute(args: ExpandArgs) -> Result<()> {
    let keys = args.values.resolve()?;

    let placeholders = extract_placeholders(&args.pattern);
    for name in keys.keys().filter(|name| !placeholders.contains(*name)) {
        warn!("Key '{}' does not appear in the pattern", name);
    }

    let spec: Vec<(String, Vec<String>)> = spec_from_map(&keys)?
        .into_iter()
        .map(|(name, values)| (name, values.iter().map(display_value).collect()))
        .collect();

    let paths = expand_pattern(&args.pattern, &spec)
        .collect::<Result<Vec<_>, _>>()
        .context("Failed to expand pattern")?;
    info!("Expanded {} path(s)", paths.len());

    let mut paths = paths;
    if args.sort {
        sort_natural(&mut paths);
    }

    for path in paths {
        println!("{}", path);
    }

    Ok(())
}
