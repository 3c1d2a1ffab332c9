//! Combos command - Print every combination of values.

use anyhow::Result;
use clap::Args;
use serde_json::{Map, Value};

use ff_patterns::{display_value, generate_combinations, spec_from_map};

use super::ValueArgs;

#[derive(Args)]
pub struct CombosArgs {
    #[command(flatten)]
    values: ValueArgs,

    /// Print one JSON object per line instead of KEY=VALUE pairs
    #[arg(long)]
    json: bool,
}

pub fn execute(args: CombosArgs) -> Result<()> {
    let keys = args.values.resolve()?;
    let spec = spec_from_map(&keys)?;

    for combination in generate_combinations(&spec) {
        if args.json {
            let object: Map<String, Value> = combination
                .into_iter()
                .map(|(name, value)| (name.clone(), value.clone()))
                .collect();
            println!("{}", Value::Object(object));
        } else {
            let pairs: Vec<String> = combination
                .into_iter()
                .map(|(name, value)| format!("{}={}", name, display_value(value)))
                .collect();
            println!("{}", pairs.join(" "));
        }
    }

    Ok(())
}
