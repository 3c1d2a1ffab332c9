//! Merge command - Merge a key file with overrides.

use anyhow::Result;
use clap::Args;
use serde_json::Value;

use super::ValueArgs;

#[derive(Args)]
pub struct MergeArgs {
    #[command(flatten)]
    values: ValueArgs,

    /// Pretty-print the merged keys
    #[arg(long)]
    pretty: bool,
}

pub fn execute(args: MergeArgs) -> Result<()> {
    let merged = Value::Object(args.values.resolve()?);

    if args.pretty {
        println!("{}", serde_json::to_string_pretty(&merged)?);
    } else {
        println!("{}", merged);
    }

    Ok(())
}
