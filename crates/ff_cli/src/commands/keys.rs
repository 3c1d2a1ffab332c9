//! Keys command - List the placeholders of a pattern.

use anyhow::Result;
use clap::Args;
use tracing::debug;

use ff_patterns::placeholders_in_order;

#[derive(Args)]
pub struct KeysArgs {
    /// Path pattern, e.g. "/data/{model}/{year}.nc"
    pattern: String,
}

pub fn execute(args: KeysArgs) -> Result<()> {
    let names = placeholders_in_order(&args.pattern);
    debug!("Found {} placeholder(s) in {:?}", names.len(), args.pattern);

    for name in names {
        println!("{}", name);
    }

    Ok(())
}
