//! Sort command - Sort items in natural order.

use std::io::{self, BufRead};

use anyhow::{Context, Result};
use clap::Args;

use ff_patterns::sort_natural;

#[derive(Args)]
pub struct SortArgs {
    /// Items to sort (read from stdin, one per line, when omitted)
    items: Vec<String>,

    /// Reverse the order
    #[arg(short, long)]
    reverse: bool,
}

pub fn execute(args: SortArgs) -> Result<()> {
    let mut items = if args.items.is_empty() {
        io::stdin()
            .lock()
            .lines()
            .collect::<io::Result<Vec<_>>>()
            .context("Failed to read items from stdin")?
    } else {
        args.items
    };

    sort_natural(&mut items);
    if args.reverse {
        items.reverse();
    }

    for item in items {
        println!("{}", item);
    }

    Ok(())
}
