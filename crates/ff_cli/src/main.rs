//! filefinder CLI - Main entry point.
//!
//! Exit codes:
//! - 0: Success
//! - 1: General error
//! - 2: Invalid arguments
//! - 3: Pattern or value spec error

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ff_patterns::PatternError;

mod commands;

use commands::{Cli, Commands};

/// CI-friendly exit codes
pub struct ExitCodes;

impl ExitCodes {
    pub const SUCCESS: u8 = 0;
    pub const GENERAL_ERROR: u8 = 1;
    pub const INVALID_ARGS: u8 = 2;
    pub const PATTERN_ERROR: u8 = 3;
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };

    let mut filter = EnvFilter::from_default_env().add_directive("warn".parse().expect("static directive"));
    for target in ["ff_cli", "ff_patterns"] {
        if let Ok(directive) = format!("{}={}", target, default_level).parse() {
            filter = filter.add_directive(directive);
        }
    }

    // Ignore the error when a subscriber is already installed.
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    let result = match cli.command {
        Commands::Keys(args) => commands::keys::execute(args),
        Commands::Sort(args) => commands::sort::execute(args),
        Commands::Expand(args) => commands::expand::execute(args),
        Commands::Combos(args) => commands::combos::execute(args),
        Commands::Merge(args) => commands::merge::execute(args),
    };

    match result {
        Ok(()) => ExitCode::from(ExitCodes::SUCCESS),
        Err(e) => {
            let exit_code = categorize_error(&e);
            eprintln!("Error: {:#}", e);
            ExitCode::from(exit_code)
        }
    }
}

/// Categorize error to determine exit code
fn categorize_error(e: &anyhow::Error) -> u8 {
    if e.chain().any(|cause| cause.downcast_ref::<PatternError>().is_some()) {
        ExitCodes::PATTERN_ERROR
    } else if e.to_string().to_lowercase().contains("argument") {
        ExitCodes::INVALID_ARGS
    } else {
        ExitCodes::GENERAL_ERROR
    }
}
