//! # lqc CLI entry point
//!
//! Parses command-line arguments, installs the tracing subscriber, and
//! dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use lqc_cli::endpoints::EndpointArgs;
use lqc_cli::resolve::{run_resolve, ResolveArgs};
use lqc_cli::verify::{run_verify, VerifyArgs};

/// LiquorChain bottle verification.
///
/// Resolves a scanned or typed bottle code to a content identifier, fetches
/// the bottle's metadata, and checks the ledger for matching activity.
#[derive(Parser, Debug)]
#[command(name = "lqc", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(flatten)]
    endpoints: EndpointArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Verify a bottle code against the ledger.
    Verify(VerifyArgs),

    /// Normalize a code to a content identifier without network access.
    Resolve(ResolveArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    if cli.log_json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "lqc CLI starting");

    let result = match &cli.command {
        Commands::Verify(args) => run_verify(args, &cli.endpoints),
        Commands::Resolve(args) => run_resolve(args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("error: {e:#}");
            ExitCode::from(1)
        }
    }
}
