//! # Resolve CLI — offline code normalization.
//!
//! ```bash
//! lqc resolve ipfs://bafybeib123          # prints bafybeib123
//! lqc resolve https://ipfs.io/ipfs/bafy1  # prints bafy1
//! ```

use anyhow::Result;
use clap::Args;

use crate::{EXIT_NOT_VERIFIED, EXIT_VERIFIED};

/// Resolve subcommand arguments.
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Scanned or typed code to normalize.
    pub text: String,
}

/// Execute the resolve subcommand.
pub fn run_resolve(args: &ResolveArgs) -> Result<u8> {
    match lqc_verify::normalize(&args.text) {
        Some(identifier) => {
            println!("{identifier}");
            Ok(EXIT_VERIFIED)
        }
        None => {
            eprintln!("no content identifier in input");
            Ok(EXIT_NOT_VERIFIED)
        }
    }
}
