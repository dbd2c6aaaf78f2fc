//! # lqc-cli — LiquorChain Verification CLI
//!
//! Provides the `lqc` command-line interface over the verification pipeline.
//!
//! ## Subcommands
//!
//! - `lqc verify`: Resolve a scanned or typed code, fetch its metadata, and
//!   cross-reference the ledger. Prints the verdict as JSON.
//! - `lqc resolve`: Normalize a typed code to a content identifier without
//!   touching the network.
//!
//! ```bash
//! lqc verify --text ipfs://bafybeib123
//! lqc verify --image label.png --fallback bafybeib123 --quick
//! lqc --gateway http://localhost:8080/ipfs/ verify --text bafybeib123
//! lqc resolve https://ipfs.io/ipfs/bafybeib123
//! ```
//!
//! ## Exit Codes
//!
//! `0` on a positive verdict (or a resolved identifier), `2` on a negative
//! verdict (or no identifier), `1` on usage, configuration, or I/O errors.

pub mod endpoints;
pub mod resolve;
pub mod verify;

/// Exit code for a positive verdict.
pub const EXIT_VERIFIED: u8 = 0;

/// Exit code for a negative verdict or an unresolvable code.
pub const EXIT_NOT_VERIFIED: u8 = 2;
