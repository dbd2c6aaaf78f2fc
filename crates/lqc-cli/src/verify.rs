//! # Verify CLI — run the full verification pipeline.
//!
//! ```bash
//! # Typed code, full activity history:
//! lqc verify --text ipfs://bafybeib123
//!
//! # Scanned label, typed fallback, single-record check:
//! lqc verify --image label.png --fallback bafybeib123 --quick
//! ```
//!
//! The verdict is printed to stdout as pretty JSON. Logs go to stderr.
//! Ctrl-C cancels the in-flight collaborator call.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use lqc_core::{RecordLimit, ScanInput};
use lqc_verify::{CancellationToken, Verifier, VerifyRequest};

use crate::endpoints::EndpointArgs;
use crate::{EXIT_NOT_VERIFIED, EXIT_VERIFIED};

/// Verify subcommand arguments.
#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Typed or pasted code (scheme URI, gateway URL, or bare identifier).
    #[arg(long, conflicts_with = "image")]
    pub text: Option<String>,

    /// Image of the bottle's QR label to decode.
    #[arg(long, value_name = "PATH")]
    pub image: Option<PathBuf>,

    /// Typed code used when the image cannot be decoded.
    #[arg(long, requires = "image")]
    pub fallback: Option<String>,

    /// Maximum number of ledger records to return.
    #[arg(long, value_name = "N", conflicts_with = "quick")]
    pub limit: Option<u32>,

    /// Stop at the first matching ledger record.
    #[arg(long)]
    pub quick: bool,
}

impl VerifyArgs {
    /// Record limit selected by `--quick` / `--limit`; full history otherwise.
    pub fn record_limit(&self) -> RecordLimit {
        match (self.quick, self.limit) {
            (true, _) => RecordLimit::QuickCheck,
            (false, Some(n)) => RecordLimit::Custom(n),
            (false, None) => RecordLimit::Detail,
        }
    }

    /// Build the pipeline request, reading the image from disk if given.
    pub fn to_request(&self) -> Result<VerifyRequest> {
        let request = match &self.image {
            Some(path) => {
                let mut request = VerifyRequest::new(ScanInput::Image(read_image(path)?));
                if let Some(fallback) = &self.fallback {
                    request = request.with_fallback(fallback.clone());
                }
                request
            }
            None => VerifyRequest::text(self.text.clone().unwrap_or_default()),
        };
        Ok(request.with_limit(self.record_limit()))
    }
}

fn read_image(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("failed to read image {}", path.display()))
}

/// Execute the verify subcommand.
pub fn run_verify(args: &VerifyArgs, endpoints: &EndpointArgs) -> Result<u8> {
    let config = endpoints.resolve_config()?;
    tracing::debug!(?config, "resolved collaborator configuration");
    let request = args.to_request()?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    runtime.block_on(async move {
        let verifier = Verifier::from_config(config)?;

        let cancel = CancellationToken::new();
        let on_interrupt = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::warn!("interrupt received; cancelling verification");
                on_interrupt.cancel();
            }
        });

        let result = verifier.verify_cancellable(request, &cancel).await?;
        let rendered =
            serde_json::to_string_pretty(&result).context("failed to render verdict")?;
        println!("{rendered}");

        let code = if result.success() {
            EXIT_VERIFIED
        } else {
            EXIT_NOT_VERIFIED
        };
        Ok::<u8, anyhow::Error>(code)
    })
}
