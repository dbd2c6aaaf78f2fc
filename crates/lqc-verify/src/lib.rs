//! # lqc-verify — Authenticity Verification Pipeline
//!
//! Decides whether a scanned bottle code corresponds to LiquorChain ledger
//! activity. Four stages run strictly in sequence:
//!
//! 1. [`resolver`]: scan payload or typed text → content identifier.
//! 2. [`fetcher`]: identifier → metadata document (fallback on failure).
//! 3. [`crossref`]: metadata → ledger records (named match, else
//!    collection-wide).
//! 4. [`verdict`]: evidence → [`VerificationResult`].
//!
//! A missing identifier ends the pipeline after stage 1 with
//! `identifier_missing`; stages 2 and 3 are not called.
//!
//! ## Failure Policy
//!
//! Each stage reports collaborator failures as `Result<_, StageError>` and
//! the pipeline degrades them to the stage default (no candidate, fallback
//! document, empty record list). Verification therefore never fails because
//! a collaborator did; the degradations are listed in
//! [`VerificationResult::diagnostics`]. There are no retries.
//!
//! ## Authenticity Caveat
//!
//! A positive verdict only means "some ledger activity matched". Nothing in
//! the pipeline checks a signature or content hash.

pub mod crossref;
pub mod error;
pub mod fetcher;
pub mod pipeline;
pub mod resolver;
pub mod verdict;

#[cfg(test)]
mod testing;

pub use error::VerifyError;
pub use lqc_core::VerificationResult;
pub use pipeline::{Verifier, VerifyRequest};
pub use resolver::normalize;
pub use tokio_util::sync::CancellationToken;
