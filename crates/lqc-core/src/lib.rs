//! # lqc-core — Foundational Types for Provenance Verification
//!
//! Defines the data model shared by every stage of the LiquorChain
//! authenticity pipeline. This crate depends on nothing internal; the HTTP
//! collaborators live in `lqc-client` and the pipeline in `lqc-verify`.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype for content identifiers.** A [`ContentIdentifier`] can only be
//!    constructed non-empty, so "no identifier" is always an explicit
//!    `Option::None` and never an empty string travelling downstream.
//!
//! 2. **Fallback documents are values, not errors.** A [`MetadataDocument`]
//!    always exists once an identifier does; [`MetadataDocument::fallback`]
//!    is the single constructor for the degraded form.
//!
//! 3. **One verdict type.** [`VerificationResult`] is the only externally
//!    observable output, and `success` is derived from the ledger records
//!    rather than stored independently.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod identity;
pub mod ledger;
pub mod metadata;
pub mod scan;
pub mod verdict;

pub use error::{IdentifierError, Stage, StageError, StageErrorKind};
pub use identity::{ContentIdentifier, CONTENT_SCHEME_PREFIX, GATEWAY_PATH_SEGMENT};
pub use ledger::{LedgerRecord, RecordLimit};
pub use metadata::MetadataDocument;
pub use scan::ScanInput;
pub use verdict::{Diagnostic, FailureReason, VerificationResult};
