//! # Verification Verdicts
//!
//! [`VerificationResult`] is the sole externally observable output of the
//! pipeline. It is built fresh per request and owned by the caller.
//!
//! ## Authenticity Semantics
//!
//! The verdict is deliberately weak: `success` means "at least one ledger
//! activity record plausibly corresponds to this metadata". No signature,
//! hash, or other cryptographic binding between the scanned code, the
//! metadata document, and the on-chain token is checked. When the metadata
//! has no name, the ledger is queried by collection only, so any activity in
//! the collection produces a positive verdict. Consumers presenting the
//! verdict as proof of authenticity must account for this.

use serde::{Deserialize, Serialize};

use crate::error::{Stage, StageError, StageErrorKind};
use crate::identity::ContentIdentifier;
use crate::ledger::LedgerRecord;
use crate::metadata::MetadataDocument;

/// Why a verification failed, or degraded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureReason {
    /// No usable candidate after decode and typed fallback.
    IdentifierMissing,
    /// The pipeline completed but found zero ledger records. Also covers a
    /// failed ledger query; see [`VerificationResult::diagnostics`].
    NoMatch,
    /// Metadata retrieval fell back to the synthesized document. Non-fatal.
    PartialMetadata,
}

impl std::fmt::Display for FailureReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IdentifierMissing => write!(f, "identifier_missing"),
            Self::NoMatch => write!(f, "no_match"),
            Self::PartialMetadata => write!(f, "partial_metadata"),
        }
    }
}

/// A degradation recorded while the pipeline ran.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub stage: Stage,
    pub kind: StageErrorKind,
    pub detail: String,
}

impl From<StageError> for Diagnostic {
    fn from(err: StageError) -> Self {
        Self {
            stage: err.stage,
            kind: err.kind,
            detail: err.detail,
        }
    }
}

/// Outcome of one verification request.
///
/// Fields are read-only: `success`, `failure_reason` and `partial_metadata`
/// are derived at construction and cannot drift from the evidence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VerificationResult {
    success: bool,
    identifier: Option<ContentIdentifier>,
    metadata: Option<MetadataDocument>,
    records: Vec<LedgerRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    failure_reason: Option<FailureReason>,
    partial_metadata: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    diagnostics: Vec<Diagnostic>,
}

impl VerificationResult {
    /// Verdict for a request that reached the ledger.
    ///
    /// `success` is true iff `records` is non-empty. A fetch-stage
    /// diagnostic marks the metadata as partial.
    pub fn from_evidence(
        identifier: ContentIdentifier,
        metadata: MetadataDocument,
        records: Vec<LedgerRecord>,
        diagnostics: Vec<Diagnostic>,
    ) -> Self {
        let success = !records.is_empty();
        let partial_metadata = diagnostics.iter().any(|d| d.stage == Stage::Fetch);
        Self {
            success,
            identifier: Some(identifier),
            metadata: Some(metadata),
            records,
            failure_reason: (!success).then_some(FailureReason::NoMatch),
            partial_metadata,
            diagnostics,
        }
    }

    /// Short-circuit verdict: nothing to look up.
    pub fn identifier_missing(diagnostics: Vec<Diagnostic>) -> Self {
        Self {
            success: false,
            identifier: None,
            metadata: None,
            records: Vec::new(),
            failure_reason: Some(FailureReason::IdentifierMissing),
            partial_metadata: false,
            diagnostics,
        }
    }

    pub fn success(&self) -> bool {
        self.success
    }

    /// Resolved identifier. `None` only for `identifier_missing`.
    pub fn identifier(&self) -> Option<&ContentIdentifier> {
        self.identifier.as_ref()
    }

    /// Retrieved or fallback metadata. `None` only for `identifier_missing`.
    pub fn metadata(&self) -> Option<&MetadataDocument> {
        self.metadata.as_ref()
    }

    /// Ledger records in indexer order (transaction version descending).
    pub fn records(&self) -> &[LedgerRecord] {
        &self.records
    }

    pub fn failure_reason(&self) -> Option<FailureReason> {
        self.failure_reason
    }

    pub fn partial_metadata(&self) -> bool {
        self.partial_metadata
    }

    /// Stage failures that were degraded to defaults during this request.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}
