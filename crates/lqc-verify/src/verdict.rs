//! # Verdict Assembler
//!
//! Combines the stage outputs into a [`VerificationResult`]. The only
//! authenticity signal is whether the ledger returned at least one record;
//! see the `lqc_core::verdict` module docs for what that does and does not
//! prove.

use lqc_core::{
    ContentIdentifier, Diagnostic, LedgerRecord, MetadataDocument, StageError, VerificationResult,
};

/// Assemble the verdict for a request that reached the ledger.
pub fn assemble(
    identifier: ContentIdentifier,
    metadata: MetadataDocument,
    records: Vec<LedgerRecord>,
    degraded: Vec<StageError>,
) -> VerificationResult {
    let result = VerificationResult::from_evidence(
        identifier,
        metadata,
        records,
        degraded.into_iter().map(Diagnostic::from).collect(),
    );
    tracing::info!(
        success = result.success(),
        records = result.records().len(),
        partial_metadata = result.partial_metadata(),
        reason = result.failure_reason().map(|r| r.to_string()).unwrap_or_default(),
        "verification verdict"
    );
    result
}

/// Short-circuit verdict when no identifier could be resolved.
pub fn identifier_missing(degraded: Vec<StageError>) -> VerificationResult {
    tracing::info!(success = false, reason = "identifier_missing", "verification verdict");
    VerificationResult::identifier_missing(degraded.into_iter().map(Diagnostic::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::record;
    use lqc_core::{FailureReason, Stage, StageErrorKind};

    fn cid() -> ContentIdentifier {
        ContentIdentifier::new("bafybeib123").unwrap()
    }

    #[test]
    fn success_with_records() {
        let result = assemble(
            cid(),
            MetadataDocument::fallback("x"),
            vec![record("Batch1", 1)],
            Vec::new(),
        );
        assert!(result.success());
        assert!(result.failure_reason().is_none());
        assert!(result.diagnostics().is_empty());
    }

    #[test]
    fn failure_without_records_is_no_match() {
        let result = assemble(cid(), MetadataDocument::fallback("x"), Vec::new(), Vec::new());
        assert!(!result.success());
        assert_eq!(result.failure_reason(), Some(FailureReason::NoMatch));
    }

    #[test]
    fn degradations_become_diagnostics() {
        let degraded = vec![
            StageError::new(Stage::Fetch, StageErrorKind::Timeout, "GET /ipfs/x timed out"),
            StageError::new(Stage::CrossReference, StageErrorKind::Transport, "refused"),
        ];
        let result = assemble(cid(), MetadataDocument::fallback("x"), Vec::new(), degraded);
        assert!(result.partial_metadata());
        assert_eq!(result.failure_reason(), Some(FailureReason::NoMatch));
        assert_eq!(result.diagnostics().len(), 2);
        assert_eq!(result.diagnostics()[1].stage, Stage::CrossReference);
    }

    #[test]
    fn identifier_missing_verdict() {
        let result = identifier_missing(Vec::new());
        assert!(!result.success());
        assert_eq!(result.failure_reason(), Some(FailureReason::IdentifierMissing));
        assert!(result.metadata().is_none());
    }
}
