//! # Ledger Cross-Referencer
//!
//! Looks for ledger activity consistent with the metadata document.
//!
//! The query is always scoped to the indexer's collection. When the
//! metadata carries a name, the query also requires an exact token-name
//! match; when it does not (including every fallback document), the name
//! filter is dropped so the verdict can still surface some signal from the
//! collection as a whole.
//!
//! A failed query yields zero records. The verdict cannot tell that apart
//! from "no matching activity"; the stage error is surfaced separately as a
//! diagnostic.

use lqc_client::{LedgerIndexer, LedgerQuery};
use lqc_core::{LedgerRecord, MetadataDocument, Stage, StageError};

/// Build the ledger query for `metadata`.
pub fn build_query(metadata: &MetadataDocument, collection_name: &str, limit: u32) -> LedgerQuery {
    let query = LedgerQuery::collection(collection_name, limit);
    if metadata.has_name() {
        query.with_token_name(metadata.name.as_str())
    } else {
        query
    }
}

/// Query the ledger, reporting failure as a [`StageError`].
pub async fn query_ledger<L: LedgerIndexer>(
    indexer: &L,
    metadata: &MetadataDocument,
    limit: u32,
) -> Result<Vec<LedgerRecord>, StageError> {
    let query = build_query(metadata, indexer.collection_name(), limit);
    tracing::debug!(
        collection = query.collection_name(),
        token_name = query.token_name().unwrap_or_default(),
        filtered = query.token_name().is_some(),
        limit,
        "querying ledger"
    );
    indexer
        .query(&query)
        .await
        .map_err(|e| StageError::new(Stage::CrossReference, e.kind(), e.to_string()))
}

/// Query the ledger, degrading failure to an empty record list.
pub async fn cross_reference_or_empty<L: LedgerIndexer>(
    indexer: &L,
    metadata: &MetadataDocument,
    limit: u32,
) -> (Vec<LedgerRecord>, Option<StageError>) {
    match query_ledger(indexer, metadata, limit).await {
        Ok(records) => {
            tracing::debug!(count = records.len(), "ledger records found");
            (records, None)
        }
        Err(err) => {
            tracing::warn!(
                kind = %err.kind,
                detail = %err.detail,
                "ledger query failed; treating as no records"
            );
            (Vec::new(), Some(err))
        }
    }
}

/// Records consistent with `metadata`, newest first. Never fails.
pub async fn cross_reference<L: LedgerIndexer>(
    indexer: &L,
    metadata: &MetadataDocument,
    limit: u32,
) -> Vec<LedgerRecord> {
    cross_reference_or_empty(indexer, metadata, limit).await.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{record, FakeIndexer, TEST_COLLECTION};
    use lqc_core::StageErrorKind;

    fn named(name: &str) -> MetadataDocument {
        let mut doc = MetadataDocument::fallback("ipfs://img");
        doc.name = name.to_string();
        doc
    }

    #[test]
    fn named_metadata_builds_filtered_query() {
        let q = build_query(&named("Bordeaux Reserve 2024"), TEST_COLLECTION, 3);
        assert_eq!(q.token_name(), Some("Bordeaux Reserve 2024"));
        assert_eq!(q.collection_name(), TEST_COLLECTION);
        assert_eq!(q.limit(), 3);
    }

    #[test]
    fn unnamed_metadata_builds_collection_query() {
        let q = build_query(&MetadataDocument::fallback("x"), TEST_COLLECTION, 10);
        assert_eq!(q.token_name(), None);
        assert_eq!(q.limit(), 10);
    }

    #[tokio::test]
    async fn filtered_query_is_issued_for_named_metadata() {
        let indexer = FakeIndexer::records(vec![record("Bordeaux Reserve 2024", 7)]);
        let records = cross_reference(&indexer, &named("Bordeaux Reserve 2024"), 1).await;
        assert_eq!(records.len(), 1);
        let queries = indexer.queries();
        assert_eq!(queries.len(), 1);
        assert_eq!(queries[0].token_name(), Some("Bordeaux Reserve 2024"));
    }

    #[tokio::test]
    async fn unfiltered_query_is_issued_for_empty_name() {
        let indexer = FakeIndexer::records(Vec::new());
        let records = cross_reference(&indexer, &named(""), 10).await;
        assert!(records.is_empty());
        let queries = indexer.queries();
        assert_eq!(queries.len(), 1);
        assert_eq!(queries[0].token_name(), None);
        assert!(queries[0].where_clause().get("name").is_none());
    }

    #[tokio::test]
    async fn limit_is_passed_through() {
        let indexer = FakeIndexer::records(vec![record("a", 3), record("a", 2), record("a", 1)]);
        let records = cross_reference(&indexer, &named("a"), 2).await;
        assert_eq!(records.len(), 2);
        assert_eq!(indexer.queries()[0].limit(), 2);
    }

    #[tokio::test]
    async fn records_keep_indexer_order() {
        let indexer = FakeIndexer::records(vec![record("a", 1), record("a", 9), record("a", 5)]);
        let records = cross_reference(&indexer, &named("a"), 10).await;
        let versions: Vec<u64> = records.iter().map(|r| r.transaction_version).collect();
        assert_eq!(versions, vec![1, 9, 5]);
    }

    #[tokio::test]
    async fn query_failure_degrades_to_empty() {
        let indexer = FakeIndexer::failing();
        let (records, err) = cross_reference_or_empty(&indexer, &named("a"), 1).await;
        assert!(records.is_empty());
        let err = err.unwrap();
        assert_eq!(err.stage, Stage::CrossReference);
        assert_eq!(err.kind, StageErrorKind::Status);
    }
}
