//! # Metadata Fetcher
//!
//! Retrieves the metadata document for a resolved identifier. Retrieval
//! never fails from the caller's point of view: any transport, status, or
//! parse failure yields [`MetadataDocument::fallback`] pointing at the
//! retrieval location, so the cross-referencer always has a well-formed
//! input. No retries.

use lqc_client::ContentGateway;
use lqc_core::{ContentIdentifier, MetadataDocument, Stage, StageError};

/// Retrieve and parse the document, reporting failure as a [`StageError`].
pub async fn fetch_metadata<G: ContentGateway>(
    gateway: &G,
    identifier: &ContentIdentifier,
) -> Result<MetadataDocument, StageError> {
    gateway
        .fetch_document(identifier)
        .await
        .map_err(|e| StageError::new(Stage::Fetch, e.kind(), e.to_string()))
}

/// Retrieve the document, degrading failure to the fallback document.
///
/// The stage error, if any, is returned alongside so the verdict can be
/// marked `partial_metadata`.
pub async fn fetch_or_fallback<G: ContentGateway>(
    gateway: &G,
    identifier: &ContentIdentifier,
) -> (MetadataDocument, Option<StageError>) {
    match fetch_metadata(gateway, identifier).await {
        Ok(doc) => {
            tracing::debug!(identifier = %identifier, name = %doc.name, "metadata retrieved");
            (doc, None)
        }
        Err(err) => {
            let location = gateway.location(identifier);
            tracing::warn!(
                identifier = %identifier,
                kind = %err.kind,
                detail = %err.detail,
                "metadata unavailable; using fallback document"
            );
            (MetadataDocument::fallback(location), Some(err))
        }
    }
}

/// Retrieve the document for `identifier`. Never fails.
pub async fn fetch<G: ContentGateway>(gateway: &G, identifier: &ContentIdentifier) -> MetadataDocument {
    fetch_or_fallback(gateway, identifier).await.0
}
