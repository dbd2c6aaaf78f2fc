//! # Content Gateway
//!
//! Retrieves metadata documents from a content-addressed store over HTTP.
//! The retrieval location is `gateway_base` with the identifier appended
//! verbatim (string concatenation, not URL joining), so a base of
//! `https://ipfs.io/ipfs/` and identifier `bafy...` yields
//! `https://ipfs.io/ipfs/bafy...`.

use std::future::Future;

use lqc_core::{ContentIdentifier, MetadataDocument};

use crate::error::ClientError;

/// Resolves a content identifier to its metadata document.
pub trait ContentGateway: Send + Sync {
    /// Where `identifier` is retrieved from. Also the fallback `image`.
    fn location(&self, identifier: &ContentIdentifier) -> String;

    /// Retrieve and parse the document at [`Self::location`].
    fn fetch_document(
        &self,
        identifier: &ContentIdentifier,
    ) -> impl Future<Output = Result<MetadataDocument, ClientError>> + Send;
}

/// HTTP client for an IPFS-style gateway.
#[derive(Debug, Clone)]
pub struct HttpContentGateway {
    http: reqwest::Client,
    gateway_base: String,
}

impl HttpContentGateway {
    pub(crate) fn new(http: reqwest::Client, gateway_base: String) -> Self {
        Self { http, gateway_base }
    }
}

impl ContentGateway for HttpContentGateway {
    fn location(&self, identifier: &ContentIdentifier) -> String {
        format!("{}{}", self.gateway_base, identifier)
    }

    async fn fetch_document(
        &self,
        identifier: &ContentIdentifier,
    ) -> Result<MetadataDocument, ClientError> {
        let url = self.location(identifier);
        let endpoint = format!("GET {url}");

        let resp = self.http.get(&url).send().await.map_err(|e| ClientError::Http {
            endpoint: endpoint.clone(),
            source: e,
        })?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(ClientError::ApiError {
                endpoint,
                status,
                body,
            });
        }

        resp.json().await.map_err(|e| ClientError::Deserialization {
            endpoint,
            source: e,
        })
    }
}
