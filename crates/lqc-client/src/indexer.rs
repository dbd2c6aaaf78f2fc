//! # Ledger Indexer (GraphQL)
//!
//! Queries the indexed token activity log. Every query is scoped to one
//! collection; a token-name filter is added only when the metadata carries
//! a name.
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | POST   | `{indexer_url}` | `token_activities` query |
//!
//! The GraphQL selection aliases the indexer's column names onto
//! [`LedgerRecord`] field names, so rows deserialize directly.

use std::future::Future;

use lqc_core::LedgerRecord;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::config::ConfigError;
use crate::error::ClientError;

/// Token activity query, newest transaction first.
pub const TOKEN_ACTIVITIES_QUERY: &str = "\
query LedgerActivity($where: token_activities_bool_exp!, $limit: Int!) {
  token_activities(where: $where, order_by: {transaction_version: desc}, limit: $limit) {
    event_type: transfer_type
    token_name: name
    collection_name
    transaction_version
  }
}";

/// Parameters of one ledger lookup.
///
/// Built by the cross-referencer and sent unchanged; tests inspect it to
/// observe whether the token-name filter is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LedgerQuery {
    collection_name: String,
    token_name: Option<String>,
    limit: u32,
}

impl LedgerQuery {
    /// Query every activity in `collection_name`.
    pub fn collection(collection_name: impl Into<String>, limit: u32) -> Self {
        Self {
            collection_name: collection_name.into(),
            token_name: None,
            limit,
        }
    }

    /// Narrow the query to one token name (exact match).
    pub fn with_token_name(mut self, token_name: impl Into<String>) -> Self {
        self.token_name = Some(token_name.into());
        self
    }

    pub fn collection_name(&self) -> &str {
        &self.collection_name
    }

    /// The name filter, if any.
    pub fn token_name(&self) -> Option<&str> {
        self.token_name.as_deref()
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// GraphQL `where` clause.
    pub fn where_clause(&self) -> Value {
        let mut clause = json!({ "collection_name": { "_eq": self.collection_name } });
        if let (Some(name), Some(map)) = (&self.token_name, clause.as_object_mut()) {
            map.insert("name".into(), json!({ "_eq": name }));
        }
        clause
    }

    /// Full GraphQL request body.
    pub fn to_request_body(&self) -> Value {
        json!({
            "query": TOKEN_ACTIVITIES_QUERY,
            "variables": {
                "where": self.where_clause(),
                "limit": self.limit,
            }
        })
    }
}

/// Source of ledger activity records.
pub trait LedgerIndexer: Send + Sync {
    /// Collection every query is scoped to.
    fn collection_name(&self) -> &str;

    /// Run `query`. Records come back in indexer order.
    fn query(
        &self,
        query: &LedgerQuery,
    ) -> impl Future<Output = Result<Vec<LedgerRecord>, ClientError>> + Send;
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    #[serde(default)]
    data: Option<ActivityData>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
struct ActivityData {
    token_activities: Vec<LedgerRecord>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

/// HTTP client for a Hasura-style GraphQL indexer.
#[derive(Debug, Clone)]
pub struct HttpLedgerIndexer {
    http: reqwest::Client,
    indexer_url: url::Url,
    collection_name: String,
    authorization: Option<reqwest::header::HeaderValue>,
}

impl HttpLedgerIndexer {
    pub(crate) fn new(
        http: reqwest::Client,
        indexer_url: url::Url,
        collection_name: String,
        api_key: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let authorization = api_key
            .map(|key| {
                let mut value = reqwest::header::HeaderValue::from_str(&format!("Bearer {key}"))
                    .map_err(|_| ConfigError::InvalidApiKey)?;
                value.set_sensitive(true);
                Ok::<_, ConfigError>(value)
            })
            .transpose()?;
        Ok(Self {
            http,
            indexer_url,
            collection_name,
            authorization,
        })
    }

    fn endpoint(&self) -> String {
        format!("POST {}", self.indexer_url.path())
    }
}

impl LedgerIndexer for HttpLedgerIndexer {
    fn collection_name(&self) -> &str {
        &self.collection_name
    }

    async fn query(&self, query: &LedgerQuery) -> Result<Vec<LedgerRecord>, ClientError> {
        let endpoint = self.endpoint();
        let mut request = self
            .http
            .post(self.indexer_url.clone())
            .json(&query.to_request_body());
        if let Some(auth) = &self.authorization {
            request = request.header(reqwest::header::AUTHORIZATION, auth.clone());
        }

        let resp = request.send().await.map_err(|e| ClientError::Http {
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

        let body: GraphQlResponse = resp.json().await.map_err(|e| ClientError::Deserialization {
            endpoint: endpoint.clone(),
            source: e,
        })?;

        if !body.errors.is_empty() {
            return Err(ClientError::GraphQl {
                endpoint,
                messages: body.errors.into_iter().map(|e| e.message).collect(),
            });
        }

        body.data
            .map(|d| d.token_activities)
            .ok_or_else(|| ClientError::Shape {
                endpoint,
                detail: "response has neither data nor errors".into(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_query_filters_by_collection_and_name() {
        let q = LedgerQuery::collection("LiquorChain Collection", 3)
            .with_token_name("Bordeaux Reserve 2024");
        assert_eq!(
            q.where_clause(),
            json!({
                "collection_name": {"_eq": "LiquorChain Collection"},
                "name": {"_eq": "Bordeaux Reserve 2024"}
            })
        );
        assert_eq!(q.to_request_body()["variables"]["limit"], json!(3));
    }

    #[test]
    fn unnamed_query_has_no_name_filter() {
        let q = LedgerQuery::collection("LiquorChain Collection", 1);
        assert!(q.token_name().is_none());
        let clause = q.where_clause();
        assert!(clause.get("name").is_none());
        assert_eq!(clause["collection_name"]["_eq"], "LiquorChain Collection");
    }

    #[test]
    fn query_orders_by_version_descending() {
        assert!(TOKEN_ACTIVITIES_QUERY.contains("order_by: {transaction_version: desc}"));
        assert!(TOKEN_ACTIVITIES_QUERY.contains("limit: $limit"));
    }
}
