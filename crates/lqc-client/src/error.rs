//! Collaborator client error types.

use lqc_core::StageErrorKind;

/// Errors from decode-service, gateway, and indexer calls.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// HTTP transport error (including the per-request timeout).
    #[error("HTTP error calling {endpoint}: {source}")]
    Http {
        endpoint: String,
        source: reqwest::Error,
    },
    /// The collaborator returned a non-2xx status.
    #[error("{endpoint} returned {status}: {body}")]
    ApiError {
        endpoint: String,
        status: u16,
        body: String,
    },
    /// Response body was not JSON of the expected type.
    #[error("failed to deserialize response from {endpoint}: {source}")]
    Deserialization {
        endpoint: String,
        source: reqwest::Error,
    },
    /// Response parsed but lacked the fields the caller needs.
    #[error("unexpected response shape from {endpoint}: {detail}")]
    Shape { endpoint: String, detail: String },
    /// The indexer answered with GraphQL `errors`.
    #[error("GraphQL errors from {endpoint}: {}", messages.join("; "))]
    GraphQl {
        endpoint: String,
        messages: Vec<String>,
    },
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] super::config::ConfigError),
}

impl ClientError {
    /// Map onto the pipeline's stage error taxonomy.
    pub fn kind(&self) -> StageErrorKind {
        match self {
            Self::Http { source, .. } if source.is_timeout() => StageErrorKind::Timeout,
            Self::Http { .. } | Self::Config(_) => StageErrorKind::Transport,
            Self::ApiError { .. } | Self::GraphQl { .. } => StageErrorKind::Status,
            Self::Deserialization { .. } | Self::Shape { .. } => StageErrorKind::Malformed,
        }
    }
}
