//! # Error Types
//!
//! Stage-level error signalling for the verification pipeline. Every
//! collaborator failure is expressed as a [`StageError`]; the pipeline then
//! degrades it to the stage's local default. No stage error ever becomes a
//! failed verification on its own.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Pipeline stage that produced an error or a degraded value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Identifier Resolver (including the external decode call).
    Resolve,
    /// Metadata Fetcher (content gateway).
    Fetch,
    /// Ledger Cross-Referencer (indexer query).
    CrossReference,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Resolve => write!(f, "resolve"),
            Self::Fetch => write!(f, "fetch"),
            Self::CrossReference => write!(f, "cross_reference"),
        }
    }
}

/// Classification of a collaborator failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageErrorKind {
    /// Connection refused, DNS failure, TLS error, reset.
    Transport,
    /// The per-request timeout elapsed.
    Timeout,
    /// The collaborator answered with a non-success HTTP status.
    Status,
    /// The body was not JSON or did not have the expected shape.
    Malformed,
    /// The collaborator answered successfully but with nothing usable.
    Empty,
}

impl std::fmt::Display for StageErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport => write!(f, "transport"),
            Self::Timeout => write!(f, "timeout"),
            Self::Status => write!(f, "status"),
            Self::Malformed => write!(f, "malformed"),
            Self::Empty => write!(f, "empty"),
        }
    }
}

/// A failure inside one pipeline stage.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{stage} stage failed ({kind}): {detail}")]
pub struct StageError {
    /// Stage the failure happened in.
    pub stage: Stage,
    /// What went wrong.
    pub kind: StageErrorKind,
    /// Human-readable context (endpoint, status, parser message).
    pub detail: String,
}

impl StageError {
    /// Build a stage error.
    pub fn new(stage: Stage, kind: StageErrorKind, detail: impl Into<String>) -> Self {
        Self {
            stage,
            kind,
            detail: detail.into(),
        }
    }
}

/// Rejected content identifier.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentifierError {
    /// Identifiers must contain at least one character.
    #[error("content identifier must not be empty")]
    Empty,
}
