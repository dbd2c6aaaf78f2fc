//! # Ledger Records
//!
//! Rows of the indexed on-chain activity log. Records arrive ordered by
//! `transaction_version` descending and are kept in that order.

use serde::{Deserialize, Deserializer, Serialize};

/// One token activity row returned by the ledger indexer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerRecord {
    /// Activity kind as reported by the indexer (mint, transfer, burn, ...).
    pub event_type: String,
    #[serde(default)]
    pub token_name: String,
    #[serde(default)]
    pub collection_name: String,
    /// The indexer encodes 64-bit versions either as numbers or strings.
    #[serde(deserialize_with = "version_from_number_or_string")]
    pub transaction_version: u64,
}

/// How many ledger records a call site asks for.
///
/// The cross-referencer imposes no limit of its own; callers pick one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordLimit {
    /// Existence check: a single record decides the verdict.
    QuickCheck,
    /// Detail view: enough history to render provenance.
    Detail,
    /// Caller-chosen bound.
    Custom(u32),
}

impl RecordLimit {
    /// Row count sent to the indexer.
    pub fn rows(self) -> u32 {
        match self {
            Self::QuickCheck => 1,
            Self::Detail => 10,
            Self::Custom(n) => n,
        }
    }
}

impl Default for RecordLimit {
    fn default() -> Self {
        Self::QuickCheck
    }
}

fn version_from_number_or_string<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Version {
        Number(u64),
        Text(String),
    }

    match Version::deserialize(deserializer)? {
        Version::Number(n) => Ok(n),
        Version::Text(s) => s
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid transaction_version: {s:?}"))),
    }
}
