//! # Content Identifiers
//!
//! A content identifier (CID) addresses an immutable document in a
//! content-addressed store. The pipeline treats it as an opaque token:
//! no multibase or multihash validation is performed, only non-emptiness.

use serde::{Deserialize, Serialize};

use crate::error::IdentifierError;

/// Scheme prefix recognised in front of a bare identifier (`ipfs://<cid>`).
pub const CONTENT_SCHEME_PREFIX: &str = "ipfs://";

/// Gateway path segment that precedes an identifier in gateway URLs
/// (`https://gw.example/ipfs/<cid>`).
pub const GATEWAY_PATH_SEGMENT: &str = "/ipfs/";

/// Opaque, non-empty content identifier.
///
/// Equality is exact string equality on the normalized value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ContentIdentifier(String);

impl ContentIdentifier {
    /// Create an identifier, rejecting the empty string.
    pub fn new(value: impl Into<String>) -> Result<Self, IdentifierError> {
        let value = value.into();
        if value.is_empty() {
            return Err(IdentifierError::Empty);
        }
        Ok(Self(value))
    }

    /// Access the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ContentIdentifier {
    type Error = IdentifierError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ContentIdentifier> for String {
    fn from(id: ContentIdentifier) -> Self {
        id.0
    }
}

impl AsRef<str> for ContentIdentifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ContentIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
