//! # Metadata Documents
//!
//! The JSON document a minted token's URI points at. Only `name`,
//! `description` and `image` are interpreted; everything else is carried
//! through untouched in [`MetadataDocument::extra`].

use serde::{Deserialize, Deserializer, Serialize};

/// Asset metadata retrieved from the content gateway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataDocument {
    /// Token name. Empty when the document has none (or is a fallback).
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Resolvable image reference. For a fallback document this is the
    /// retrieval location itself.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub image: String,
    /// Implementation-defined fields, passed through unmodified.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl MetadataDocument {
    /// The document synthesized when metadata cannot be retrieved or parsed.
    pub fn fallback(location: impl Into<String>) -> Self {
        Self {
            name: String::new(),
            description: None,
            image: location.into(),
            extra: serde_json::Map::new(),
        }
    }

    /// Whether the cross-referencer can filter the ledger by token name.
    pub fn has_name(&self) -> bool {
        !self.name.is_empty()
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn fallback_has_empty_name_and_location_as_image() {
        let doc = MetadataDocument::fallback("https://ipfs.io/ipfs/abc123");
        assert_eq!(doc.name, "");
        assert_eq!(doc.image, "https://ipfs.io/ipfs/abc123");
        assert!(!doc.has_name());
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let doc: MetadataDocument = serde_json::from_value(json!({"name": "Batch1"})).unwrap();
        assert_eq!(doc.name, "Batch1");
        assert_eq!(doc.image, "");
        assert!(doc.description.is_none());
        assert!(doc.has_name());
    }

    #[test]
    fn null_name_is_treated_as_absent() {
        let doc: MetadataDocument =
            serde_json::from_value(json!({"name": null, "image": "ipfs://img"})).unwrap();
        assert_eq!(doc.name, "");
        assert_eq!(doc.image, "ipfs://img");
    }

    #[test]
    fn extra_fields_pass_through() {
        let input = json!({
            "name": "Bordeaux Reserve 2024",
            "description": "Cask 7",
            "image": "ipfs://bafyimg",
            "attributes": [{"trait_type": "abv", "value": "13.5"}],
            "batch_id": 42
        });
        let doc: MetadataDocument = serde_json::from_value(input.clone()).unwrap();
        assert_eq!(doc.extra.get("batch_id"), Some(&json!(42)));
        assert_eq!(serde_json::to_value(&doc).unwrap(), input);
    }

    #[test]
    fn non_object_body_is_rejected() {
        let result: Result<MetadataDocument, _> = serde_json::from_value(json!(["not", "an", "object"]));
        assert!(result.is_err());
    }
}
