//! Verification collaborator configuration.
//!
//! Configures the endpoints of the decode service, the content gateway and
//! the ledger indexer, plus the ledger collection the verdict is scoped to.
//! Defaults point to the public endpoints the product ships with. Override
//! via environment variables or explicit construction for staging/testing.

use url::Url;
use zeroize::Zeroizing;

/// Default public QR decode service.
pub const DEFAULT_DECODE_URL: &str = "https://api.qrserver.com/v1/read-qr-code/";
/// Default IPFS gateway. The identifier is appended verbatim.
pub const DEFAULT_GATEWAY_BASE: &str = "https://ipfs.io/ipfs/";
/// Default ledger indexer (Aptos testnet GraphQL).
pub const DEFAULT_INDEXER_URL: &str = "https://api.testnet.aptoslabs.com/v1/graphql";
/// Collection every LiquorChain batch and bottle token is minted into.
pub const DEFAULT_COLLECTION_NAME: &str = "LiquorChain Collection";
/// Per-request timeout applied to every collaborator call.
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Configuration for the verification pipeline's network collaborators.
///
/// Custom `Debug` implementation redacts the `indexer_api_key` field
/// to prevent credential leakage in log output.
#[derive(Clone)]
pub struct VerifierConfig {
    /// Multipart endpoint of the QR decode service.
    pub decode_url: Url,
    /// Gateway prefix; the retrieval location is `gateway_base + identifier`.
    pub gateway_base: String,
    /// GraphQL endpoint of the ledger indexer.
    pub indexer_url: Url,
    /// Collection name the ledger query is always filtered by.
    pub collection_name: String,
    /// Optional bearer token for the indexer.
    pub indexer_api_key: Option<Zeroizing<String>>,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl std::fmt::Debug for VerifierConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VerifierConfig")
            .field("decode_url", &self.decode_url)
            .field("gateway_base", &self.gateway_base)
            .field("indexer_url", &self.indexer_url)
            .field("collection_name", &self.collection_name)
            .field(
                "indexer_api_key",
                &self.indexer_api_key.as_ref().map(|_| "[REDACTED]"),
            )
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl VerifierConfig {
    /// Configuration pointing at the public default endpoints.
    pub fn with_defaults() -> Result<Self, ConfigError> {
        Ok(Self {
            decode_url: parse_url("decode_url", DEFAULT_DECODE_URL)?,
            gateway_base: DEFAULT_GATEWAY_BASE.to_string(),
            indexer_url: parse_url("indexer_url", DEFAULT_INDEXER_URL)?,
            collection_name: DEFAULT_COLLECTION_NAME.to_string(),
            indexer_api_key: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        })
    }

    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `LQC_DECODE_URL` (default: `https://api.qrserver.com/v1/read-qr-code/`)
    /// - `LQC_GATEWAY_BASE` (default: `https://ipfs.io/ipfs/`)
    /// - `LQC_INDEXER_URL` (default: `https://api.testnet.aptoslabs.com/v1/graphql`)
    /// - `LQC_COLLECTION_NAME` (default: `LiquorChain Collection`)
    /// - `LQC_INDEXER_API_KEY` (optional)
    /// - `LQC_TIMEOUT_SECS` (default: 15)
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self {
            decode_url: env_url("LQC_DECODE_URL", DEFAULT_DECODE_URL)?,
            gateway_base: std::env::var("LQC_GATEWAY_BASE")
                .unwrap_or_else(|_| DEFAULT_GATEWAY_BASE.to_string()),
            indexer_url: env_url("LQC_INDEXER_URL", DEFAULT_INDEXER_URL)?,
            collection_name: std::env::var("LQC_COLLECTION_NAME")
                .unwrap_or_else(|_| DEFAULT_COLLECTION_NAME.to_string()),
            indexer_api_key: std::env::var("LQC_INDEXER_API_KEY")
                .ok()
                .filter(|k| !k.is_empty())
                .map(Zeroizing::new),
            timeout_secs: std::env::var("LQC_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        };
        config.validate()?;
        Ok(config)
    }

    /// Point every collaborator at one local mock server (for testing).
    ///
    /// Paths: `/read-qr-code/` for decode, `/ipfs/` for the gateway,
    /// `/v1/graphql` for the indexer.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidUrl` if `base` is not a valid URL.
    pub fn local_mock(base: &str) -> Result<Self, ConfigError> {
        let base = base.trim_end_matches('/');
        let make_url = |path: &str| -> Result<Url, ConfigError> {
            Url::parse(&format!("{base}{path}"))
                .map_err(|e| ConfigError::InvalidUrl(base.to_string(), e.to_string()))
        };
        Ok(Self {
            decode_url: make_url("/read-qr-code/")?,
            gateway_base: format!("{base}/ipfs/"),
            indexer_url: make_url("/v1/graphql")?,
            collection_name: DEFAULT_COLLECTION_NAME.to_string(),
            indexer_api_key: None,
            timeout_secs: 5,
        })
    }

    /// Check the invariants that explicit construction cannot enforce.
    pub fn validate(&self) -> Result<(), ConfigError> {
        Url::parse(&self.gateway_base)
            .map_err(|e| ConfigError::InvalidUrl("gateway_base".to_string(), e.to_string()))?;
        if self.collection_name.trim().is_empty() {
            return Err(ConfigError::EmptyCollectionName);
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }
}

fn env_url(var: &str, default: &str) -> Result<Url, ConfigError> {
    let raw = std::env::var(var).unwrap_or_else(|_| default.to_string());
    parse_url(var, &raw)
}

fn parse_url(name: &str, raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw).map_err(|e| ConfigError::InvalidUrl(name.to_string(), e.to_string()))
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
    #[error("collection name must not be empty")]
    EmptyCollectionName,
    #[error("timeout must be at least one second")]
    ZeroTimeout,
    #[error("indexer API key contains characters not allowed in a header")]
    InvalidApiKey,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let cfg = VerifierConfig::with_defaults().unwrap();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.gateway_base, "https://ipfs.io/ipfs/");
        assert_eq!(cfg.collection_name, "LiquorChain Collection");
        assert_eq!(cfg.timeout_secs, 15);
    }

    #[test]
    fn local_mock_builds_valid_config() {
        let cfg = VerifierConfig::local_mock("http://127.0.0.1:9000/").unwrap();
        assert_eq!(cfg.decode_url.as_str(), "http://127.0.0.1:9000/read-qr-code/");
        assert_eq!(cfg.gateway_base, "http://127.0.0.1:9000/ipfs/");
        assert_eq!(cfg.indexer_url.as_str(), "http://127.0.0.1:9000/v1/graphql");
        assert_eq!(cfg.timeout_secs, 5);
    }

    #[test]
    fn env_url_uses_default_when_var_absent() {
        let url = env_url("NONEXISTENT_VAR_LQC_12345", "https://example.com").unwrap();
        assert_eq!(url.as_str(), "https://example.com/");
    }

    #[test]
    fn env_url_rejects_invalid_url() {
        std::env::set_var("TEST_BAD_URL_LQC", "not a url");
        let result = env_url("TEST_BAD_URL_LQC", "https://example.com");
        std::env::remove_var("TEST_BAD_URL_LQC");
        assert!(result.is_err());
    }

    #[test]
    fn validate_rejects_blank_collection() {
        let cfg = VerifierConfig {
            collection_name: "  ".into(),
            ..VerifierConfig::with_defaults().unwrap()
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::EmptyCollectionName)));
    }

    #[test]
    fn validate_rejects_relative_gateway() {
        let cfg = VerifierConfig {
            gateway_base: "ipfs/".into(),
            ..VerifierConfig::with_defaults().unwrap()
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::InvalidUrl(..))));
    }

    #[test]
    fn debug_redacts_api_key() {
        let cfg = VerifierConfig {
            indexer_api_key: Some(Zeroizing::new("secret-key".into())),
            ..VerifierConfig::with_defaults().unwrap()
        };
        let rendered = format!("{cfg:?}");
        assert!(rendered.contains("[REDACTED]"));
        assert!(!rendered.contains("secret-key"));
    }
}
