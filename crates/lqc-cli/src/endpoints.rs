//! Global collaborator overrides layered on top of `VerifierConfig::from_env()`.

use anyhow::{Context, Result};
use clap::Args;
use url::Url;

use lqc_client::VerifierConfig;

/// Flags that override the environment-derived collaborator configuration.
#[derive(Args, Debug, Default, Clone)]
pub struct EndpointArgs {
    /// Content gateway base; the identifier is appended verbatim.
    #[arg(long, global = true, value_name = "URL")]
    pub gateway: Option<String>,

    /// Ledger indexer GraphQL endpoint.
    #[arg(long, global = true, value_name = "URL")]
    pub indexer: Option<Url>,

    /// QR decode service endpoint.
    #[arg(long, global = true, value_name = "URL")]
    pub decode_url: Option<Url>,

    /// Collection whose activity counts as evidence.
    #[arg(long, global = true)]
    pub collection: Option<String>,

    /// Per-request timeout for every collaborator call.
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout_secs: Option<u64>,
}

impl EndpointArgs {
    /// Apply the overrides to `config` and validate the result.
    pub fn apply(&self, mut config: VerifierConfig) -> Result<VerifierConfig> {
        if let Some(gateway) = &self.gateway {
            config.gateway_base = gateway.clone();
        }
        if let Some(indexer) = &self.indexer {
            config.indexer_url = indexer.clone();
        }
        if let Some(decode_url) = &self.decode_url {
            config.decode_url = decode_url.clone();
        }
        if let Some(collection) = &self.collection {
            config.collection_name = collection.clone();
        }
        if let Some(timeout_secs) = self.timeout_secs {
            config.timeout_secs = timeout_secs;
        }
        config.validate().context("invalid collaborator configuration")?;
        Ok(config)
    }

    /// Load `VerifierConfig` from the environment, then apply the overrides.
    pub fn resolve_config(&self) -> Result<VerifierConfig> {
        let config = VerifierConfig::from_env()
            .context("failed to load configuration from LQC_* environment variables")?;
        self.apply(config)
    }
}
