//! # lqc-client -- Typed Rust clients for verification collaborators
//!
//! Provides typed access to the three network services the authenticity
//! pipeline reads from:
//! - **Decode** via a QR decode service (multipart image upload)
//! - **Gateway** via an IPFS-style content gateway (`GET {base}{cid}`)
//! - **Indexer** via a GraphQL ledger indexer (`token_activities`)
//!
//! ## Architecture
//!
//! Each collaborator is a trait ([`DecodeService`], [`ContentGateway`],
//! [`LedgerIndexer`]) with one HTTP implementation. The pipeline in
//! `lqc-verify` is generic over the traits so tests can intercept calls
//! with in-memory fakes. Clients here only report failures; deciding what
//! a failure means for the verdict is the pipeline's job.
//!
//! All HTTP implementations share one `reqwest::Client` carrying the
//! configured per-request timeout. There are no retries.

pub mod config;
pub mod decode;
pub mod error;
pub mod gateway;
pub mod indexer;

pub use config::{ConfigError, VerifierConfig};
pub use decode::{DecodeService, HttpDecodeService};
pub use error::ClientError;
pub use gateway::{ContentGateway, HttpContentGateway};
pub use indexer::{HttpLedgerIndexer, LedgerIndexer, LedgerQuery};

use std::time::Duration;

/// Top-level collaborator client. Holds one HTTP client per service.
#[derive(Debug, Clone)]
pub struct ProvenanceClient {
    decoder: HttpDecodeService,
    gateway: HttpContentGateway,
    indexer: HttpLedgerIndexer,
}

impl ProvenanceClient {
    /// Create the collaborator clients from configuration.
    pub fn new(config: VerifierConfig) -> Result<Self, ClientError> {
        config.validate()?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("lqc/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ClientError::Http {
                endpoint: "client_init".into(),
                source: e,
            })?;

        let api_key = config.indexer_api_key.as_ref().map(|k| k.as_str());
        let indexer = HttpLedgerIndexer::new(
            http.clone(),
            config.indexer_url.clone(),
            config.collection_name.clone(),
            api_key,
        )?;

        Ok(Self {
            decoder: HttpDecodeService::new(http.clone(), config.decode_url),
            gateway: HttpContentGateway::new(http, config.gateway_base),
            indexer,
        })
    }

    /// Access the QR decode client.
    pub fn decoder(&self) -> &HttpDecodeService {
        &self.decoder
    }

    /// Access the content gateway client.
    pub fn gateway(&self) -> &HttpContentGateway {
        &self.gateway
    }

    /// Access the ledger indexer client.
    pub fn indexer(&self) -> &HttpLedgerIndexer {
        &self.indexer
    }

    /// Split into the individual collaborators.
    pub fn into_parts(self) -> (HttpDecodeService, HttpContentGateway, HttpLedgerIndexer) {
        (self.decoder, self.gateway, self.indexer)
    }
}
