//! # Verification Service
//!
//! The single entry point shared by every call site (quick check and
//! detail view): resolve → fetch → cross-reference → assemble, strictly in
//! sequence. The service holds only its collaborators and no mutable state,
//! so concurrent requests on one `Verifier` cannot interfere.
//!
//! Every collaborator call inherits the HTTP client's per-request timeout.
//! [`Verifier::verify_cancellable`] additionally races each stage against a
//! [`CancellationToken`].

use std::convert::Infallible;
use std::future::Future;

use lqc_client::{
    ContentGateway, DecodeService, HttpContentGateway, HttpDecodeService, HttpLedgerIndexer,
    LedgerIndexer, ProvenanceClient, VerifierConfig,
};
use lqc_core::{RecordLimit, ScanInput, Stage, VerificationResult};
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::error::VerifyError;
use crate::{crossref, fetcher, resolver, verdict};

/// One verification attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyRequest {
    /// Scanned image or typed text.
    pub input: ScanInput,
    /// Used when `input` yields no identifier.
    pub typed_fallback: String,
    /// Ledger rows to fetch.
    pub limit: RecordLimit,
}

impl VerifyRequest {
    pub fn new(input: ScanInput) -> Self {
        Self {
            input,
            typed_fallback: String::new(),
            limit: RecordLimit::default(),
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::new(ScanInput::Text(text.into()))
    }

    pub fn image(bytes: Vec<u8>) -> Self {
        Self::new(ScanInput::Image(bytes))
    }

    pub fn with_fallback(mut self, typed: impl Into<String>) -> Self {
        self.typed_fallback = typed.into();
        self
    }

    pub fn with_limit(mut self, limit: RecordLimit) -> Self {
        self.limit = limit;
        self
    }
}

/// Authenticity verification service.
#[derive(Debug, Clone)]
pub struct Verifier<D = HttpDecodeService, G = HttpContentGateway, L = HttpLedgerIndexer> {
    decoder: D,
    gateway: G,
    indexer: L,
}

impl Verifier {
    /// Build a verifier talking to the configured HTTP collaborators.
    pub fn from_config(config: VerifierConfig) -> Result<Self, VerifyError> {
        let (decoder, gateway, indexer) = ProvenanceClient::new(config)?.into_parts();
        Ok(Self::new(decoder, gateway, indexer))
    }
}

impl<D, G, L> Verifier<D, G, L>
where
    D: DecodeService,
    G: ContentGateway,
    L: LedgerIndexer,
{
    pub fn new(decoder: D, gateway: G, indexer: L) -> Self {
        Self {
            decoder,
            gateway,
            indexer,
        }
    }

    /// Verify one input. Never fails; collaborator failures degrade into
    /// the verdict.
    pub async fn verify(&self, request: VerifyRequest) -> VerificationResult {
        match self.run(request, &Uncancellable).await {
            Ok(result) => result,
            Err(never) => match never {},
        }
    }

    /// Verify one input, abandoning the request as soon as `cancel` fires.
    ///
    /// No further collaborator call is issued after cancellation.
    pub async fn verify_cancellable(
        &self,
        request: VerifyRequest,
        cancel: &CancellationToken,
    ) -> Result<VerificationResult, VerifyError> {
        self.run(request, &Cancellable(cancel)).await
    }

    #[tracing::instrument(
        name = "verify",
        skip_all,
        fields(request_id = %Uuid::new_v4(), limit = request.limit.rows())
    )]
    async fn run<S: StageGuard>(
        &self,
        request: VerifyRequest,
        guard: &S,
    ) -> Result<VerificationResult, S::Error> {
        let VerifyRequest {
            input,
            typed_fallback,
            limit,
        } = request;
        let mut degraded = Vec::new();

        let resolution = guard
            .guard(Stage::Resolve, resolver::resolve(&self.decoder, input, &typed_fallback))
            .await?;
        degraded.extend(resolution.decode_error);

        let Some(identifier) = resolution.identifier else {
            return Ok(verdict::identifier_missing(degraded));
        };

        let (metadata, fetch_error) = guard
            .guard(Stage::Fetch, fetcher::fetch_or_fallback(&self.gateway, &identifier))
            .await?;
        degraded.extend(fetch_error);

        let (records, query_error) = guard
            .guard(
                Stage::CrossReference,
                crossref::cross_reference_or_empty(&self.indexer, &metadata, limit.rows()),
            )
            .await?;
        degraded.extend(query_error);

        Ok(verdict::assemble(identifier, metadata, records, degraded))
    }
}

/// Wraps each stage future with the request's cancellation policy.
trait StageGuard: Sync {
    type Error;

    fn guard<F>(&self, stage: Stage, fut: F) -> impl Future<Output = Result<F::Output, Self::Error>> + Send
    where
        F: Future + Send,
        F::Output: Send;
}

struct Uncancellable;

impl StageGuard for Uncancellable {
    type Error = Infallible;

    async fn guard<F>(&self, _stage: Stage, fut: F) -> Result<F::Output, Infallible>
    where
        F: Future + Send,
        F::Output: Send,
    {
        Ok(fut.await)
    }
}

struct Cancellable<'a>(&'a CancellationToken);

impl StageGuard for Cancellable<'_> {
    type Error = VerifyError;

    async fn guard<F>(&self, stage: Stage, fut: F) -> Result<F::Output, VerifyError>
    where
        F: Future + Send,
        F::Output: Send,
    {
        if self.0.is_cancelled() {
            tracing::info!(%stage, "verification cancelled");
            return Err(VerifyError::Cancelled { stage });
        }
        tokio::select! {
            biased;
            () = self.0.cancelled() => {
                tracing::info!(%stage, "verification cancelled");
                Err(VerifyError::Cancelled { stage })
            }
            out = fut => Ok(out),
        }
    }
}
