//! In-memory collaborators that record every call.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use lqc_client::{ClientError, ContentGateway, DecodeService, LedgerIndexer, LedgerQuery};
use lqc_core::{ContentIdentifier, LedgerRecord, MetadataDocument};

pub const TEST_GATEWAY: &str = "https://gw.example/ipfs/";
pub const TEST_COLLECTION: &str = "LiquorChain Collection";

fn unavailable(endpoint: &str) -> ClientError {
    ClientError::ApiError {
        endpoint: endpoint.to_string(),
        status: 502,
        body: "bad gateway".into(),
    }
}

pub fn record(name: &str, version: u64) -> LedgerRecord {
    LedgerRecord {
        event_type: "0x3::token::MintTokenEvent".into(),
        token_name: name.into(),
        collection_name: TEST_COLLECTION.into(),
        transaction_version: version,
    }
}

pub struct FakeDecoder {
    reply: Option<Option<String>>,
    calls: AtomicUsize,
}

impl FakeDecoder {
    pub fn text(text: &str) -> Self {
        Self {
            reply: Some(Some(text.to_string())),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn nothing() -> Self {
        Self {
            reply: Some(None),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl DecodeService for FakeDecoder {
    async fn decode(&self, _image: &[u8]) -> Result<Option<String>, ClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply.clone().ok_or_else(|| unavailable("POST /read-qr-code/"))
    }
}

pub struct FakeGateway {
    reply: Option<MetadataDocument>,
    delay: Option<Duration>,
    calls: AtomicUsize,
}

impl FakeGateway {
    pub fn named(name: &str) -> Self {
        let mut doc = MetadataDocument::fallback("ipfs://image");
        doc.name = name.to_string();
        Self::document(doc)
    }

    pub fn document(doc: MetadataDocument) -> Self {
        Self {
            reply: Some(doc),
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: None,
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ContentGateway for FakeGateway {
    fn location(&self, identifier: &ContentIdentifier) -> String {
        format!("{TEST_GATEWAY}{identifier}")
    }

    async fn fetch_document(
        &self,
        identifier: &ContentIdentifier,
    ) -> Result<MetadataDocument, ClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.reply
            .clone()
            .ok_or_else(|| unavailable(&format!("GET {}", self.location(identifier))))
    }
}

pub struct FakeIndexer {
    reply: Option<Vec<LedgerRecord>>,
    queries: Mutex<Vec<LedgerQuery>>,
}

impl FakeIndexer {
    pub fn records(records: Vec<LedgerRecord>) -> Self {
        Self {
            reply: Some(records),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: None,
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn queries(&self) -> Vec<LedgerQuery> {
        self.queries.lock().map(|q| q.clone()).unwrap_or_default()
    }
}

impl LedgerIndexer for FakeIndexer {
    fn collection_name(&self) -> &str {
        TEST_COLLECTION
    }

    async fn query(&self, query: &LedgerQuery) -> Result<Vec<LedgerRecord>, ClientError> {
        if let Ok(mut seen) = self.queries.lock() {
            seen.push(query.clone());
        }
        let mut records = self.reply.clone().ok_or_else(|| unavailable("POST /v1/graphql"))?;
        records.truncate(query.limit() as usize);
        Ok(records)
    }
}
