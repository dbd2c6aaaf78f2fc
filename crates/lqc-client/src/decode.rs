//! # QR Decode Service
//!
//! Image decoding is delegated to an external service; nothing in this
//! workspace parses image bytes.
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | POST   | `{decode_url}` (multipart, field `file`) | Decode a QR symbol |
//!
//! The service answers with one result per uploaded file:
//!
//! ```json
//! [{"type": "qrcode", "symbol": [{"seq": 0, "data": "ipfs://...", "error": null}]}]
//! ```
//!
//! `data` is `null` (with `error` set) when no symbol could be read.

use std::future::Future;

use serde::Deserialize;

use crate::error::ClientError;

/// Extracts the text encoded in a scanned symbol.
pub trait DecodeService: Send + Sync {
    /// Decode `image`. `Ok(None)` means the service answered but found no
    /// readable text.
    fn decode(&self, image: &[u8]) -> impl Future<Output = Result<Option<String>, ClientError>> + Send;
}

#[derive(Debug, Deserialize)]
struct DecodeResult {
    #[serde(default)]
    symbol: Vec<DecodedSymbol>,
}

#[derive(Debug, Deserialize)]
struct DecodedSymbol {
    #[serde(default)]
    data: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// HTTP client for the QR decode service.
#[derive(Debug, Clone)]
pub struct HttpDecodeService {
    http: reqwest::Client,
    decode_url: url::Url,
}

impl HttpDecodeService {
    pub(crate) fn new(http: reqwest::Client, decode_url: url::Url) -> Self {
        Self { http, decode_url }
    }

    fn endpoint(&self) -> String {
        format!("POST {}", self.decode_url.path())
    }
}

impl DecodeService for HttpDecodeService {
    async fn decode(&self, image: &[u8]) -> Result<Option<String>, ClientError> {
        let endpoint = self.endpoint();
        let part = reqwest::multipart::Part::bytes(image.to_vec()).file_name("scan.png");
        let form = reqwest::multipart::Form::new().part("file", part);

        let resp = self
            .http
            .post(self.decode_url.clone())
            .multipart(form)
            .send()
            .await
            .map_err(|e| ClientError::Http {
                endpoint: endpoint.clone(),
                source: e,
            })?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(ClientError::ApiError {
                endpoint,
                status,
                body,
            });
        }

        let results: Vec<DecodeResult> =
            resp.json().await.map_err(|e| ClientError::Deserialization {
                endpoint: endpoint.clone(),
                source: e,
            })?;

        let symbol = results
            .into_iter()
            .next()
            .and_then(|r| r.symbol.into_iter().next())
            .ok_or_else(|| ClientError::Shape {
                endpoint,
                detail: "response carries no symbol".into(),
            })?;

        if let Some(reason) = &symbol.error {
            tracing::debug!(%reason, "decode service could not read a symbol");
        }
        Ok(symbol.data.filter(|text| !text.is_empty()))
    }
}
