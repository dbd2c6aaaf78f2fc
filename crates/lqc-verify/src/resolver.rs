//! # Identifier Resolver
//!
//! Turns raw verification input into a [`ContentIdentifier`].
//!
//! ## Normalization
//!
//! Applied to the trimmed candidate, first match wins:
//!
//! 1. `ipfs://<rest>` → `<rest>` verbatim.
//! 2. `.../ipfs/<word chars>...` → the first path component after `/ipfs/`.
//! 3. anything else → the candidate unchanged (a bare identifier).
//!
//! Image input is handed to the [`DecodeService`]; decode failures are
//! reported as a [`StageError`] next to the outcome and never abort
//! resolution. The typed fallback is used whenever the primary input
//! yields no candidate.

use std::sync::OnceLock;

use lqc_client::DecodeService;
use lqc_core::{
    ContentIdentifier, ScanInput, Stage, StageError, StageErrorKind, CONTENT_SCHEME_PREFIX,
    GATEWAY_PATH_SEGMENT,
};
use regex::Regex;

/// Outcome of the resolve stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// `None` is a valid terminal state, mapped to `identifier_missing`.
    pub identifier: Option<ContentIdentifier>,
    /// Decode failure that was degraded to "no candidate".
    pub decode_error: Option<StageError>,
}

fn gateway_path_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(&format!(r"{}(\w+)", regex::escape(GATEWAY_PATH_SEGMENT))).ok())
        .as_ref()
}

/// Normalize one textual candidate. Performs no I/O.
pub fn normalize(candidate: &str) -> Option<ContentIdentifier> {
    let candidate = candidate.trim();
    if candidate.is_empty() {
        return None;
    }

    if let Some(rest) = candidate.strip_prefix(CONTENT_SCHEME_PREFIX) {
        return ContentIdentifier::new(rest).ok();
    }

    if let Some(caps) = gateway_path_pattern().and_then(|re| re.captures(candidate)) {
        if let Some(id) = caps.get(1) {
            return ContentIdentifier::new(id.as_str()).ok();
        }
    }

    ContentIdentifier::new(candidate).ok()
}

/// Resolve `input`, falling back to `typed_fallback` when it yields nothing.
pub async fn resolve<D: DecodeService>(
    decoder: &D,
    input: ScanInput,
    typed_fallback: &str,
) -> Resolution {
    let (primary, decode_error) = match input {
        ScanInput::Text(text) => (Some(text), None),
        ScanInput::Image(bytes) if bytes.is_empty() => (None, None),
        ScanInput::Image(bytes) => match decode_candidate(decoder, &bytes).await {
            Ok(Some(text)) => (Some(text), None),
            Ok(None) => {
                tracing::debug!("decode service found no text; using typed fallback");
                (None, Some(empty_decode()))
            }
            Err(err) => {
                tracing::warn!(kind = %err.kind, detail = %err.detail, "decode failed; using typed fallback");
                (None, Some(err))
            }
        },
    };

    let identifier = primary
        .as_deref()
        .and_then(normalize)
        .or_else(|| normalize(typed_fallback));

    match &identifier {
        Some(id) => tracing::debug!(identifier = %id, "resolved content identifier"),
        None => tracing::debug!("no content identifier in input or fallback"),
    }

    Resolution {
        identifier,
        decode_error,
    }
}

async fn decode_candidate<D: DecodeService>(
    decoder: &D,
    image: &[u8],
) -> Result<Option<String>, StageError> {
    decoder
        .decode(image)
        .await
        .map_err(|e| StageError::new(Stage::Resolve, e.kind(), e.to_string()))
        .map(|text| text.filter(|t| !t.trim().is_empty()))
}

fn empty_decode() -> StageError {
    StageError::new(Stage::Resolve, StageErrorKind::Empty, "decode service returned no text")
}
