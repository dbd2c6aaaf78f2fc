//! Raw verification input.

/// What the user handed to a verification attempt: a scanned image or
/// typed text. Consumed by exactly one attempt.
#[derive(Clone, PartialEq, Eq)]
pub enum ScanInput {
    /// Opaque image bytes (PNG/JPEG of a QR code). Never decoded locally.
    Image(Vec<u8>),
    /// Free-typed text or an already-decoded payload.
    Text(String),
}

impl ScanInput {
    /// Whether the input carries nothing at all.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Image(bytes) => bytes.is_empty(),
            Self::Text(text) => text.trim().is_empty(),
        }
    }
}

// Image payloads can be megabytes; log their size only.
impl std::fmt::Debug for ScanInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Image(bytes) => f.debug_tuple("Image").field(&format_args!("{} bytes", bytes.len())).finish(),
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
        }
    }
}

impl From<&str> for ScanInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for ScanInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}
