//! Verification service error types.

use lqc_core::Stage;

/// Errors surfaced by the verification service itself.
///
/// Collaborator failures during a request never appear here; they are
/// degraded inside the pipeline and reported as diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum VerifyError {
    /// The caller cancelled the request.
    #[error("verification cancelled during {stage} stage")]
    Cancelled { stage: Stage },
    /// The collaborator clients could not be constructed.
    #[error("client setup failed: {0}")]
    Client(#[from] lqc_client::ClientError),
}
