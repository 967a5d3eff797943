//! Error taxonomy for backend calls and archive ingestion

use thiserror::Error;

/// Errors raised by `BackendGateway` operations.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The request exceeded the 60 second budget.
    #[error("request timed out")]
    Timeout,

    /// Connection-level failure before any HTTP response arrived.
    #[error("backend unreachable: {0}")]
    Network(reqwest::Error),

    /// The backend answered with a non-2xx status.
    #[error("backend rejected the request ({status}): {detail}")]
    Rejected {
        status: reqwest::StatusCode,
        detail: String,
    },

    /// A 2xx response whose body did not match the expected shape.
    #[error("failed to decode backend response: {0}")]
    Decode(reqwest::Error),
}

impl GatewayError {
    /// Backend-supplied detail string, when one exists.
    pub fn detail(&self) -> Option<&str> {
        match self {
            GatewayError::Rejected { detail, .. } => Some(detail),
            _ => None,
        }
    }

    /// Message for the status banner: backend detail verbatim when present,
    /// otherwise the caller's generic fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        match self.detail() {
            Some(detail) => detail.to_string(),
            None => fallback.to_string(),
        }
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            GatewayError::Timeout
        } else if err.is_decode() {
            GatewayError::Decode(err)
        } else {
            GatewayError::Network(err)
        }
    }
}

/// Errors raised by the archive ingest workflow.
///
/// Per-entry ingest failures are not errors at this level; they are collected
/// into the run's report. Only a malformed archive or a run where every
/// eligible entry failed aborts the workflow.
#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("failed to read zip archive: {0}")]
    Decode(#[from] zip::result::ZipError),

    #[error("Failed to process zip: {details}")]
    AllEntriesFailed { details: String },
}
