//! Error Types
//!
//! The error taxonomy for the fact-checking pipeline. Transport-level
//! failures are consumed by the retry loop and only ever surface as
//! `ServiceUnreachable`; every other class is surfaced immediately.

use thiserror::Error;

/// Errors surfaced by the fact-checking pipeline
#[derive(Debug, Error)]
pub enum CheckError {
    /// Claim failed local validation; no network call was made
    #[error("Please enter a longer claim to fact-check (at least {min} characters).")]
    InvalidClaim { min: usize },

    /// Retry budget exhausted; the underlying transport cause is discarded
    #[error("Failed to connect to the AI service after multiple retries.")]
    ServiceUnreachable,

    /// Response arrived but carried no candidate text
    #[error("Received an empty or malformed response from the AI service.")]
    MalformedResponse,

    /// The API itself rejected the request; never retried
    #[error("{message}")]
    Api { message: String },
}
