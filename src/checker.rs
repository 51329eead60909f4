//! Claim Checker
//!
//! Validates user claims and orchestrates the grounded check. The provider
//! is injected at construction; nothing here reads process-wide state.

use std::sync::Arc;

use tracing::info;

use crate::error::CheckError;
use crate::interpreter::interpret;
use crate::provider::GenerativeProvider;
use crate::types::Analysis;

/// Minimum claim length after trimming
pub const MIN_CLAIM_LEN: usize = 10;

/// One-shot fact-check pipeline over an injected provider
pub struct ClaimChecker {
    provider: Arc<dyn GenerativeProvider>,
}

impl ClaimChecker {
    pub fn new(provider: Arc<dyn GenerativeProvider>) -> Self {
        Self { provider }
    }

    /// Run one fact-check. The claim is trimmed and validated before any
    /// network activity; a response without candidate text is malformed.
    pub async fn check(&self, claim: &str) -> Result<Analysis, CheckError> {
        let claim = claim.trim();
        if claim.chars().count() < MIN_CLAIM_LEN {
            return Err(CheckError::InvalidClaim { min: MIN_CLAIM_LEN });
        }

        let response = self.provider.generate(claim).await?;

        let text = response.primary_text().ok_or(CheckError::MalformedResponse)?;
        let analysis = interpret(text, response.attributions());

        info!(
            verdict = %analysis.verdict,
            sources = analysis.sources.len(),
            "claim interpreted"
        );
        Ok(analysis)
    }
}
