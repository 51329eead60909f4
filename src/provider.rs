//! Generative Provider
//!
//! Transport layer for the hosted generative-language API. The trait seam
//! lets tests substitute a stub; the real client builds the grounded
//! generateContent payload and retries transport failures with backoff.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use tracing::{debug, warn};

use crate::config::CheckerConfig;
use crate::error::CheckError;
use crate::prompt::SYSTEM_PROMPT;
use crate::retry::{with_backoff, BackoffPolicy};
use crate::types::GenerateResponse;

/// Transport seam for the grounded generate call
#[async_trait]
pub trait GenerativeProvider: Send + Sync {
    /// Submit a claim with the fixed system instruction and search grounding
    /// enabled, returning the raw wire response.
    async fn generate(&self, claim: &str) -> Result<GenerateResponse, CheckError>;
}

/// Gemini generateContent client with search grounding enabled
pub struct GeminiProvider {
    client: Client,
    url: String,
    policy: BackoffPolicy,
}

impl GeminiProvider {
    pub fn new(config: &CheckerConfig) -> Self {
        Self {
            client: Client::builder()
                .timeout(config.request_timeout)
                .build()
                .unwrap_or_default(),
            url: format!(
                "{}/v1beta/models/{}:generateContent?key={}",
                config.base_url.trim_end_matches('/'),
                config.model,
                config.api_key
            ),
            policy: config.backoff.clone(),
        }
    }
}

#[async_trait]
impl GenerativeProvider for GeminiProvider {
    async fn generate(&self, claim: &str) -> Result<GenerateResponse, CheckError> {
        let payload = json!({
            "contents": [{ "parts": [{ "text": claim }] }],
            "tools": [{ "google_search": {} }],
            "systemInstruction": { "parts": [{ "text": SYSTEM_PROMPT }] },
        });

        debug!("submitting claim for grounded generation");

        // Only the transport call sits inside the retry loop; an error
        // response from the API itself is surfaced without retry.
        let response = with_backoff(&self.policy, || {
            self.client.post(self.url.as_str()).json(&payload).send()
        })
        .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body: GenerateResponse = response.json().await.unwrap_or_default();
            let message = body
                .error
                .and_then(|error| error.message)
                .unwrap_or_else(|| format!("API request failed with status: {}", status));
            warn!("API rejected the request: {}", message);
            return Err(CheckError::Api { message });
        }

        response
            .json()
            .await
            .map_err(|_| CheckError::MalformedResponse)
    }
}
