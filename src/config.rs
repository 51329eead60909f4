//! Configuration
//!
//! Endpoint, model, and credential settings, pulled from the environment
//! with hosted defaults.

use std::time::Duration;

use anyhow::{Context, Result};

use crate::retry::BackoffPolicy;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-preview-05-20";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Settings for the fact-checking client
#[derive(Debug, Clone)]
pub struct CheckerConfig {
    /// API key appended to the endpoint query string
    pub api_key: String,
    /// Model id in the generateContent path
    pub model: String,
    /// Scheme and host of the generative-language service
    pub base_url: String,
    /// Deadline for a single request attempt
    pub request_timeout: Duration,
    /// Retry budget and delay shape for transport failures
    pub backoff: BackoffPolicy,
}

impl CheckerConfig {
    /// Config with an explicit key and the hosted defaults
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(30),
            backoff: BackoffPolicy::default(),
        }
    }

    /// Build a config from the environment. `GEMINI_API_KEY` is required;
    /// `GEMINI_MODEL` and `GEMINI_BASE_URL` override the hosted defaults.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::new(
            std::env::var("GEMINI_API_KEY").context("GEMINI_API_KEY is not set")?,
        );
        if let Ok(model) = std::env::var("GEMINI_MODEL") {
            config.model = model;
        }
        if let Ok(base_url) = std::env::var("GEMINI_BASE_URL") {
            config.base_url = base_url;
        }
        Ok(config)
    }
}
