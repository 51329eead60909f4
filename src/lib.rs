//! Grounded Fact Checker
//!
//! A client for real-time claim verification built on a hosted
//! generative-language API with:
//! - Search-grounded generateContent calls
//! - Bounded exponential-backoff retry with jitter
//! - Structured verdict / analysis / citation parsing

pub mod checker;
pub mod config;
pub mod error;
pub mod interpreter;
pub mod prompt;
pub mod provider;
pub mod retry;
pub mod types;

// Re-exports for convenience
pub use checker::ClaimChecker;
pub use config::CheckerConfig;
pub use error::CheckError;
pub use provider::{GeminiProvider, GenerativeProvider};
pub use retry::BackoffPolicy;
pub use types::{Analysis, Source, Verdict};
