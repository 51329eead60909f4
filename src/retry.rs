//! Retry Executor
//!
//! Bounded exponential backoff with jitter around a fallible async
//! operation. Every retry re-executes the full operation, so wrapped calls
//! must be safe to repeat.

use std::future::Future;
use std::time::Duration;

use rand::Rng;
use tracing::{debug, warn};

use crate::error::CheckError;

/// Retry budget and delay shape for [`with_backoff`]
#[derive(Debug, Clone)]
pub struct BackoffPolicy {
    /// Retries allowed after the initial attempt
    pub max_retries: u32,
    /// Base delay; the wait after attempt i is 2^i * base plus jitter
    pub base_delay: Duration,
    /// Exclusive upper bound on the uniform jitter added to each wait
    pub max_jitter: Duration,
}

impl Default for BackoffPolicy {
    fn default() -> Self {
        Self {
            max_retries: 5,
            base_delay: Duration::from_millis(1000),
            max_jitter: Duration::from_millis(1000),
        }
    }
}

impl BackoffPolicy {
    /// Wait before the retry that follows failed attempt `attempt` (0-indexed)
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let exponential = self.base_delay.saturating_mul(2u32.saturating_pow(attempt));
        let jitter_ms = self.max_jitter.as_millis() as u64;
        if jitter_ms == 0 {
            return exponential;
        }
        exponential + Duration::from_millis(rand::thread_rng().gen_range(0..jitter_ms))
    }
}

/// Run `op`, retrying any failure until the budget is exhausted.
///
/// The first success is returned immediately. Once the budget runs out the
/// underlying cause is discarded and the terminal [`CheckError::ServiceUnreachable`]
/// is returned; with the default policy that is 6 invocations in total.
pub async fn with_backoff<T, E, F, Fut>(policy: &BackoffPolicy, mut op: F) -> Result<T, CheckError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let mut attempt: u32 = 0;
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                if attempt >= policy.max_retries {
                    warn!("giving up after {} attempts: {}", attempt + 1, err);
                    return Err(CheckError::ServiceUnreachable);
                }
                let delay = policy.delay_for_attempt(attempt);
                debug!(
                    "attempt {} failed: {}; retrying in {:?}",
                    attempt + 1,
                    err,
                    delay
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
        }
    }
}
