//! Retry logic with exponential backoff

use std::time::Duration;
use anyhow::Result;
use tracing::warn;
use crate::errors::{DeployError, DeployResult};

#[derive(Debug, Clone)]
pub struct RetryConfig {
    pub max_attempts: u32,
    pub initial_delay_ms: u64,
    pub max_delay_ms: u64,
    pub exponential_base: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            initial_delay_ms: 250,
            max_delay_ms: 5000,
            exponential_base: 2.0,
        }
    }
}

impl RetryConfig {
    /// Delay before the attempt following `delay_ms`, without jitter.
    pub fn next_delay(&self, delay_ms: u64) -> u64 {
        ((delay_ms as f64 * self.exponential_base) as u64).min(self.max_delay_ms)
    }
}

/// Shifts `delay_ms` by up to ±5%. `unit` is a uniform sample from `[0, 1)`.
pub fn apply_jitter(delay_ms: u64, unit: f64) -> u64 {
    let offset = (delay_ms as f64 * 0.1 * (unit - 0.5)) as i64;
    delay_ms.saturating_add_signed(offset)
}

/// Runs `operation` until it succeeds or `max_attempts` is reached.
///
/// Only read-only calls go through here. Transactions are never retried
/// since a resend after a lost response could create a second contract.
pub async fn retry_with_backoff<F, Fut, T>(
    operation: F,
    config: &RetryConfig,
    context: &str,
) -> DeployResult<T>
where
    F: Fn() -> Fut,
    Fut: std::future::Future<Output = Result<T>>,
{
    let mut attempt = 0;
    let mut delay = config.initial_delay_ms;

    loop {
        attempt += 1;

        match operation().await {
            Ok(result) => return Ok(result),
            Err(e) if attempt >= config.max_attempts => {
                return Err(DeployError::Network {
                    message: format!("{} failed after {} attempts", context, attempt),
                    source: Some(e),
                    retry_count: attempt,
                });
            }
            Err(e) => {
                warn!(
                    "Attempt {}/{} failed for {}: {}. Retrying in {}ms...",
                    attempt, config.max_attempts, context, e, delay
                );

                tokio::time::sleep(Duration::from_millis(delay)).await;

                delay = apply_jitter(config.next_delay(delay), rand::random::<f64>());
            }
        }
    }
}
