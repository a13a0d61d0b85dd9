//! Opt-in retry with exponential backoff around each primitive call.

use std::time::Duration;

use reqwest::Method;

use coldstore_core::config::RetryConfig;

use crate::error::ClientError;

/// Statuses that usually clear up on their own.
const DEFAULT_RETRYABLE_STATUSES: [u16; 6] = [408, 429, 500, 502, 503, 504];

/// Exponential backoff retry policy.
///
/// The default makes exactly one attempt, so failures reach the caller
/// immediately.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    /// Total attempts including the first one. Zero is treated as one.
    pub max_attempts: u32,
    /// Delay before the first retry.
    pub initial_delay: Duration,
    /// Maximum delay between attempts.
    pub max_delay: Duration,
    /// Multiplier applied to delay after each failed attempt.
    pub multiplier: f64,
    /// Non-2xx statuses worth another attempt.
    pub retryable_statuses: Vec<u16>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 1,
            initial_delay: Duration::from_millis(500),
            max_delay: Duration::from_secs(10),
            multiplier: 2.0,
            retryable_statuses: DEFAULT_RETRYABLE_STATUSES.to_vec(),
        }
    }
}

impl From<&RetryConfig> for RetryPolicy {
    fn from(config: &RetryConfig) -> Self {
        Self {
            max_attempts: config.max_attempts,
            initial_delay: Duration::from_millis(config.initial_delay_ms),
            max_delay: Duration::from_millis(config.max_delay_ms),
            multiplier: config.multiplier,
            ..Self::default()
        }
    }
}

impl RetryPolicy {
    /// Calculate the delay for a given retry number (0-indexed).
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let base_ms = self.initial_delay.as_millis() as f64;
        let delay_ms = base_ms * self.multiplier.powi(attempt as i32);
        let capped_ms = delay_ms.min(self.max_delay.as_millis() as f64);
        Duration::from_millis(capped_ms as u64)
    }

    /// Whether another attempt is allowed after `attempts_made` attempts.
    pub fn should_retry(&self, attempts_made: u32) -> bool {
        attempts_made < self.max_attempts.max(1)
    }

    /// Transport errors and listed statuses are retryable, but only for
    /// idempotent methods: a POST that reached the server may have created
    /// the record already. Decode failures, envelope failures and
    /// client-side rejections never are.
    pub fn is_retryable(&self, method: &Method, err: &ClientError) -> bool {
        if !method.is_idempotent() {
            return false;
        }
        match err {
            ClientError::Http(e) => !e.is_decode() && !e.is_builder(),
            ClientError::Api { status, .. } => self.retryable_statuses.contains(status),
            _ => false,
        }
    }
}
