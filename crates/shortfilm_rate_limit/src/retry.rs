//! Retry of transient failures with exponential backoff.

use serde::{Deserialize, Serialize};
use shortfilm_error::RetryableError;
use std::future::Future;
use std::time::Duration;
use tokio_retry2::strategy::{ExponentialBackoff, jitter};
use tokio_retry2::{Retry, RetryError};
use tracing::warn;

/// Backoff schedule for transient provider failures.
///
/// The delay before retry `n` (1-based) is `initial_backoff_ms * 2^(n-1)`,
/// capped at `max_delay_secs`, optionally jittered. `max_attempts` counts the
/// first try, so `max_attempts = 3` means at most two retries.
///
/// # Examples
///
/// ```
/// use shortfilm_rate_limit::RetryPolicy;
/// use std::time::Duration;
///
/// let policy = RetryPolicy {
///     initial_backoff_ms: 1000,
///     max_attempts: 4,
///     max_delay_secs: 3,
///     jitter: false,
/// };
/// let delays: Vec<Duration> = policy.delays().collect();
/// assert_eq!(
///     delays,
///     vec![Duration::from_secs(1), Duration::from_secs(2), Duration::from_secs(3)]
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct RetryPolicy {
    /// Delay before the first retry, in milliseconds
    #[serde(default = "default_initial_backoff_ms")]
    pub initial_backoff_ms: u64,

    /// Total attempts including the first
    #[serde(default = "default_max_attempts")]
    pub max_attempts: usize,

    /// Upper bound on any single delay, in seconds
    #[serde(default = "default_max_delay_secs")]
    pub max_delay_secs: u64,

    /// Randomize delays
    #[serde(default = "default_jitter")]
    pub jitter: bool,
}

fn default_initial_backoff_ms() -> u64 {
    8000
}

fn default_max_attempts() -> usize {
    3
}

fn default_max_delay_secs() -> u64 {
    60
}

fn default_jitter() -> bool {
    true
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            initial_backoff_ms: default_initial_backoff_ms(),
            max_attempts: default_max_attempts(),
            max_delay_secs: default_max_delay_secs(),
            jitter: default_jitter(),
        }
    }
}

impl RetryPolicy {
    /// A policy that makes exactly one attempt.
    pub fn no_retry() -> Self {
        Self {
            max_attempts: 1,
            ..Self::default()
        }
    }

    /// Delays between attempts, one per retry.
    pub fn delays(&self) -> impl Iterator<Item = Duration> + use<> {
        // ExponentialBackoff yields base^n * factor, so base 2 doubles each step.
        let factor = (self.initial_backoff_ms / 2).max(1);
        let use_jitter = self.jitter;
        ExponentialBackoff::from_millis(2)
            .factor(factor)
            .max_delay(Duration::from_secs(self.max_delay_secs))
            .map(move |delay| if use_jitter { jitter(delay) } else { delay })
            .take(self.max_attempts.saturating_sub(1))
    }
}

/// Run `operation`, retrying transient errors per `policy`.
///
/// Permanent errors are returned after the first failure. A transient error
/// that carries a provider-requested delay waits for that delay instead of
/// the scheduled one. When the attempts run out the last error is returned.
pub async fn retry_transient<F, Fut, T, E>(
    policy: &RetryPolicy,
    label: &str,
    mut operation: F,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: RetryableError + std::fmt::Display,
{
    Retry::spawn(policy.delays(), || {
        let attempt = operation();
        async move {
            match attempt.await {
                Ok(value) => Ok(value),
                Err(e) if e.is_retryable() => {
                    warn!(operation = label, error = %e, "Transient error, will retry");
                    let retry_after = e.retry_after();
                    Err(RetryError::Transient {
                        err: e,
                        retry_after,
                    })
                }
                Err(e) => {
                    warn!(operation = label, error = %e, "Permanent error, failing immediately");
                    Err(RetryError::Permanent(e))
                }
            }
        }
    })
    .await
}
