//! Request pacing using governor.

use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter as GovernorRateLimiter};
use std::num::NonZeroU32;
use std::sync::Arc;

type DirectRateLimiter = GovernorRateLimiter<NotKeyed, InMemoryState, DefaultClock>;

/// Requests-per-minute limiter shared by every call a provider makes.
///
/// Cloning shares the underlying quota.
///
/// # Example
///
/// ```
/// use shortfilm_rate_limit::RequestLimiter;
///
/// let limiter = RequestLimiter::per_minute(Some(10));
/// assert!(limiter.is_limited());
/// assert!(limiter.try_acquire());
/// assert!(!RequestLimiter::per_minute(Some(0)).is_limited());
/// ```
#[derive(Clone, Default)]
pub struct RequestLimiter {
    rpm_limiter: Option<Arc<DirectRateLimiter>>,
}

impl std::fmt::Debug for RequestLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestLimiter")
            .field("limited", &self.is_limited())
            .finish()
    }
}

impl RequestLimiter {
    /// Limit to `rpm` requests per minute; `None` or zero means unlimited.
    pub fn per_minute(rpm: Option<u32>) -> Self {
        let rpm_limiter = rpm.and_then(NonZeroU32::new).map(|n| {
            let quota = Quota::per_minute(n);
            Arc::new(GovernorRateLimiter::direct(quota))
        });
        Self { rpm_limiter }
    }

    /// A limiter that never waits.
    pub fn unlimited() -> Self {
        Self { rpm_limiter: None }
    }

    /// Whether a quota is enforced.
    pub fn is_limited(&self) -> bool {
        self.rpm_limiter.is_some()
    }

    /// Wait until the quota allows another request.
    pub async fn acquire(&self) {
        if let Some(limiter) = &self.rpm_limiter {
            limiter.until_ready().await;
        }
    }

    /// Take a slot without waiting; false if the quota is exhausted.
    pub fn try_acquire(&self) -> bool {
        match &self.rpm_limiter {
            Some(limiter) => limiter.check().is_ok(),
            None => true,
        }
    }
}
