//! Rate-limited, retrying wrapper around any provider.

use async_trait::async_trait;
use shortfilm_core::{ImageRequest, VideoProvider, VideoRequest};
use shortfilm_error::ShortFilmResult;
use shortfilm_interface::MediaProvider;
use shortfilm_rate_limit::{RequestLimiter, RetryPolicy, retry_transient};
use std::path::PathBuf;
use tracing::instrument;

/// Wraps a provider so every call waits on the request limiter.
///
/// Image calls are single requests and are retried here with backoff on
/// transient failures. Video calls are passed through once: a video is a
/// submitted job, and the provider clients retry its create, poll and
/// download requests individually so that a failed poll never pays for a
/// second job.
///
/// Permanent failures, and transient ones that outlast the attempt ceiling,
/// are returned as-is; the caller treats them as final.
#[derive(Debug, Clone, derive_getters::Getters)]
pub struct RetryingProvider<P> {
    inner: P,
    policy: RetryPolicy,
    limiter: RequestLimiter,
}

impl<P: MediaProvider> RetryingProvider<P> {
    /// Wrap `inner` with a retry policy and no rate limit.
    pub fn new(inner: P, policy: RetryPolicy) -> Self {
        Self {
            inner,
            policy,
            limiter: RequestLimiter::unlimited(),
        }
    }

    /// Pace calls with `limiter`.
    pub fn with_limiter(mut self, limiter: RequestLimiter) -> Self {
        self.limiter = limiter;
        self
    }
}

#[async_trait]
impl<P: MediaProvider> MediaProvider for RetryingProvider<P> {
    #[instrument(skip(self, request), fields(provider = %self.inner.provider()))]
    async fn generate_image(&self, request: &ImageRequest) -> ShortFilmResult<PathBuf> {
        let (inner, limiter) = (&self.inner, &self.limiter);
        retry_transient(&self.policy, "generate_image", move || async move {
            limiter.acquire().await;
            inner.generate_image(request).await
        })
        .await
    }

    #[instrument(skip(self, request), fields(provider = %self.inner.provider()))]
    async fn generate_video(&self, request: &VideoRequest) -> ShortFilmResult<PathBuf> {
        self.limiter.acquire().await;
        self.inner.generate_video(request).await
    }

    fn provider(&self) -> VideoProvider {
        self.inner.provider()
    }

    fn video_model(&self) -> &str {
        self.inner.video_model()
    }
}
