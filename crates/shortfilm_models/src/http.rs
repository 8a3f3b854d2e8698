//! HTTP helpers shared by the provider clients.

use shortfilm_error::{ProviderError, ProviderErrorKind};
use shortfilm_rate_limit::{RetryPolicy, retry_transient};
use std::future::Future;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// An API key that never appears in `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The raw key, for request headers only.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

/// Map a non-success HTTP status to a provider error.
///
/// - 401/403 are authorization failures
/// - 404/501 mean the model or endpoint is not available
/// - 429 is rate limiting, honouring a `Retry-After` in seconds
/// - 408 and 5xx are retryable HTTP errors
/// - anything else is a permanent HTTP error
///
/// # Examples
///
/// ```
/// use shortfilm_models::classify_status;
/// use shortfilm_error::ProviderErrorKind;
///
/// let err = classify_status(503, "busy".into(), None);
/// assert!(err.kind.is_retryable());
///
/// let err = classify_status(401, "bad key".into(), None);
/// assert!(matches!(err.kind, ProviderErrorKind::Unauthorized(_)));
/// ```
#[track_caller]
pub fn classify_status(status: u16, body: String, retry_after_secs: Option<u64>) -> ProviderError {
    let kind = match status {
        401 | 403 => ProviderErrorKind::Unauthorized(body),
        404 | 501 => ProviderErrorKind::Unavailable(body),
        429 => ProviderErrorKind::RateLimited {
            retry_after_secs,
            message: body,
        },
        _ => ProviderErrorKind::Http {
            status_code: status,
            message: body,
        },
    };
    ProviderError::new(kind)
}

/// Pick the duration a backend can actually produce.
///
/// Returns the shortest supported duration that is at least `requested`, or
/// the longest supported one when every option is shorter.
///
/// # Examples
///
/// ```
/// use shortfilm_models::supported_duration;
///
/// assert_eq!(supported_duration(10.0, &[4, 8, 12]), 12);
/// assert_eq!(supported_duration(4.0, &[4, 8, 12]), 4);
/// assert_eq!(supported_duration(10.0, &[4, 6, 8]), 8);
/// ```
pub fn supported_duration(requested: f64, supported: &[u32]) -> u32 {
    supported
        .iter()
        .copied()
        .filter(|&seconds| f64::from(seconds) >= requested)
        .min()
        .or_else(|| supported.iter().copied().max())
        .unwrap_or(requested.ceil().max(1.0) as u32)
}

/// Convert a transport failure into a provider error.
#[track_caller]
pub(crate) fn transport_error(e: reqwest::Error) -> ProviderError {
    ProviderError::new(ProviderErrorKind::Network(e.to_string()))
}

/// Turn a non-success response into a classified error.
pub(crate) async fn error_for_response(response: reqwest::Response) -> ProviderError {
    let status = response.status().as_u16();
    let retry_after = response
        .headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse::<u64>().ok());
    let body = response.text().await.unwrap_or_default();
    classify_status(status, body, retry_after)
}

/// Decode a JSON body, classifying failures.
pub(crate) async fn json_body<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ProviderError> {
    if !response.status().is_success() {
        return Err(error_for_response(response).await);
    }
    response.json::<T>().await.map_err(|e| {
        ProviderError::new(ProviderErrorKind::InvalidResponse(format!(
            "Failed to parse response: {}",
            e
        )))
    })
}

/// Read a seed image from disk.
pub(crate) async fn read_image(path: &Path) -> Result<Vec<u8>, ProviderError> {
    tokio::fs::read(path).await.map_err(|e| {
        ProviderError::new(ProviderErrorKind::Io(format!(
            "read seed image {}: {}",
            path.display(),
            e
        )))
    })
}

/// MIME type of an image by extension.
pub(crate) fn image_mime(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .as_deref()
    {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        _ => "image/png",
    }
}

/// Write a generated artifact, creating parent directories.
pub(crate) async fn write_artifact(path: &Path, data: &[u8]) -> Result<PathBuf, ProviderError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await.map_err(|e| {
            ProviderError::new(ProviderErrorKind::Io(format!(
                "create {}: {}",
                parent.display(),
                e
            )))
        })?;
    }
    tokio::fs::write(path, data).await.map_err(|e| {
        ProviderError::new(ProviderErrorKind::Io(format!(
            "write {}: {}",
            path.display(),
            e
        )))
    })?;
    tracing::debug!(path = %path.display(), bytes = data.len(), "Wrote artifact");
    Ok(path.to_path_buf())
}

/// Poll a long-running job until `finished` holds for it.
///
/// Each poll is retried on its own under `policy`, so a transient failure
/// while waiting never resubmits the job. Running out of polls is a
/// permanent `GenerationFailed`.
pub(crate) async fn poll_job<J, F, Fut>(
    policy: &RetryPolicy,
    interval: Duration,
    max_polls: u32,
    label: &str,
    mut job: J,
    finished: impl Fn(&J) -> bool,
    mut poll: F,
) -> Result<J, ProviderError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<J, ProviderError>>,
{
    let mut polls = 0;
    while !finished(&job) {
        if polls >= max_polls {
            return Err(ProviderError::new(ProviderErrorKind::GenerationFailed(
                format!("{} did not finish after {} polls", label, polls),
            )));
        }
        tokio::time::sleep(interval).await;
        polls += 1;
        job = retry_transient(policy, label, &mut poll).await?;
        tracing::debug!(job = label, polls, "Polled job");
    }
    Ok(job)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_follows_extension() {
        assert_eq!(image_mime(Path::new("a/frame.JPG")), "image/jpeg");
        assert_eq!(image_mime(Path::new("a/frame.webp")), "image/webp");
        assert_eq!(image_mime(Path::new("a/frame.png")), "image/png");
        assert_eq!(image_mime(Path::new("a/frame")), "image/png");
    }

    #[test]
    fn test_api_key_is_redacted() {
        let key = ApiKey::new("sk-very-secret");
        assert!(!format!("{:?}", key).contains("sk-very-secret"));
        assert_eq!(key.expose(), "sk-very-secret");
    }

    #[tokio::test]
    async fn test_write_artifact_creates_parents() {
        let temp = tempfile::TempDir::new().unwrap();
        let target = temp.path().join("deep").join("clip_0.mp4");
        let written = write_artifact(&target, b"data").await.unwrap();
        assert_eq!(written, target);
        assert_eq!(std::fs::read(&target).unwrap(), b"data");
    }

    fn fast_policy() -> RetryPolicy {
        RetryPolicy {
            initial_backoff_ms: 2,
            max_attempts: 3,
            max_delay_secs: 1,
            jitter: false,
        }
    }

    async fn poll_scripted(
        max_polls: u32,
        script: Vec<Result<bool, ProviderErrorKind>>,
    ) -> (Result<bool, ProviderError>, usize) {
        let script = std::sync::Mutex::new(std::collections::VecDeque::from(script));
        let calls = std::sync::atomic::AtomicUsize::new(0);
        let result = poll_job(
            &fast_policy(),
            Duration::ZERO,
            max_polls,
            "video job test",
            false,
            |done| *done,
            || {
                calls.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
                let next = script.lock().unwrap().pop_front().unwrap_or(Ok(false));
                async move { next.map_err(ProviderError::new) }
            },
        )
        .await;
        (result, calls.into_inner())
    }

    #[tokio::test]
    async fn test_poll_survives_transient_failures() {
        let (result, calls) = poll_scripted(
            5,
            vec![
                Err(ProviderErrorKind::Http {
                    status_code: 503,
                    message: "unavailable".into(),
                }),
                Ok(false),
                Err(ProviderErrorKind::Network("reset".into())),
                Ok(true),
            ],
        )
        .await;

        assert!(result.unwrap());
        assert_eq!(calls, 4);
    }

    #[tokio::test]
    async fn test_poll_limit_is_generation_failure() {
        let (result, calls) = poll_scripted(2, vec![]).await;

        assert_eq!(calls, 2);
        assert!(matches!(
            result.unwrap_err().kind,
            ProviderErrorKind::GenerationFailed(message) if message.contains("after 2 polls")
        ));
    }

    #[tokio::test]
    async fn test_poll_stops_on_permanent_failure() {
        let (result, calls) =
            poll_scripted(5, vec![Err(ProviderErrorKind::Unavailable("gone".into()))]).await;

        assert_eq!(calls, 1);
        assert_eq!(
            result.unwrap_err().kind,
            ProviderErrorKind::Unavailable("gone".into())
        );
    }

    #[tokio::test]
    async fn test_finished_job_is_not_polled() {
        let calls = std::sync::atomic::AtomicUsize::new(0);
        let done = poll_job(
            &fast_policy(),
            Duration::ZERO,
            3,
            "video job test",
            true,
            |done| *done,
            || {
                calls.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
                async { Ok(true) }
            },
        )
        .await
        .unwrap();

        assert!(done);
        assert_eq!(calls.into_inner(), 0);
    }
}
