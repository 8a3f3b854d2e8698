//! Tests for provider selection and the rate-limited, retrying wrapper.

use async_trait::async_trait;
use shortfilm_core::{Credentials, ImageRequest, RunConfig, VideoProvider, VideoRequest};
use shortfilm_error::{
    ErrorCategory, ProviderError, ProviderErrorKind, ShortFilmErrorKind, ShortFilmResult,
};
use shortfilm_interface::MediaProvider;
use shortfilm_models::{RetryingProvider, build_provider};
use shortfilm_rate_limit::{RetryPolicy, ShortFilmConfig};
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

fn run_config(provider: VideoProvider, credentials: Credentials) -> RunConfig {
    RunConfig::builder()
        .premise("A snowman melts in spring")
        .provider(provider)
        .credentials(credentials)
        .build()
        .unwrap()
}

#[test]
fn test_missing_credential_is_configuration_error() {
    let settings = ShortFilmConfig::bundled().unwrap();
    let run = run_config(
        VideoProvider::Gemini,
        Credentials::default().with_openai("sk-openai"),
    );

    let err = match build_provider(&settings, &run) {
        Ok(_) => panic!("expected a configuration error"),
        Err(e) => e,
    };
    assert_eq!(err.category(), ErrorCategory::Configuration);
    assert!(format!("{}", err).contains("GEMINI_API_KEY"));
}

#[test]
fn test_selects_configured_backend() {
    let settings = ShortFilmConfig::bundled().unwrap();

    let openai = build_provider(
        &settings,
        &run_config(VideoProvider::OpenAi, Credentials::default().with_openai("sk")),
    )
    .unwrap();
    assert_eq!(openai.provider(), VideoProvider::OpenAi);
    assert_eq!(openai.video_model(), settings.providers.openai.video_model);

    let gemini = build_provider(
        &settings,
        &run_config(VideoProvider::Gemini, Credentials::default().with_gemini("g")),
    )
    .unwrap();
    assert_eq!(gemini.provider(), VideoProvider::Gemini);
    assert_eq!(gemini.video_model(), settings.providers.gemini.video_model);
}

/// Provider that replays scripted outcomes and counts calls.
struct ScriptedProvider {
    outcomes: Mutex<VecDeque<Result<(), ProviderErrorKind>>>,
    calls: Arc<Mutex<usize>>,
}

impl ScriptedProvider {
    fn new(outcomes: Vec<Result<(), ProviderErrorKind>>) -> (Self, Arc<Mutex<usize>>) {
        let calls = Arc::new(Mutex::new(0));
        let provider = Self {
            outcomes: Mutex::new(outcomes.into()),
            calls: calls.clone(),
        };
        (provider, calls)
    }

    fn next(&self, output: &std::path::Path) -> ShortFilmResult<PathBuf> {
        *self.calls.lock().unwrap() += 1;
        match self.outcomes.lock().unwrap().pop_front() {
            Some(Err(kind)) => Err(ProviderError::new(kind).into()),
            _ => Ok(output.to_path_buf()),
        }
    }
}

#[async_trait]
impl MediaProvider for ScriptedProvider {
    async fn generate_image(&self, request: &ImageRequest) -> ShortFilmResult<PathBuf> {
        self.next(request.output())
    }

    async fn generate_video(&self, request: &VideoRequest) -> ShortFilmResult<PathBuf> {
        self.next(request.output())
    }

    fn provider(&self) -> VideoProvider {
        VideoProvider::OpenAi
    }

    fn video_model(&self) -> &str {
        "scripted"
    }
}

fn fast_policy(max_attempts: usize) -> RetryPolicy {
    RetryPolicy {
        initial_backoff_ms: 2,
        max_attempts,
        max_delay_secs: 1,
        jitter: false,
    }
}

fn video_request() -> VideoRequest {
    VideoRequest::new("prompt", None, 10.0, "out/clip_0.mp4")
}

fn image_request() -> ImageRequest {
    ImageRequest::new("prompt", Default::default(), "out/starting_frame.png")
}

#[tokio::test]
async fn test_transient_image_failures_are_retried() {
    let (inner, calls) = ScriptedProvider::new(vec![
        Err(ProviderErrorKind::Network("reset".into())),
        Err(ProviderErrorKind::Http {
            status_code: 502,
            message: "bad gateway".into(),
        }),
        Ok(()),
    ]);
    let provider = RetryingProvider::new(inner, fast_policy(3));

    let path = provider.generate_image(&image_request()).await.unwrap();

    assert_eq!(path, PathBuf::from("out/starting_frame.png"));
    assert_eq!(*calls.lock().unwrap(), 3);
}

#[tokio::test]
async fn test_video_job_is_not_resubmitted() {
    let (inner, calls) = ScriptedProvider::new(vec![
        Err(ProviderErrorKind::Http {
            status_code: 503,
            message: "unavailable while polling".into(),
        }),
        Ok(()),
    ]);
    let provider = RetryingProvider::new(inner, fast_policy(3));

    let err = provider.generate_video(&video_request()).await.unwrap_err();

    assert_eq!(*calls.lock().unwrap(), 1);
    assert_eq!(err.category(), ErrorCategory::Transient);
}

#[tokio::test]
async fn test_retry_ceiling_surfaces_last_error() {
    let (inner, calls) = ScriptedProvider::new(vec![
        Err(ProviderErrorKind::Network("reset".into())),
        Err(ProviderErrorKind::Network("reset".into())),
        Err(ProviderErrorKind::Network("still down".into())),
        Ok(()),
    ]);
    let provider = RetryingProvider::new(inner, fast_policy(3));

    let err = provider.generate_image(&image_request()).await.unwrap_err();

    assert_eq!(*calls.lock().unwrap(), 3);
    match err.kind() {
        ShortFilmErrorKind::Provider(e) => {
            assert_eq!(e.kind, ProviderErrorKind::Network("still down".into()))
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[tokio::test]
async fn test_permanent_failures_are_not_retried() {
    let (inner, calls) = ScriptedProvider::new(vec![
        Err(ProviderErrorKind::Unavailable("model not found".into())),
        Ok(()),
    ]);
    let provider = RetryingProvider::new(inner, fast_policy(5));

    let err = provider.generate_image(&image_request()).await.unwrap_err();

    assert_eq!(*calls.lock().unwrap(), 1);
    assert_eq!(err.category(), ErrorCategory::ClipLocal);
}
