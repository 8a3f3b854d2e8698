//! Tests for error classification.

use shortfilm_error::{
    ConfigError, ErrorCategory, MediaToolError, MediaToolErrorKind, PipelineError,
    PipelineErrorKind, ProviderError, ProviderErrorKind, RetryableError, ShortFilmError,
    StorageError, StorageErrorKind,
};
use std::time::Duration;

#[test]
fn test_config_errors_are_configuration() {
    let err: ShortFilmError = ConfigError::new("Unknown provider 'runway'").into();
    assert_eq!(err.category(), ErrorCategory::Configuration);
    assert!(!err.is_retryable());
}

#[test]
fn test_missing_credential_is_configuration() {
    let err: ShortFilmError =
        ProviderError::new(ProviderErrorKind::MissingCredential("OPENAI_API_KEY".into())).into();
    assert_eq!(err.category(), ErrorCategory::Configuration);
}

#[test]
fn test_retryable_http_statuses() {
    for status in [408, 429, 500, 502, 503, 504] {
        let kind = ProviderErrorKind::Http {
            status_code: status,
            message: String::new(),
        };
        assert!(kind.is_retryable(), "status {} should be retryable", status);
    }
    for status in [400, 401, 403, 404, 422] {
        let kind = ProviderErrorKind::Http {
            status_code: status,
            message: String::new(),
        };
        assert!(!kind.is_retryable(), "status {} should be permanent", status);
    }
}

#[test]
fn test_transient_vs_clip_local() {
    let transient: ShortFilmError =
        ProviderError::new(ProviderErrorKind::Network("connection reset".into())).into();
    assert_eq!(transient.category(), ErrorCategory::Transient);
    assert!(transient.is_retryable());

    let permanent: ShortFilmError =
        ProviderError::new(ProviderErrorKind::GenerationFailed("content policy".into())).into();
    assert_eq!(permanent.category(), ErrorCategory::ClipLocal);
    assert!(!permanent.is_retryable());

    let frames: ShortFilmError =
        MediaToolError::new(MediaToolErrorKind::NoFrames("clip_0.mp4".into())).into();
    assert_eq!(frames.category(), ErrorCategory::ClipLocal);
}

#[test]
fn test_stage_fatal_errors() {
    let empty: ShortFilmError = PipelineError::new(PipelineErrorKind::NoCompletedClips(3)).into();
    assert_eq!(empty.category(), ErrorCategory::StageFatal);

    let corrupt: ShortFilmError =
        StorageError::new(StorageErrorKind::Corrupt("expected value".into())).into();
    assert_eq!(corrupt.category(), ErrorCategory::StageFatal);
}

#[test]
fn test_retry_after_hint() {
    let err: ShortFilmError = ProviderError::new(ProviderErrorKind::RateLimited {
        retry_after_secs: Some(7),
        message: "slow down".into(),
    })
    .into();
    assert_eq!(err.retry_after(), Some(Duration::from_secs(7)));
}

#[test]
fn test_location_is_captured() {
    let err = ConfigError::new("here");
    assert!(err.file.ends_with("error_category_test.rs"));
    assert!(err.line > 0);
}
