use shortfilm_core::{Credentials, FilmStyle, MAX_CLIPS, RunConfig, VideoProvider};

fn config(target: f64, clip: f64) -> RunConfig {
    RunConfig::builder()
        .premise("A cat explores a haunted house")
        .target_duration(target)
        .clip_duration(clip)
        .build()
        .unwrap()
}

#[test]
fn test_clip_count_is_ceiling_of_ratio() {
    assert_eq!(config(30.0, 10.0).clip_count(), 3);
    assert_eq!(config(60.0, 10.0).clip_count(), 6);
    assert_eq!(config(25.0, 10.0).clip_count(), 3);
    assert_eq!(config(5.0, 10.0).clip_count(), 1);
    assert_eq!(config(8.0, 4.0).clip_count(), 2);
}

#[test]
fn test_builder_defaults() {
    let config = RunConfig::builder().premise("Anything").build().unwrap();
    assert_eq!(*config.target_duration(), 60.0);
    assert_eq!(*config.clip_duration(), 10.0);
    assert_eq!(*config.style(), FilmStyle::Cinematic);
    assert_eq!(*config.provider(), VideoProvider::OpenAi);
}

#[test]
fn test_builder_rejects_non_positive_durations() {
    assert!(
        RunConfig::builder()
            .premise("x")
            .target_duration(0.0)
            .build()
            .is_err()
    );
    assert!(
        RunConfig::builder()
            .premise("x")
            .clip_duration(-5.0)
            .build()
            .is_err()
    );
    assert!(
        RunConfig::builder()
            .premise("x")
            .clip_duration(f64::NAN)
            .build()
            .is_err()
    );
}

#[test]
fn test_builder_rejects_unbounded_clip_count() {
    assert!(
        RunConfig::builder()
            .premise("x")
            .target_duration(1e300)
            .clip_duration(1e-300)
            .build()
            .is_err()
    );
    assert!(
        RunConfig::builder()
            .premise("x")
            .target_duration(f64::MAX)
            .clip_duration(f64::MIN_POSITIVE)
            .build()
            .is_err()
    );
    assert!(
        RunConfig::builder()
            .premise("x")
            .target_duration((MAX_CLIPS + 1) as f64)
            .clip_duration(1.0)
            .build()
            .is_err()
    );
    assert_eq!(config(MAX_CLIPS as f64, 1.0).clip_count(), MAX_CLIPS);
}

#[test]
fn test_builder_requires_premise() {
    assert!(RunConfig::builder().build().is_err());
    assert!(RunConfig::builder().premise("   ").build().is_err());
}

#[test]
fn test_credential_for_selected_provider() {
    let config = RunConfig::builder()
        .premise("x")
        .provider(VideoProvider::Gemini)
        .credentials(Credentials::default().with_openai("sk-only-openai"))
        .build()
        .unwrap();
    let err = config.credential().unwrap_err();
    assert!(err.message.contains("GEMINI_API_KEY"));

    let config = config.with_credentials(Credentials::default().with_gemini("g-key"));
    assert_eq!(config.credential().unwrap(), "g-key");
}

#[test]
fn test_credentials_are_not_serialized() {
    let config = RunConfig::builder()
        .premise("x")
        .credentials(Credentials::default().with_openai("sk-secret"))
        .build()
        .unwrap();
    let json = serde_json::to_string(&config).unwrap();
    assert!(!json.contains("sk-secret"));
    assert!(!format!("{:?}", config).contains("sk-secret"));

    let restored: RunConfig = serde_json::from_str(&json).unwrap();
    assert!(restored.credential().is_err());
}
