//! Checkpoint-resume behaviour of the film generator.

mod test_utils;

use shortfilm_core::ClipStatus;
use shortfilm_pipeline::{GenerationOptions, Stage};
use shortfilm_storage::{CheckpointStore, FileCheckpointStore, MediaLayout};
use tempfile::TempDir;
use test_utils::{
    MockConcatenator, MockExtractor, MockProvider, generator, test_config, test_options,
};

#[tokio::test]
async fn test_finished_run_makes_no_calls() {
    let dir = TempDir::new().unwrap();
    let config = test_config("A clock that runs backwards", 20.0, 10.0);
    generator(
        config.clone(),
        test_options(dir.path()),
        &MockProvider::new(),
        &MockExtractor::new(),
        &MockConcatenator::new(),
    )
    .run()
    .await
    .unwrap();

    let provider = MockProvider::new();
    let concatenator = MockConcatenator::new();
    let mut second = generator(
        config,
        test_options(dir.path()),
        &provider,
        &MockExtractor::new(),
        &concatenator,
    );
    let report = second.run().await.unwrap();

    assert_eq!(provider.total_calls(), 0);
    assert!(concatenator.concat_calls().is_empty());
    assert_eq!(*report.completed_count(), 2);
    assert_eq!(second.stage(), Stage::Complete);
}

#[tokio::test]
async fn test_resume_regenerates_only_missing_work() {
    let dir = TempDir::new().unwrap();
    let config = test_config("A garden grows overnight", 30.0, 10.0);
    generator(
        config.clone(),
        test_options(dir.path()),
        &MockProvider::new(),
        &MockExtractor::new(),
        &MockConcatenator::new(),
    )
    .run()
    .await
    .unwrap();

    // The checkpoint still claims completion, but the files are gone.
    let layout = MediaLayout::new(dir.path());
    std::fs::remove_file(layout.clip(1)).unwrap();
    std::fs::remove_file(layout.final_film()).unwrap();

    let provider = MockProvider::new();
    let concatenator = MockConcatenator::new();
    generator(
        config,
        test_options(dir.path()),
        &provider,
        &MockExtractor::new(),
        &concatenator,
    )
    .run()
    .await
    .unwrap();

    let log = provider.log();
    assert_eq!(log.image_calls, 0);
    assert_eq!(log.video_indices(), vec![1]);
    assert_eq!(log.video_calls[0].seed_image, Some(layout.last_frame(0)));
    assert_eq!(
        concatenator.concat_calls()[0].inputs,
        vec![layout.clip(0), layout.clip(1), layout.clip(2)]
    );
}

#[tokio::test]
async fn test_failed_clip_is_retried_with_frozen_prompt() {
    let dir = TempDir::new().unwrap();
    generator(
        test_config("A lighthouse in fog", 30.0, 10.0),
        test_options(dir.path()),
        &MockProvider::failing_clips([1]),
        &MockExtractor::new(),
        &MockConcatenator::new(),
    )
    .run()
    .await
    .unwrap();

    let layout = MediaLayout::new(dir.path());
    std::fs::remove_file(layout.final_film()).unwrap();

    // Premise changed between runs; clip 1 keeps its original prompt.
    let provider = MockProvider::new();
    let mut second = generator(
        test_config("A lighthouse in a snowstorm", 30.0, 10.0),
        test_options(dir.path()),
        &provider,
        &MockExtractor::new(),
        &MockConcatenator::new(),
    );
    let report = second.run().await.unwrap();

    let log = provider.log();
    assert_eq!(log.video_indices(), vec![1]);
    assert!(log.video_calls[0].prompt.starts_with("A lighthouse in fog"));
    assert!(log.video_calls[0].prompt.contains("scene 2"));
    assert!(!report.has_failures());
    assert_eq!(
        second.state().config().premise(),
        "A lighthouse in a snowstorm"
    );
}

#[tokio::test]
async fn test_clip_count_survives_changed_durations() {
    let dir = TempDir::new().unwrap();
    generator(
        test_config("A balloon over the city", 30.0, 10.0),
        test_options(dir.path()),
        &MockProvider::failing_clips([2]),
        &MockExtractor::new(),
        &MockConcatenator::new(),
    )
    .run()
    .await
    .unwrap();
    std::fs::remove_file(MediaLayout::new(dir.path()).final_film()).unwrap();

    let second = generator(
        test_config("A balloon over the city", 60.0, 10.0),
        test_options(dir.path()),
        &MockProvider::new(),
        &MockExtractor::new(),
        &MockConcatenator::new(),
    );

    assert_eq!(second.state().clips().len(), 3);
    assert_eq!(*second.state().config().target_duration(), 60.0);
}

#[tokio::test]
async fn test_resume_disabled_starts_fresh() {
    let dir = TempDir::new().unwrap();
    let config = test_config("A cat guards a bakery", 20.0, 10.0);
    generator(
        config.clone(),
        test_options(dir.path()),
        &MockProvider::new(),
        &MockExtractor::new(),
        &MockConcatenator::new(),
    )
    .run()
    .await
    .unwrap();

    let options = GenerationOptions::builder()
        .output_root(dir.path())
        .resume(false)
        .build()
        .unwrap();
    let provider = MockProvider::new();
    let mut fresh = generator(
        config,
        options,
        &provider,
        &MockExtractor::new(),
        &MockConcatenator::new(),
    );
    assert!(fresh.state().clips().iter().all(|c| *c.status() == ClipStatus::Pending));

    fresh.run().await.unwrap();

    // Existing artifacts on disk do not count without the checkpoint.
    assert_eq!(provider.log().image_calls, 1);
    assert_eq!(provider.log().video_indices(), vec![0, 1]);
}

#[tokio::test]
async fn test_interrupted_clip_is_attempted_again() {
    let dir = TempDir::new().unwrap();
    let config = test_config("A fox outruns the rain", 20.0, 10.0);
    let store = FileCheckpointStore::new(dir.path());

    // Simulate a crash after clip 0 was marked generating.
    let mut state = shortfilm_core::RunState::new(config.clone(), dir.path());
    let layout = MediaLayout::new(dir.path());
    std::fs::create_dir_all(dir.path()).unwrap();
    std::fs::write(layout.starting_frame(), b"png").unwrap();
    state.set_starting_frame(layout.starting_frame());
    state.clip_mut(0).unwrap().begin(Some(layout.starting_frame()));
    store.save(&state).unwrap();

    let provider = MockProvider::new();
    let mut generator = generator(
        config,
        test_options(dir.path()),
        &provider,
        &MockExtractor::new(),
        &MockConcatenator::new(),
    );
    assert_eq!(Stage::resume_point(generator.state()), Stage::ClipChain);
    generator.run().await.unwrap();

    assert_eq!(provider.log().image_calls, 0);
    assert_eq!(provider.log().video_indices(), vec![0, 1]);
}

#[tokio::test]
async fn test_deleted_last_frame_is_not_used_as_seed() {
    let dir = TempDir::new().unwrap();
    let config = test_config("A lighthouse keeper's last night", 30.0, 10.0);
    generator(
        config.clone(),
        test_options(dir.path()),
        &MockProvider::new(),
        &MockExtractor::new(),
        &MockConcatenator::new(),
    )
    .run()
    .await
    .unwrap();

    let layout = MediaLayout::new(dir.path());
    std::fs::remove_file(layout.last_frame(0)).unwrap();
    std::fs::remove_file(layout.clip(1)).unwrap();
    std::fs::remove_file(layout.final_film()).unwrap();

    let provider = MockProvider::new();
    let mut second = generator(
        config,
        test_options(dir.path()),
        &provider,
        &MockExtractor::new(),
        &MockConcatenator::new(),
    );
    let report = second.run().await.unwrap();

    let log = provider.log();
    assert_eq!(log.video_indices(), vec![1]);
    assert_eq!(log.video_calls[0].seed_image, None);
    assert_eq!(*report.completed_count(), 3);
}
