use shortfilm_core::{ClipStatus, RunConfig, RunState, clip_prompt, image_prompt, FilmStyle};
use std::path::PathBuf;

fn state(target: f64, clip: f64) -> RunState {
    let config = RunConfig::builder()
        .premise("A paper boat sails to the sea")
        .target_duration(target)
        .clip_duration(clip)
        .build()
        .unwrap();
    RunState::new(config, "out")
}

#[test]
fn test_clips_are_dense_and_pending() {
    let state = state(45.0, 10.0);
    assert_eq!(state.clips().len(), 5);
    for (position, clip) in state.clips().iter().enumerate() {
        assert_eq!(*clip.index(), position);
        assert_eq!(*clip.status(), ClipStatus::Pending);
        assert!(clip.prompt().is_empty());
        assert_eq!(*clip.duration(), 10.0);
    }
}

#[test]
fn test_seed_follows_chain() {
    let dir = tempfile::tempdir().unwrap();
    let last_frame = dir.path().join("clip_0_last_frame.png");
    std::fs::write(&last_frame, b"png").unwrap();

    let mut state = state(30.0, 10.0);
    state.set_starting_frame(PathBuf::from("out/starting_frame.png"));
    assert_eq!(state.seed_for(0), Some(PathBuf::from("out/starting_frame.png")));
    assert_eq!(state.seed_for(1), None);

    let clip = state.clip_mut(0).unwrap();
    clip.begin(Some(PathBuf::from("out/starting_frame.png")));
    clip.complete(dir.path().join("clip_0.mp4"), Some(last_frame.clone()));
    assert_eq!(state.seed_for(1), Some(last_frame));

    state.clip_mut(1).unwrap().fail("provider said no");
    assert_eq!(state.seed_for(2), None);
}

#[test]
fn test_missing_last_frame_is_not_a_seed() {
    let dir = tempfile::tempdir().unwrap();
    let last_frame = dir.path().join("clip_0_last_frame.png");
    std::fs::write(&last_frame, b"png").unwrap();

    let mut state = state(20.0, 10.0);
    state
        .clip_mut(0)
        .unwrap()
        .complete(dir.path().join("clip_0.mp4"), Some(last_frame.clone()));
    assert_eq!(state.seed_for(1), Some(last_frame.clone()));

    std::fs::remove_file(&last_frame).unwrap();
    assert_eq!(state.seed_for(1), None);
}

#[test]
fn test_completed_outputs_in_index_order_skip_failures() {
    let mut state = state(30.0, 10.0);
    state
        .clip_mut(2)
        .unwrap()
        .complete(PathBuf::from("out/clip_2.mp4"), None);
    state.clip_mut(1).unwrap().fail("boom");
    state
        .clip_mut(0)
        .unwrap()
        .complete(PathBuf::from("out/clip_0.mp4"), None);

    assert_eq!(
        state.completed_outputs(),
        vec![PathBuf::from("out/clip_0.mp4"), PathBuf::from("out/clip_2.mp4")]
    );
    assert_eq!(state.failed_clips(), vec![(1, "boom".to_string())]);
}

#[test]
fn test_prompt_is_assigned_once() {
    let mut state = state(20.0, 10.0);
    let clip = state.clip_mut(0).unwrap();
    assert!(clip.assign_prompt(|| "first".to_string()));
    assert!(!clip.assign_prompt(|| "second".to_string()));
    assert_eq!(clip.prompt(), "first");
}

#[test]
fn test_finish_sets_completion() {
    let mut state = state(10.0, 10.0);
    assert!(!state.completed());
    state.finish(PathBuf::from("out/final_film.mp4"));
    assert!(state.completed());
    assert_eq!(state.final_video(), &Some(PathBuf::from("out/final_film.mp4")));
    // The file does not exist, so the run cannot be skipped.
    assert!(!state.is_finished());
}

#[test]
fn test_prompt_markers() {
    let premise = "A lonely robot";
    assert!(clip_prompt(premise, 0, 3).contains("Opening"));
    assert!(clip_prompt(premise, 1, 3).contains("scene 2"));
    assert!(clip_prompt(premise, 2, 3).contains("Final"));
    assert!(clip_prompt(premise, 0, 1).contains("Opening"));
    assert_eq!(clip_prompt(premise, 1, 3), clip_prompt(premise, 1, 3));
}

#[test]
fn test_image_prompt_includes_style_keywords() {
    let prompt = image_prompt("A lonely robot", FilmStyle::Noir);
    assert!(prompt.starts_with("A lonely robot."));
    assert!(prompt.contains("film noir"));
}
