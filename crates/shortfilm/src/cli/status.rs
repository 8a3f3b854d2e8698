//! Checkpoint inspection.

use shortfilm::{
    CheckpointStore, FileCheckpointStore, JsonError, ShortFilmConfig, ShortFilmResult, Stage,
};
use std::path::{Path, PathBuf};

fn resolve_output(output: Option<&Path>) -> ShortFilmResult<PathBuf> {
    match output {
        Some(path) => Ok(path.to_path_buf()),
        None => Ok(ShortFilmConfig::load()?.pipeline.output_dir),
    }
}

/// Print the progress recorded in a run's checkpoint.
pub fn show_status(output: Option<&Path>, json: bool) -> ShortFilmResult<()> {
    let root = resolve_output(output)?;
    let store = FileCheckpointStore::new(&root);

    let Some(state) = store.load()? else {
        println!("No checkpoint in {}", root.display());
        return Ok(());
    };

    if json {
        let document = serde_json::to_string_pretty(&state)
            .map_err(|e| JsonError::new(format!("Failed to render checkpoint: {}", e)))?;
        println!("{}", document);
        return Ok(());
    }

    let config = state.config();
    println!("Premise:  {}", config.premise());
    println!(
        "Style:    {} / {} ({})",
        config.style(),
        config.music_vibe(),
        config.provider()
    );
    println!("Next:     {}", Stage::resume_point(&state));
    match state.starting_frame() {
        Some(frame) => println!("Starting frame: {}", frame.display()),
        None => println!("Starting frame: -"),
    }
    for clip in state.clips() {
        let detail = match (clip.output(), clip.error()) {
            (Some(output), _) => output.display().to_string(),
            (None, Some(error)) => error.clone(),
            (None, None) => String::new(),
        };
        println!("  clip {:>2}  {:<10} {}", clip.index(), clip.status(), detail);
    }
    if let Some(video) = state.final_video() {
        println!("Final film: {}", video.display());
    }
    Ok(())
}

/// Delete a run's checkpoint. Generated media is left in place.
pub fn clear_checkpoint(output: Option<&Path>) -> ShortFilmResult<()> {
    let root = resolve_output(output)?;
    let store = FileCheckpointStore::new(&root);
    store.clear()?;
    println!("Cleared checkpoint at {}", store.location().display());
    Ok(())
}
