//! The film generation state machine.

use crate::{FilmReport, GenerationOptions, Stage};
use shortfilm_core::{ImageRequest, RunConfig, RunState, VideoRequest, clip_prompt, image_prompt};
use shortfilm_error::{
    ErrorCategory, PipelineError, PipelineErrorKind, ProviderError, ProviderErrorKind,
    ShortFilmError, ShortFilmResult,
};
use shortfilm_interface::{Concatenator, FrameExtractor, MediaProvider};
use shortfilm_storage::{CheckpointStore, MediaLayout};
use std::path::PathBuf;
use tracing::{debug, info, instrument, warn};

/// Orchestrates one film run.
///
/// Owns the [`RunState`] exclusively and writes it to the checkpoint store
/// after every unit of work. Stages run strictly in order and clips one at a
/// time, since each clip is seeded with its predecessor's last frame.
///
/// # Example
///
/// ```rust,ignore
/// use shortfilm_pipeline::{FilmGenerator, GenerationOptions};
/// use shortfilm_storage::FileCheckpointStore;
///
/// let options = GenerationOptions::builder().output_root("output").build()?;
/// let mut generator = FilmGenerator::new(
///     config,
///     options,
///     provider,
///     Box::new(extractor),
///     Box::new(concatenator),
///     Box::new(FileCheckpointStore::new("output")),
/// )?;
/// let report = generator.run().await?;
/// println!("{}", report.summary());
/// ```
pub struct FilmGenerator<P: MediaProvider> {
    provider: P,
    extractor: Box<dyn FrameExtractor>,
    concatenator: Box<dyn Concatenator>,
    store: Box<dyn CheckpointStore>,
    layout: MediaLayout,
    options: GenerationOptions,
    state: RunState,
    stage: Stage,
}

impl<P: MediaProvider> FilmGenerator<P> {
    /// Validate the configuration and build or resume the run state.
    ///
    /// The configuration and the selected provider's credential are checked
    /// before anything else is touched. With `resume` set, an existing
    /// checkpoint is loaded and its configuration replaced with `config`;
    /// clip count and clip history are kept as stored.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for an invalid config or missing
    /// credential, and a storage error if the checkpoint cannot be read.
    #[instrument(
        skip_all,
        fields(provider = %config.provider(), output_root = %options.output_root().display())
    )]
    pub fn new(
        config: RunConfig,
        options: GenerationOptions,
        provider: P,
        extractor: Box<dyn FrameExtractor>,
        concatenator: Box<dyn Concatenator>,
        store: Box<dyn CheckpointStore>,
    ) -> ShortFilmResult<Self> {
        config.validate()?;
        config.credential()?;

        let stored = if *options.resume() {
            store.load()?
        } else {
            None
        };
        let state = match stored {
            Some(mut state) => {
                state.replace_config(config);
                info!(
                    clips = state.clips().len(),
                    completed = state.completed_outputs().len(),
                    "Resuming from checkpoint"
                );
                state
            }
            None => {
                let state = RunState::new(config, options.output_root().clone());
                info!(clips = state.clips().len(), "Starting new run");
                state
            }
        };

        Ok(Self {
            provider,
            extractor,
            concatenator,
            store,
            layout: MediaLayout::new(options.output_root().clone()),
            options,
            state,
            stage: Stage::Init,
        })
    }

    /// Current run state.
    pub fn state(&self) -> &RunState {
        &self.state
    }

    /// Stage the generator is in.
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// The provider used for generation.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Run every remaining stage.
    ///
    /// A run whose final video already exists returns immediately. Clip
    /// failures are recorded and reported, not raised.
    ///
    /// # Errors
    ///
    /// Returns a stage-fatal error if the starting frame cannot be produced,
    /// no clip completed, stitching fails, or the checkpoint cannot be
    /// written. The checkpoint is saved before the error is returned.
    #[instrument(skip(self), fields(clips = self.state.clips().len(), model = self.provider.video_model()))]
    pub async fn run(&mut self) -> ShortFilmResult<FilmReport> {
        let resume_at = Stage::resume_point(&self.state);
        if resume_at == Stage::Complete {
            self.stage = Stage::Complete;
            info!("Film already complete, nothing to do");
            return Ok(FilmReport::from_state(&self.state));
        }
        debug!(stage = %resume_at, "First incomplete stage");

        let result = self.run_stages().await;
        if let Err(e) = &result {
            warn!(stage = %self.stage, error = %e, "Run failed");
            self.save_best_effort();
        }
        result
    }

    async fn run_stages(&mut self) -> ShortFilmResult<FilmReport> {
        self.stage = Stage::StartingFrame;
        self.ensure_starting_frame().await?;

        self.stage = Stage::ClipChain;
        self.generate_clips().await?;

        self.stage = Stage::Stitch;
        self.stitch().await?;

        self.stage = Stage::Complete;
        let report = FilmReport::from_state(&self.state);
        info!(
            completed = report.completed_count(),
            failed = report.failed().len(),
            "Film complete"
        );
        Ok(report)
    }

    #[instrument(skip(self))]
    async fn ensure_starting_frame(&mut self) -> ShortFilmResult<()> {
        if self.state.has_starting_frame() {
            debug!("Starting frame present, skipping");
            return Ok(());
        }

        let config = self.state.config();
        let request = ImageRequest::new(
            image_prompt(config.premise(), *config.style()),
            *config.style(),
            self.layout.starting_frame(),
        );
        let frame = self
            .provider
            .generate_image(&request)
            .await
            .map_err(|e| fatal(e, PipelineErrorKind::StartingFrame))?;

        info!(path = %frame.display(), "Generated starting frame");
        self.state.set_starting_frame(frame);
        self.checkpoint()
    }

    #[instrument(skip(self))]
    async fn generate_clips(&mut self) -> ShortFilmResult<()> {
        let total = self.state.clips().len();
        let premise = self.state.config().premise().clone();

        for index in 0..total {
            if self.state.clips()[index].is_reusable() {
                debug!(index, "Clip already generated, skipping");
                continue;
            }

            let seed = self.state.seed_for(index);
            let Some(clip) = self.state.clip_mut(index) else {
                continue;
            };
            clip.assign_prompt(|| clip_prompt(&premise, index, total));
            clip.begin(seed.clone());
            let request = VideoRequest::new(
                clip.prompt().clone(),
                seed,
                *clip.duration(),
                self.layout.clip(index),
            );
            self.checkpoint()?;

            info!(index, total, seeded = request.seed_image().is_some(), "Generating clip");
            let outcome = self.produce_clip(index, total, &request).await;

            if let Some(clip) = self.state.clip_mut(index) {
                match outcome {
                    Ok((output, last_frame)) => {
                        info!(index, path = %output.display(), "Clip completed");
                        clip.complete(output, last_frame);
                    }
                    Err(e) => {
                        warn!(index, error = %e, "Clip failed, continuing with the next one");
                        clip.fail(e.to_string());
                    }
                }
            }
            self.checkpoint()?;
        }

        let failed = self.state.failed_clips();
        if !failed.is_empty() {
            warn!(
                failed = failed.len(),
                indices = ?failed.iter().map(|(index, _)| *index).collect::<Vec<_>>(),
                "Clip chain finished with failures"
            );
        }
        Ok(())
    }

    /// Generate one clip and, unless it is the last, extract its final frame.
    async fn produce_clip(
        &self,
        index: usize,
        total: usize,
        request: &VideoRequest,
    ) -> ShortFilmResult<(PathBuf, Option<PathBuf>)> {
        let output = self.provider.generate_video(request).await?;
        if !output.exists() {
            return Err(ProviderError::new(ProviderErrorKind::InvalidResponse(format!(
                "provider reported {} but the file does not exist",
                output.display()
            )))
            .into());
        }

        let last_frame = if index + 1 < total {
            let frame = self
                .extractor
                .extract_last_frame(&output, &self.layout.last_frame(index))
                .await?;
            Some(frame)
        } else {
            None
        };
        Ok((output, last_frame))
    }

    #[instrument(skip(self))]
    async fn stitch(&mut self) -> ShortFilmResult<()> {
        let inputs = self.state.completed_outputs();
        if inputs.is_empty() {
            return Err(PipelineError::new(PipelineErrorKind::NoCompletedClips(
                self.state.clips().len(),
            ))
            .into());
        }

        let target = *self.state.config().target_duration();
        // Providers may deliver clips longer than requested, so a requested
        // trim always runs.
        let trim = *self.options.trim_to_target();

        let final_path = self.layout.final_film();
        let concat_path = if trim {
            self.layout.untrimmed_film()
        } else {
            final_path.clone()
        };

        info!(clips = inputs.len(), trim, "Stitching film");
        let mut film = self
            .concatenator
            .concatenate(&inputs, &concat_path, self.options.music_track().as_deref())
            .await
            .map_err(|e| fatal(e, PipelineErrorKind::Stitch))?;

        if trim {
            film = self
                .concatenator
                .trim(&film, &final_path, target)
                .await
                .map_err(|e| fatal(e, PipelineErrorKind::Stitch))?;
            if let Err(e) = std::fs::remove_file(&concat_path) {
                debug!(path = %concat_path.display(), error = %e, "Untrimmed film not removed");
            }
        }

        info!(path = %film.display(), "Final film written");
        self.state.finish(film);
        self.checkpoint()
    }

    fn checkpoint(&self) -> ShortFilmResult<()> {
        self.store.save(&self.state)
    }

    fn save_best_effort(&self) {
        if let Err(e) = self.checkpoint() {
            warn!(error = %e, "Failed to save checkpoint after error");
        }
    }
}

/// Wrap a collaborator failure as stage-fatal, leaving configuration errors as they are.
fn fatal(error: ShortFilmError, kind: fn(String) -> PipelineErrorKind) -> ShortFilmError {
    if error.category() == ErrorCategory::Configuration {
        error
    } else {
        PipelineError::new(kind(error.to_string())).into()
    }
}
