//! Shortfilm - resumable short-film generation.
//!
//! Turns a text premise into a short film: a generated starting frame, a
//! chain of video clips where each clip continues from the last frame of the
//! one before it, and a final concatenated video. Progress is checkpointed to
//! `<output>/state.json` after every step, so an interrupted run resumes where
//! it stopped.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use shortfilm::{
//!     Credentials, FfmpegConcatenator, FfmpegFrameExtractor, FfmpegTool, FileCheckpointStore,
//!     FilmGenerator, GenerationOptions, RunConfig, ShortFilmConfig, build_provider,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let settings = ShortFilmConfig::load()?;
//!     let config = RunConfig::builder()
//!         .premise("A lighthouse keeper finds a message in a bottle")
//!         .credentials(Credentials::from_env())
//!         .build()?;
//!     let provider = build_provider(&settings, &config)?;
//!     let tool = FfmpegTool::locate()?;
//!
//!     let mut generator = FilmGenerator::new(
//!         config,
//!         GenerationOptions::builder().output_root("output").build()?,
//!         provider,
//!         Box::new(FfmpegFrameExtractor::new(tool.clone())),
//!         Box::new(FfmpegConcatenator::new(tool)),
//!         Box::new(FileCheckpointStore::new("output")),
//!     )?;
//!     println!("{}", generator.run().await?.summary());
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - `shortfilm_error` - Error types and the error taxonomy
//! - `shortfilm_core` - Run configuration, clips, run state, prompts
//! - `shortfilm_interface` - Provider, frame extractor and concatenator traits
//! - `shortfilm_rate_limit` - Layered configuration, retry and rate limiting
//! - `shortfilm_storage` - Checkpoint store and artifact layout
//! - `shortfilm_models` - OpenAI and Gemini provider adapters
//! - `shortfilm_media` - ffmpeg frame extraction and concatenation
//! - `shortfilm_pipeline` - The film generator
//!
//! This crate re-exports everything for convenience.

pub use shortfilm_core::*;
pub use shortfilm_error::*;
pub use shortfilm_interface::*;
pub use shortfilm_media::{FfmpegConcatenator, FfmpegFrameExtractor, FfmpegTool};
pub use shortfilm_models::{RetryingProvider, build_provider};
pub use shortfilm_pipeline::{FilmGenerator, FilmReport, GenerationOptions, Stage};
pub use shortfilm_rate_limit::{
    PipelineDefaults, ProviderSettings, ProvidersConfig, RequestLimiter, RetryPolicy,
    ShortFilmConfig,
};
pub use shortfilm_storage::{CheckpointStore, FileCheckpointStore, MediaLayout};
