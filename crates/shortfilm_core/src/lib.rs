//! Core data types for the shortfilm generation pipeline.
//!
//! This crate holds the run model shared by every other crate: the closed
//! option sets a run is configured with, the per-run configuration, the clip
//! lifecycle, the resumable run state and the deterministic prompt rules.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod clip;
mod credentials;
mod options;
mod prompts;
mod request;
mod run_config;
mod state;

pub use clip::{Clip, ClipStatus};
pub use credentials::Credentials;
pub use options::{FilmStyle, MusicVibe, VideoProvider};
pub use prompts::{clip_prompt, image_prompt};
pub use request::{ImageRequest, VideoRequest};
pub use run_config::{MAX_CLIPS, RunConfig, RunConfigBuilder};
pub use state::RunState;
