//! Per-run configuration.

use crate::{Credentials, FilmStyle, MusicVibe, VideoProvider};
use serde::{Deserialize, Serialize};
use shortfilm_error::ConfigError;

/// Upper bound on the number of clips a run may be split into.
pub const MAX_CLIPS: usize = 1000;

/// Everything a run is asked to produce.
///
/// Immutable for the duration of a run. A resumed run replaces the stored
/// configuration with the one it was started with; clip count and history are
/// not recomputed.
///
/// # Examples
///
/// ```
/// use shortfilm_core::{FilmStyle, RunConfig};
///
/// let config = RunConfig::builder()
///     .premise("A lighthouse keeper finds a message in a bottle")
///     .style(FilmStyle::Noir)
///     .target_duration(30.0)
///     .clip_duration(10.0)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.clip_count(), 3);
/// ```
#[derive(
    Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters, derive_builder::Builder,
)]
#[builder(setter(into), build_fn(private, name = "build_internal"))]
pub struct RunConfig {
    /// What the film is about.
    premise: String,

    /// Visual style.
    #[builder(default)]
    style: FilmStyle,

    /// Soundtrack mood.
    #[builder(default)]
    music_vibe: MusicVibe,

    /// Total length to aim for, in seconds.
    #[builder(default = "60.0")]
    target_duration: f64,

    /// Length of each generated clip, in seconds.
    #[builder(default = "10.0")]
    clip_duration: f64,

    /// Generation backend.
    #[builder(default)]
    provider: VideoProvider,

    /// API keys. Never serialized.
    #[serde(skip)]
    #[builder(default)]
    credentials: Credentials,
}

impl RunConfig {
    /// Create a new builder.
    pub fn builder() -> RunConfigBuilder {
        RunConfigBuilder::default()
    }

    /// Number of clips the run is split into: `ceil(target / clip)`.
    pub fn clip_count(&self) -> usize {
        (self.target_duration / self.clip_duration).ceil() as usize
    }

    /// Check durations and premise.
    ///
    /// # Errors
    ///
    /// Returns an error if the premise is blank, either duration is not a
    /// positive finite number, or the durations would split the film into
    /// more than [`MAX_CLIPS`] clips.
    #[track_caller]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.premise.trim().is_empty() {
            return Err(ConfigError::new("Premise must not be empty"));
        }
        if !(self.target_duration.is_finite() && self.target_duration > 0.0) {
            return Err(ConfigError::new(format!(
                "Target duration must be positive, got {}",
                self.target_duration
            )));
        }
        if !(self.clip_duration.is_finite() && self.clip_duration > 0.0) {
            return Err(ConfigError::new(format!(
                "Clip duration must be positive, got {}",
                self.clip_duration
            )));
        }
        let clips = (self.target_duration / self.clip_duration).ceil();
        if !clips.is_finite() || clips > MAX_CLIPS as f64 {
            return Err(ConfigError::new(format!(
                "Target duration {} with clip duration {} needs more than {} clips",
                self.target_duration, self.clip_duration, MAX_CLIPS
            )));
        }
        Ok(())
    }

    /// Credential for the selected provider.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the selected provider has no key.
    #[track_caller]
    pub fn credential(&self) -> Result<&str, ConfigError> {
        self.credentials.require(self.provider)
    }

    /// Attach credentials, typically after loading a checkpoint.
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = credentials;
        self
    }
}

impl RunConfigBuilder {
    /// Build and validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the premise is missing or a duration is invalid.
    pub fn build(&self) -> Result<RunConfig, ConfigError> {
        let config = self
            .build_internal()
            .map_err(|e| ConfigError::new(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}
