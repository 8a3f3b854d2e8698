//! Layered TOML configuration.
//!
//! Sources, later overriding earlier:
//! - Bundled defaults (include_str! from shortfilm.toml)
//! - `~/.config/shortfilm/shortfilm.toml`
//! - `./shortfilm.toml`

use crate::RetryPolicy;
use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};
use shortfilm_error::{ConfigError, ShortFilmResult};
use std::path::PathBuf;
use tracing::{debug, instrument};

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../../../shortfilm.toml");

/// Defaults applied when the command line leaves a value unset.
///
/// ```toml
/// [pipeline]
/// target_duration = 60.0
/// clip_duration = 10.0
/// output_dir = "output"
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PipelineDefaults {
    /// Total film length in seconds
    #[serde(default = "default_target_duration")]
    pub target_duration: f64,

    /// Length of each clip in seconds
    #[serde(default = "default_clip_duration")]
    pub clip_duration: f64,

    /// Where checkpoints and artifacts are written
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_target_duration() -> f64 {
    60.0
}

fn default_clip_duration() -> f64 {
    10.0
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("output")
}

impl Default for PipelineDefaults {
    fn default() -> Self {
        Self {
            target_duration: default_target_duration(),
            clip_duration: default_clip_duration(),
            output_dir: default_output_dir(),
        }
    }
}

/// Endpoint, model and pacing settings for one provider.
///
/// ```toml
/// [providers.gemini]
/// base_url = "https://generativelanguage.googleapis.com/v1beta"
/// image_model = "imagen-4.0-generate-001"
/// video_model = "veo-3.0-generate-001"
/// poll_interval_secs = 10
/// max_polls = 90
/// requests_per_minute = 10
///
/// [providers.gemini.retry]
/// initial_backoff_ms = 8000
/// max_attempts = 3
/// max_delay_secs = 60
/// jitter = true
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ProviderSettings {
    /// API root, without a trailing slash
    pub base_url: String,

    /// Model used for the starting frame
    pub image_model: String,

    /// Model used for clips
    pub video_model: String,

    /// Seconds between status polls of a video job
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,

    /// Polls before a video job is declared stuck
    #[serde(default = "default_max_polls")]
    pub max_polls: u32,

    /// Request pacing; unlimited when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requests_per_minute: Option<u32>,

    /// Retry policy for transient failures
    #[serde(default)]
    pub retry: RetryPolicy,
}

fn default_poll_interval_secs() -> u64 {
    10
}

fn default_max_polls() -> u32 {
    90
}

/// Settings for both providers.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ProvidersConfig {
    /// OpenAI images and Sora video
    pub openai: ProviderSettings,
    /// Google Imagen and Veo video
    pub gemini: ProviderSettings,
}

/// Top-level shortfilm configuration.
///
/// # Example
///
/// ```no_run
/// use shortfilm_rate_limit::ShortFilmConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ShortFilmConfig::load()?;
/// println!("Sora model: {}", config.providers.openai.video_model);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ShortFilmConfig {
    /// Pipeline defaults
    #[serde(default)]
    pub pipeline: PipelineDefaults,

    /// Per-provider settings
    pub providers: ProvidersConfig,
}

impl ShortFilmConfig {
    /// Load the bundled defaults only.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled file fails to parse.
    pub fn bundled() -> ShortFilmResult<Self> {
        Self::build(Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml)))
    }

    /// Load configuration from a specific file layered over the bundled defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> ShortFilmResult<Self> {
        debug!("Loading configuration from file");

        if !path.as_ref().exists() {
            return Err(ConfigError::new(format!(
                "Configuration file not found: {}",
                path.as_ref().display()
            ))
            .into());
        }

        Self::build(
            Config::builder()
                .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
                .add_source(File::from(path.as_ref())),
        )
    }

    /// Load configuration with precedence: current dir > home dir > bundled defaults.
    ///
    /// User config files are optional and silently skipped if not found.
    #[instrument]
    pub fn load() -> ShortFilmResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/shortfilm/shortfilm.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("shortfilm").required(false));

        Self::build(builder)
    }

    fn build(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> ShortFilmResult<Self> {
        let config = builder
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build configuration: {}", e)))?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)))?;
        Ok(config)
    }
}
