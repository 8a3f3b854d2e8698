//! Per-invocation options that are not part of the run configuration.

use shortfilm_error::{BuilderError, BuilderErrorKind};
use std::path::PathBuf;

/// How a run is executed.
///
/// # Examples
///
/// ```
/// use shortfilm_pipeline::GenerationOptions;
///
/// let options = GenerationOptions::builder()
///     .output_root("output")
///     .build()
///     .unwrap();
///
/// assert!(*options.resume());
/// assert!(!*options.trim_to_target());
/// assert!(options.music_track().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, derive_builder::Builder, derive_getters::Getters)]
#[builder(setter(into), build_fn(private, name = "build_internal"))]
pub struct GenerationOptions {
    /// Directory for the checkpoint and all artifacts.
    output_root: PathBuf,

    /// Continue from an existing checkpoint.
    #[builder(default = "true")]
    resume: bool,

    /// Audio track mixed into the final film.
    #[builder(default, setter(into, strip_option))]
    music_track: Option<PathBuf>,

    /// Cut the stitched film down to the target duration.
    #[builder(default)]
    trim_to_target: bool,
}

impl GenerationOptions {
    /// Create a new builder.
    pub fn builder() -> GenerationOptionsBuilder {
        GenerationOptionsBuilder::default()
    }
}

impl GenerationOptionsBuilder {
    /// Build the options.
    ///
    /// # Errors
    ///
    /// Returns an error if `output_root` was not set.
    pub fn build(&self) -> Result<GenerationOptions, BuilderError> {
        self.build_internal()
            .map_err(|e| BuilderError::new(BuilderErrorKind::MissingField(e.to_string())))
    }
}
