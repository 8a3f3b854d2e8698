//! Requests handed to media providers.

use crate::FilmStyle;
use std::path::PathBuf;

/// Request for the starting frame.
#[derive(Debug, Clone, PartialEq, derive_getters::Getters)]
pub struct ImageRequest {
    /// Full image prompt.
    prompt: String,
    /// Style the prompt was derived with.
    style: FilmStyle,
    /// Where the image must be written.
    output: PathBuf,
}

impl ImageRequest {
    /// Create an image request.
    pub fn new(prompt: impl Into<String>, style: FilmStyle, output: impl Into<PathBuf>) -> Self {
        Self {
            prompt: prompt.into(),
            style,
            output: output.into(),
        }
    }
}

/// Request for one clip.
///
/// # Examples
///
/// ```
/// use shortfilm_core::VideoRequest;
/// use std::path::PathBuf;
///
/// let request = VideoRequest::new("A storm rolls in", None, 10.0, "out/clip_1.mp4");
/// assert!(request.seed_image().is_none());
/// assert_eq!(request.output(), &PathBuf::from("out/clip_1.mp4"));
/// ```
#[derive(Debug, Clone, PartialEq, derive_getters::Getters)]
pub struct VideoRequest {
    /// Clip prompt.
    prompt: String,
    /// Image anchoring the first frame; text-to-video when absent.
    seed_image: Option<PathBuf>,
    /// Requested length in seconds.
    duration: f64,
    /// Where the video must be written.
    output: PathBuf,
}

impl VideoRequest {
    /// Create a video request.
    pub fn new(
        prompt: impl Into<String>,
        seed_image: Option<PathBuf>,
        duration: f64,
        output: impl Into<PathBuf>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            seed_image,
            duration,
            output: output.into(),
        }
    }
}
