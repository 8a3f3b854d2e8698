//! Deterministic artifact names inside an output root.

use std::path::PathBuf;

/// Names of every file a run writes.
///
/// ```text
/// output/
/// ├── state.json
/// ├── starting_frame.png
/// ├── clip_0.mp4
/// ├── clip_0_last_frame.png
/// ├── clip_1.mp4
/// ├── ...
/// └── final_film.mp4
/// ```
///
/// # Examples
///
/// ```
/// use shortfilm_storage::MediaLayout;
/// use std::path::PathBuf;
///
/// let layout = MediaLayout::new("output");
/// assert_eq!(layout.clip(2), PathBuf::from("output/clip_2.mp4"));
/// assert_eq!(layout.last_frame(2), PathBuf::from("output/clip_2_last_frame.png"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct MediaLayout {
    /// Directory holding everything.
    root: PathBuf,
}

impl MediaLayout {
    /// Checkpoint file name.
    pub const STATE_FILE: &'static str = "state.json";

    /// Create a layout rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Checkpoint document.
    pub fn state(&self) -> PathBuf {
        self.root.join(Self::STATE_FILE)
    }

    /// Image anchoring clip 0.
    pub fn starting_frame(&self) -> PathBuf {
        self.root.join("starting_frame.png")
    }

    /// Video for clip `index`.
    pub fn clip(&self, index: usize) -> PathBuf {
        self.root.join(format!("clip_{}.mp4", index))
    }

    /// Last frame extracted from clip `index`.
    pub fn last_frame(&self, index: usize) -> PathBuf {
        self.root.join(format!("clip_{}_last_frame.png", index))
    }

    /// Assembled film.
    pub fn final_film(&self) -> PathBuf {
        self.root.join("final_film.mp4")
    }

    /// Concatenated film before trimming to the target duration.
    pub fn untrimmed_film(&self) -> PathBuf {
        self.root.join("final_film_untrimmed.mp4")
    }
}
