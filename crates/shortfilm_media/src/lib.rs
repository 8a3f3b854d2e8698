//! ffmpeg-backed frame extraction and concatenation.
//!
//! [`FfmpegFrameExtractor`] implements
//! [`FrameExtractor`](shortfilm_interface::FrameExtractor) and
//! [`FfmpegConcatenator`] implements
//! [`Concatenator`](shortfilm_interface::Concatenator). Both shell out to an
//! `ffmpeg` binary located through [`FfmpegTool`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod concat;
mod extract;
mod tool;

pub use concat::{FfmpegConcatenator, concat_args, render_concat_list, trim_args};
pub use extract::{FfmpegFrameExtractor, last_frame_args};
pub use tool::FfmpegTool;
