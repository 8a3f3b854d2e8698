//! Collaborator traits for the shortfilm generation pipeline.
//!
//! The orchestrator only talks to the outside world through these traits:
//! a [`MediaProvider`] produces images and clips, a [`FrameExtractor`] pulls
//! the last frame out of a clip, and a [`Concatenator`] assembles the film.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{Concatenator, FrameExtractor, MediaProvider};
