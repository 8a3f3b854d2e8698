//! Resumable short-film generation.
//!
//! [`FilmGenerator`] drives a run through its [`Stage`]s: a starting frame,
//! a chain of clips where each clip is seeded with the last frame of the one
//! before it, and a final stitch. Progress is checkpointed after every unit of
//! work, so an interrupted run picks up at the first incomplete stage.
//!
//! A failing clip is recorded and skipped rather than aborting the run; the
//! returned [`FilmReport`] lists which clips failed and why.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod generator;
mod options;
mod report;
mod stage;

pub use generator::FilmGenerator;
pub use options::{GenerationOptions, GenerationOptionsBuilder};
pub use report::FilmReport;
pub use stage::Stage;
