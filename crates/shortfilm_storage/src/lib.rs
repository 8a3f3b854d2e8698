//! Checkpoint persistence and artifact layout for shortfilm runs.
//!
//! A run keeps one JSON document, `state.json`, in its output root. Media
//! artifacts live next to it at deterministic names given by [`MediaLayout`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod checkpoint;
mod filesystem;
mod layout;

pub use checkpoint::CheckpointStore;
pub use filesystem::FileCheckpointStore;
pub use layout::MediaLayout;
