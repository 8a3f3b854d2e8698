//! Command-line interface module.
//!
//! CLI structure and command handlers for the shortfilm binary.

mod commands;
mod generate;
mod listing;
mod status;

pub use commands::{Cli, Commands, GenerateArgs};
pub use generate::run_generate;
pub use listing::{list_styles, list_vibes};
pub use status::{clear_checkpoint, show_status};
