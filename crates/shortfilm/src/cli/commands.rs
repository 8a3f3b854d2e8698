//! CLI command definitions.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Shortfilm - generate a short film from a text premise
#[derive(Parser, Debug)]
#[command(name = "shortfilm")]
#[command(about = "Generate a short film from a text premise, one chained clip at a time", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate (or resume) a film
    Generate(GenerateArgs),

    /// List available visual styles
    Styles,

    /// List available music vibes
    Vibes,

    /// Show the checkpointed progress of a run
    Status {
        /// Output directory of the run (defaults to the configured one)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the raw checkpoint document
        #[arg(long)]
        json: bool,
    },

    /// Remove the checkpoint of a run so the next one starts fresh
    Clear {
        /// Output directory of the run (defaults to the configured one)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Arguments for `generate`
#[derive(Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    /// What the film is about (prompted for when omitted)
    #[arg(short, long)]
    pub premise: Option<String>,

    /// Visual style (see `shortfilm styles`)
    #[arg(short, long)]
    pub style: Option<String>,

    /// Music vibe (see `shortfilm vibes`)
    #[arg(short, long)]
    pub music_vibe: Option<String>,

    /// Generation backend: openai or gemini
    #[arg(long)]
    pub provider: Option<String>,

    /// Target film length in seconds
    #[arg(short, long)]
    pub duration: Option<f64>,

    /// Length of each clip in seconds
    #[arg(long)]
    pub clip_duration: Option<f64>,

    /// Directory for the checkpoint and artifacts
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Audio file mixed into the final film
    #[arg(long)]
    pub music: Option<PathBuf>,

    /// Cut the final film to the target duration
    #[arg(long)]
    pub trim: bool,

    /// Ignore any existing checkpoint
    #[arg(long)]
    pub no_resume: bool,

    /// Configuration file to use instead of the layered defaults
    #[arg(long)]
    pub config: Option<PathBuf>,
}
