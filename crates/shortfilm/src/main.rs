//! Shortfilm CLI binary.
//!
//! - Generate a film from a premise, resuming any earlier run
//! - List the available styles and music vibes
//! - Inspect or clear the checkpoint of a run

use clap::Parser;

mod cli;
mod logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, clear_checkpoint, list_styles, list_vibes, run_generate, show_status};

    // Credentials may live in a .env file next to the project
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    logging::init(cli.verbose, cli.json_logs)?;

    match cli.command {
        Commands::Generate(args) => {
            run_generate(args).await?;
        }
        Commands::Styles => list_styles(),
        Commands::Vibes => list_vibes(),
        Commands::Status { output, json } => {
            show_status(output.as_deref(), json)?;
        }
        Commands::Clear { output } => {
            clear_checkpoint(output.as_deref())?;
        }
    }

    Ok(())
}
