//! Film generation command handler.

use super::GenerateArgs;
use shortfilm::{
    ConfigError, Credentials, FfmpegConcatenator, FfmpegFrameExtractor, FfmpegTool,
    FileCheckpointStore, FilmGenerator, FilmStyle, GenerationOptions, MusicVibe, RunConfig,
    ShortFilmConfig, ShortFilmResult, VideoProvider, build_provider,
};
use std::fmt::Display;
use std::io::{BufRead, IsTerminal, Write};
use std::str::FromStr;
use strum::IntoEnumIterator;
use tracing::{info, warn};

/// Generate a film, resuming an earlier run in the same output directory.
pub async fn run_generate(args: GenerateArgs) -> ShortFilmResult<()> {
    let settings = match &args.config {
        Some(path) => ShortFilmConfig::from_file(path)?,
        None => ShortFilmConfig::load()?,
    };

    let config = match args.premise.clone() {
        Some(premise) => build_run_config(&args, &settings, premise, Credentials::from_env())?,
        None => match prompt_run_config(&args, &settings)? {
            Some(config) => config,
            None => {
                println!("Cancelled");
                return Ok(());
            }
        },
    };
    let options = build_options(&args, &settings)?;

    let provider = build_provider(&settings, &config)?;
    // A missing ffmpeg surfaces when it is first used, at which point clip
    // extraction fails per clip and stitching fails the run.
    let tool = FfmpegTool::locate().unwrap_or_else(|e| {
        warn!(error = %e, "ffmpeg not found on PATH");
        FfmpegTool::with_binary(FfmpegTool::BINARY)
    });

    let store = FileCheckpointStore::new(options.output_root().clone());
    let mut generator = FilmGenerator::new(
        config,
        options,
        provider,
        Box::new(FfmpegFrameExtractor::new(tool.clone())),
        Box::new(FfmpegConcatenator::new(tool)),
        Box::new(store),
    )?;

    let report = generator.run().await?;
    if report.has_failures() {
        warn!(failed = report.failed().len(), "Some clips failed and were left out");
    }
    info!("Done");
    println!("{}", report.summary());
    Ok(())
}

/// Combine command-line values with configured defaults.
pub(crate) fn build_run_config(
    args: &GenerateArgs,
    settings: &ShortFilmConfig,
    premise: String,
    credentials: Credentials,
) -> ShortFilmResult<RunConfig> {
    let style = parse_or_default::<FilmStyle>(args.style.as_deref())?;
    let music_vibe = parse_or_default::<MusicVibe>(args.music_vibe.as_deref())?;
    let provider = parse_or_default::<VideoProvider>(args.provider.as_deref())?;

    let config = RunConfig::builder()
        .premise(premise)
        .style(style)
        .music_vibe(music_vibe)
        .provider(provider)
        .target_duration(args.duration.unwrap_or(settings.pipeline.target_duration))
        .clip_duration(
            args.clip_duration
                .unwrap_or(settings.pipeline.clip_duration),
        )
        .credentials(credentials)
        .build()?;
    Ok(config)
}

pub(crate) fn build_options(
    args: &GenerateArgs,
    settings: &ShortFilmConfig,
) -> ShortFilmResult<GenerationOptions> {
    let mut builder = GenerationOptions::builder();
    builder
        .output_root(
            args.output
                .clone()
                .unwrap_or_else(|| settings.pipeline.output_dir.clone()),
        )
        .resume(!args.no_resume)
        .trim_to_target(args.trim);
    if let Some(music) = &args.music {
        builder.music_track(music.clone());
    }
    Ok(builder.build()?)
}

fn parse_or_default<T>(value: Option<&str>) -> Result<T, ConfigError>
where
    T: FromStr<Err = ConfigError> + Default,
{
    value.map_or_else(|| Ok(T::default()), str::parse)
}

fn prompt_run_config(
    args: &GenerateArgs,
    settings: &ShortFilmConfig,
) -> ShortFilmResult<Option<RunConfig>> {
    let stdin = std::io::stdin();
    if !stdin.is_terminal() {
        return Err(ConfigError::new(
            "No premise given; pass --premise or run interactively",
        )
        .into());
    }
    interview(
        &mut stdin.lock(),
        &mut std::io::stdout(),
        args,
        settings,
        Credentials::from_env(),
    )
}

/// Ask for the premise and any style or vibe not given as a flag, show the
/// resulting configuration and ask for confirmation.
///
/// Returns `None` when the user declines.
pub(crate) fn interview<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    args: &GenerateArgs,
    settings: &ShortFilmConfig,
    credentials: Credentials,
) -> ShortFilmResult<Option<RunConfig>> {
    let premise = ask(input, output, "Film premise: ")?;
    if premise.is_empty() {
        return Err(ConfigError::new("Premise must not be empty").into());
    }

    let mut args = args.clone();
    if args.style.is_none() {
        let style = choose::<FilmStyle, _, _>(input, output, "Choose a film style")?;
        args.style = Some(style.to_string());
    }
    if args.music_vibe.is_none() {
        let vibe = choose::<MusicVibe, _, _>(input, output, "Choose a music vibe")?;
        args.music_vibe = Some(vibe.to_string());
    }

    let config = build_run_config(&args, settings, premise, credentials)?;
    write_summary(output, &config).map_err(io_error)?;
    if confirm(input, output, "Ready to generate? [Y/n] ")? {
        Ok(Some(config))
    } else {
        Ok(None)
    }
}

/// Print `label` and read one trimmed line. End of input is an error.
fn ask<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> Result<String, ConfigError> {
    write!(output, "{}", label).map_err(io_error)?;
    output.flush().map_err(io_error)?;

    let mut line = String::new();
    let read = input.read_line(&mut line).map_err(io_error)?;
    if read == 0 {
        return Err(ConfigError::new("Input ended before the question was answered"));
    }
    Ok(line.trim().to_string())
}

/// Offer a numbered list of every value of `T`.
///
/// Accepts a number, a name, or an empty line for the default, and asks
/// again on anything else.
fn choose<T, R, W>(input: &mut R, output: &mut W, title: &str) -> Result<T, ConfigError>
where
    T: IntoEnumIterator + Display + FromStr<Err = ConfigError> + Default + Copy,
    R: BufRead,
    W: Write,
{
    let values: Vec<T> = T::iter().collect();
    writeln!(output, "{}", title).map_err(io_error)?;
    for (position, value) in values.iter().enumerate() {
        writeln!(output, "  {}. {}", position + 1, value).map_err(io_error)?;
    }

    let label = format!("Choice [{}]: ", T::default());
    loop {
        let answer = ask(input, output, &label)?;
        if answer.is_empty() {
            return Ok(T::default());
        }
        let numbered = answer
            .parse::<usize>()
            .ok()
            .and_then(|number| number.checked_sub(1))
            .and_then(|position| values.get(position).copied());
        if let Some(value) = numbered {
            return Ok(value);
        }
        match answer.parse::<T>() {
            Ok(value) => return Ok(value),
            Err(_) => writeln!(output, "Unknown choice: {}", answer).map_err(io_error)?,
        }
    }
}

fn write_summary<W: Write>(output: &mut W, config: &RunConfig) -> std::io::Result<()> {
    writeln!(output)?;
    writeln!(output, "Film configuration")?;
    writeln!(output, "  Premise   {}", config.premise())?;
    writeln!(output, "  Style     {}", config.style())?;
    writeln!(output, "  Music     {}", config.music_vibe())?;
    writeln!(output, "  Provider  {}", config.provider())?;
    writeln!(
        output,
        "  Duration  {}s in {} clips",
        config.target_duration(),
        config.clip_count()
    )?;
    writeln!(output)
}

/// Yes unless the answer starts with `n`. End of input declines.
fn confirm<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> Result<bool, ConfigError> {
    match ask(input, output, question) {
        Ok(answer) => Ok(!answer.to_lowercase().starts_with('n')),
        Err(_) => Ok(false),
    }
}

fn io_error(e: std::io::Error) -> ConfigError {
    ConfigError::new(format!("Terminal I/O failed: {}", e))
}
