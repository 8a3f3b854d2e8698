use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber.
///
/// `RUST_LOG` wins when set; otherwise `--verbose` selects debug output for
/// the shortfilm crates.
pub fn init(verbose: bool, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let default_filter = if verbose {
        "info,shortfilm=debug,shortfilm_pipeline=debug,shortfilm_models=debug,shortfilm_media=debug"
    } else {
        "info"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let registry = tracing_subscriber::registry().with(env_filter);
    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()?;
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(false))
            .try_init()?;
    }
    Ok(())
}
