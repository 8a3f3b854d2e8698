//! Provider selection.

use crate::{GeminiClient, OpenAiClient, RetryingProvider};
use shortfilm_core::{RunConfig, VideoProvider};
use shortfilm_error::ShortFilmResult;
use shortfilm_interface::MediaProvider;
use shortfilm_rate_limit::{ProviderSettings, RequestLimiter, ShortFilmConfig};
use tracing::{info, instrument};

/// Build the provider selected by `run.provider()`.
///
/// The selection happens once per run. The returned provider is already
/// wrapped with the configured rate limit and retry policy.
///
/// # Errors
///
/// Returns a configuration error if the selected provider has no credential;
/// no network call is made in that case.
#[instrument(skip_all, fields(provider = %run.provider()))]
pub fn build_provider(
    settings: &ShortFilmConfig,
    run: &RunConfig,
) -> ShortFilmResult<Box<dyn MediaProvider>> {
    let api_key = run.credential()?;

    let provider: Box<dyn MediaProvider> = match run.provider() {
        VideoProvider::OpenAi => {
            let provider_settings = &settings.providers.openai;
            wrap(OpenAiClient::new(provider_settings, api_key), provider_settings)
        }
        VideoProvider::Gemini => {
            let provider_settings = &settings.providers.gemini;
            wrap(GeminiClient::new(provider_settings, api_key), provider_settings)
        }
    };

    info!(video_model = provider.video_model(), "Selected provider");
    Ok(provider)
}

fn wrap<P: MediaProvider + 'static>(
    client: P,
    settings: &ProviderSettings,
) -> Box<dyn MediaProvider> {
    Box::new(
        RetryingProvider::new(client, settings.retry)
            .with_limiter(RequestLimiter::per_minute(settings.requests_per_minute)),
    )
}
