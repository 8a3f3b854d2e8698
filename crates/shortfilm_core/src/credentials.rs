//! Provider credentials.

use crate::VideoProvider;
use shortfilm_error::ConfigError;

/// API keys for the generation backends, one per provider.
///
/// Values are held only for the lifetime of a run. `Debug` never prints them
/// and the run configuration skips them when serializing, so they never reach
/// a checkpoint or a log line.
///
/// # Examples
///
/// ```
/// use shortfilm_core::{Credentials, VideoProvider};
///
/// let creds = Credentials::default().with_openai("sk-test");
/// assert_eq!(creds.get(VideoProvider::OpenAi), Some("sk-test"));
/// assert!(creds.require(VideoProvider::Gemini).is_err());
/// assert!(!format!("{:?}", creds).contains("sk-test"));
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    openai: Option<String>,
    gemini: Option<String>,
}

impl Credentials {
    /// Read credentials from the process environment.
    ///
    /// Empty values count as absent.
    pub fn from_env() -> Self {
        let read = |provider: VideoProvider| {
            std::env::var(provider.env_var())
                .ok()
                .filter(|value| !value.trim().is_empty())
        };
        Self {
            openai: read(VideoProvider::OpenAi),
            gemini: read(VideoProvider::Gemini),
        }
    }

    /// Set the OpenAI key.
    pub fn with_openai(mut self, key: impl Into<String>) -> Self {
        self.openai = Some(key.into());
        self
    }

    /// Set the Gemini key.
    pub fn with_gemini(mut self, key: impl Into<String>) -> Self {
        self.gemini = Some(key.into());
        self
    }

    /// Credential for a provider, if present.
    pub fn get(&self, provider: VideoProvider) -> Option<&str> {
        match provider {
            VideoProvider::OpenAi => self.openai.as_deref(),
            VideoProvider::Gemini => self.gemini.as_deref(),
        }
    }

    /// Credential for a provider, or a configuration error naming the
    /// environment variable that should hold it.
    #[track_caller]
    pub fn require(&self, provider: VideoProvider) -> Result<&str, ConfigError> {
        self.get(provider).ok_or_else(|| {
            ConfigError::new(format!(
                "{} environment variable not set (required for provider '{}')",
                provider.env_var(),
                provider
            ))
        })
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mask = |value: &Option<String>| if value.is_some() { "<redacted>" } else { "<unset>" };
        f.debug_struct("Credentials")
            .field("openai", &mask(&self.openai))
            .field("gemini", &mask(&self.gemini))
            .finish()
    }
}
