//! Configuration, rate limiting and retry for provider calls.
//!
//! - [`ShortFilmConfig`] loads layered TOML configuration (bundled defaults,
//!   then `~/.config/shortfilm/shortfilm.toml`, then `./shortfilm.toml`).
//! - [`RequestLimiter`] paces provider requests with a GCRA limiter.
//! - [`retry_transient`] retries an operation on transient errors with a
//!   doubling, capped backoff described by a [`RetryPolicy`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod limiter;
mod retry;

pub use config::{PipelineDefaults, ProviderSettings, ProvidersConfig, ShortFilmConfig};
pub use limiter::RequestLimiter;
pub use retry::{RetryPolicy, retry_transient};
