//! Image and video generation providers for shortfilm.
//!
//! Two backends implement [`MediaProvider`](shortfilm_interface::MediaProvider):
//!
//! - **OpenAI** - Images API for the starting frame, Videos API (Sora) for clips
//! - **Gemini** - Imagen for the starting frame, Veo for clips
//!
//! Both are wrapped in a [`RetryingProvider`] by [`build_provider`], which paces
//! requests. Transient failures are retried per request before a clip is
//! reported as failed: image calls by the wrapper, and the steps of a video
//! job by the client that submitted it.
//!
//! # Example
//!
//! ```no_run
//! use shortfilm_core::{Credentials, RunConfig, VideoProvider};
//! use shortfilm_models::build_provider;
//! use shortfilm_rate_limit::ShortFilmConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let settings = ShortFilmConfig::load()?;
//! let run = RunConfig::builder()
//!     .premise("A clockmaker builds a heart")
//!     .provider(VideoProvider::Gemini)
//!     .credentials(Credentials::from_env())
//!     .build()?;
//! let provider = build_provider(&settings, &run)?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod factory;
mod gemini;
mod http;
mod openai;
mod retrying;

pub use factory::build_provider;
pub use gemini::{
    GeminiClient, GenerateVideoResponse, ImagenInstance, ImagenParameters, ImagenPrediction,
    ImagenRequest, ImagenResponse, InlineImage, OperationError, VeoInstance, VeoOperation,
    VeoParameters, VeoRequest, VeoResponse, VeoSample, VeoVideo,
};
pub use http::{ApiKey, classify_status, supported_duration};
pub use openai::{
    ImageData, ImageGenerationRequest, ImageGenerationRequestBuilder, ImagesResponse,
    OpenAiClient, VideoJob, VideoJobError, VideoJobStatus,
};
pub use retrying::RetryingProvider;
