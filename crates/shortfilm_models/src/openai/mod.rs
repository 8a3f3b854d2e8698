//! OpenAI Images and Videos (Sora) integration.

mod client;
mod dto;

pub use client::OpenAiClient;
pub use dto::{
    ImageData, ImageGenerationRequest, ImageGenerationRequestBuilder, ImagesResponse, VideoJob,
    VideoJobError, VideoJobStatus,
};
