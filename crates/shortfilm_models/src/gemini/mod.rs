//! Google Imagen and Veo integration.

mod client;
mod dto;

pub use client::GeminiClient;
pub use dto::{
    GenerateVideoResponse, ImagenInstance, ImagenParameters, ImagenPrediction, ImagenRequest,
    ImagenResponse, InlineImage, OperationError, VeoInstance, VeoOperation, VeoParameters,
    VeoRequest, VeoResponse, VeoSample, VeoVideo,
};
