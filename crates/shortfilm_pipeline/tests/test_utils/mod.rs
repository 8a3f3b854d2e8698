//! Test utilities for pipeline tests.
//!
//! Mock collaborators write small placeholder files so the generator's
//! file-existence checks behave as they would with real media.

#[allow(dead_code)]
pub mod mocks;

#[allow(unused_imports)]
pub use mocks::{ConcatCall, MockConcatenator, MockExtractor, MockProvider, ProviderLog, VideoCall};

use shortfilm_core::{Credentials, RunConfig};
use shortfilm_pipeline::{FilmGenerator, GenerationOptions};
use shortfilm_storage::FileCheckpointStore;
use std::path::Path;

/// Run config with an OpenAI key attached.
pub fn test_config(premise: &str, target_duration: f64, clip_duration: f64) -> RunConfig {
    RunConfig::builder()
        .premise(premise)
        .target_duration(target_duration)
        .clip_duration(clip_duration)
        .credentials(Credentials::default().with_openai("sk-test"))
        .build()
        .expect("Failed to build test config")
}

/// Default options rooted at `root`.
pub fn test_options(root: &Path) -> GenerationOptions {
    GenerationOptions::builder()
        .output_root(root)
        .build()
        .expect("Failed to build test options")
}

/// Generator over mocks with a real checkpoint store in `root`.
#[allow(dead_code)]
pub fn generator(
    config: RunConfig,
    options: GenerationOptions,
    provider: &MockProvider,
    extractor: &MockExtractor,
    concatenator: &MockConcatenator,
) -> FilmGenerator<MockProvider> {
    let store = FileCheckpointStore::new(options.output_root().clone());
    FilmGenerator::new(
        config,
        options,
        provider.clone(),
        Box::new(extractor.clone()),
        Box::new(concatenator.clone()),
        Box::new(store),
    )
    .expect("Failed to create generator")
}
