//! Blogsmith: a one-page blog generator backed by a local quantized LLaMA model.
//!
//! The page collects a topic, a word count, an audience style and a sampling
//! temperature, then asks the model for a short blog post and shows it.

pub mod config;
pub mod web;

pub use blogsmith_core::{BlogStyle, GenerationRequest, GenerationResult, Temperature};
pub use blogsmith_error::{BlogsmithError, BlogsmithErrorKind, BlogsmithResult};
pub use blogsmith_server::{BlogInvoker, CompletionsClient, ModelCache, TextGenerator};
pub use config::{AppConfig, ModelSettings};

use std::sync::Arc;

/// Model cache configured by `config`.
pub fn build_cache(config: &AppConfig) -> Arc<ModelCache> {
    let spec = config.model().spec().clone();
    if *config.model().reload_per_request() {
        Arc::new(ModelCache::reloading(spec))
    } else {
        Arc::new(ModelCache::new(spec))
    }
}

/// Invoker wired to the configured runtime.
pub fn build_invoker(config: &AppConfig) -> BlogInvoker {
    let client = CompletionsClient::new(config.inference().clone());
    BlogInvoker::new(Arc::new(client), build_cache(config))
}
