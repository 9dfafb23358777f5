//! Local model handle and inference runtime client for Blogsmith.
//!
//! The model artifact is validated and cached here; token generation is
//! delegated to a locally hosted runtime that speaks the OpenAI-compatible
//! completions protocol (llama.cpp server, mistral.rs and similar).

mod cache;
mod client;
mod config;
mod invoker;
mod model;
mod request;
mod response;
mod traits;

pub use cache::ModelCache;
pub use client::CompletionsClient;
pub use config::{DEFAULT_BASE_URL, ServerConfig, ServerConfigBuilder};
pub use invoker::BlogInvoker;
pub use model::{
    DEFAULT_MODEL_PATH, DEFAULT_MODEL_TYPE, LocalModel, ModelFormat, ModelSpec, ModelSpecBuilder,
    ModelType,
};
pub use request::{CompletionRequest, CompletionRequestBuilder};
pub use response::{CompletionChoice, CompletionResponse, Usage};
pub use traits::TextGenerator;
