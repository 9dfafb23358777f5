//! Request-scoped generation types.

use crate::{BlogStyle, Temperature};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Token budget for every generation call.
pub const MAX_NEW_TOKENS: u32 = 256;

/// The four form values, captured on submit and consumed by one invocation.
///
/// `topic` and `word_count` are free text. Neither is checked for length,
/// emptiness or numeric content; the word count is only advisory text
/// inside the prompt.
#[derive(
    Debug, Clone, PartialEq, Serialize, Deserialize, Getters, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct GenerationRequest {
    /// Blog topic
    topic: String,
    /// Requested length, as typed
    #[builder(default = "crate::DEFAULT_WORD_COUNT.to_string()")]
    word_count: String,
    /// Target audience
    #[builder(default)]
    style: BlogStyle,
    /// Sampling temperature
    #[builder(default)]
    temperature: Temperature,
}

impl GenerationRequest {
    /// Creates a new builder for GenerationRequest.
    pub fn builder() -> GenerationRequestBuilder {
        GenerationRequestBuilder::default()
    }

    /// Convenience constructor taking all four values.
    pub fn new(
        topic: impl Into<String>,
        word_count: impl Into<String>,
        style: BlogStyle,
        temperature: impl Into<Temperature>,
    ) -> Self {
        Self {
            topic: topic.into(),
            word_count: word_count.into(),
            style,
            temperature: temperature.into(),
        }
    }

    /// Model configuration for this request.
    pub fn generation_config(&self) -> GenerationConfig {
        GenerationConfig::new(MAX_NEW_TOKENS, self.temperature)
    }
}

/// Sampling options handed to the model alongside the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Getters)]
pub struct GenerationConfig {
    /// Maximum generated tokens
    max_new_tokens: u32,
    /// Sampling temperature
    temperature: Temperature,
}

impl GenerationConfig {
    /// Build a config with an explicit token budget.
    pub fn new(max_new_tokens: u32, temperature: Temperature) -> Self {
        Self {
            max_new_tokens,
            temperature,
        }
    }
}

/// Text produced by one invocation, exactly as the model returned it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GenerationResult {
    /// Raw generated text
    text: String,
}

impl GenerationResult {
    /// Wrap raw model output.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Consume the result, returning the text.
    pub fn into_text(self) -> String {
        self.text
    }
}
