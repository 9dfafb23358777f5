use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// OpenAI-compatible text completion response
///
/// Runtimes differ in which bookkeeping fields they fill, so everything
/// except `choices` is optional.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Getters)]
pub struct CompletionResponse {
    /// Unique identifier for the completion
    #[serde(default)]
    id: Option<String>,
    /// Model used for completion
    #[serde(default)]
    model: Option<String>,
    /// Generated completions
    choices: Vec<CompletionChoice>,
    /// Token usage statistics
    #[serde(default)]
    usage: Option<Usage>,
}

/// A completion choice
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Getters)]
pub struct CompletionChoice {
    /// Index of this choice
    #[serde(default)]
    index: u32,
    /// The generated text
    text: String,
    /// Reason why generation finished
    #[serde(default)]
    finish_reason: Option<String>,
}

/// Token usage statistics
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Getters)]
pub struct Usage {
    /// Tokens in the prompt
    #[serde(default)]
    prompt_tokens: u32,
    /// Tokens in the completion
    #[serde(default)]
    completion_tokens: u32,
    /// Total tokens used
    #[serde(default)]
    total_tokens: u32,
}
