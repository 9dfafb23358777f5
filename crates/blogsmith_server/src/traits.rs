//! Trait interface between the invoker and an inference runtime.

use crate::LocalModel;
use async_trait::async_trait;
use blogsmith_core::GenerationConfig;
use blogsmith_error::InferenceError;

/// Something that can turn a prompt into text with a loaded model.
///
/// One call produces one complete answer. Implementations must not retry,
/// trim or truncate: the returned string is exactly what the runtime produced.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text for `prompt` with the given sampling options.
    async fn generate(
        &self,
        model: &LocalModel,
        prompt: &str,
        config: &GenerationConfig,
    ) -> Result<String, InferenceError>;
}
