//! Core data types for the Blogsmith blog generator.
//!
//! The form produces a [`GenerationRequest`]; the prompt template turns it
//! into the instruction the model sees; the model's answer comes back as a
//! [`GenerationResult`].

mod observability;
mod prompt;
mod request;
mod style;
mod temperature;

pub use observability::{GenerationMetrics, init_observability, shutdown_observability};
pub use prompt::{BLOG_TEMPLATE, PromptTemplate};
pub use request::{
    GenerationConfig, GenerationRequest, GenerationRequestBuilder, GenerationResult,
    MAX_NEW_TOKENS,
};
pub use style::BlogStyle;
pub use temperature::Temperature;

/// Word count pre-filled in the form.
pub const DEFAULT_WORD_COUNT: &str = "100";

/// Temperature the slider is declared with.
///
/// Sits below [`Temperature::MIN`]; the slider shows the clamped value.
pub const DEFAULT_TEMPERATURE: f32 = 0.09;
