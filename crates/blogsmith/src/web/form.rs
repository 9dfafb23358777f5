//! Submitted form values and their conversion into a generation request.

use blogsmith_core::{
    BlogStyle, DEFAULT_TEMPERATURE, DEFAULT_WORD_COUNT, GenerationRequest, Temperature,
};
use blogsmith_error::FormError;
use serde::{Deserialize, Serialize};

/// Widget state carried by one form submission.
///
/// Missing fields fall back to the widget defaults. Topic and word count are
/// taken as typed: no trimming, no numeric check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormState {
    /// Blog topic text
    #[serde(default)]
    pub topic: String,
    /// Word count text
    #[serde(default = "default_word_count")]
    pub word_count: String,
    /// Slider value
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Selected style label
    #[serde(default = "default_style")]
    pub style: String,
}

fn default_word_count() -> String {
    DEFAULT_WORD_COUNT.to_string()
}

fn default_temperature() -> f32 {
    DEFAULT_TEMPERATURE
}

fn default_style() -> String {
    BlogStyle::default().to_string()
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            topic: String::new(),
            word_count: default_word_count(),
            temperature: default_temperature(),
            style: default_style(),
        }
    }
}

impl FormState {
    /// Build the request these values describe.
    ///
    /// The temperature is clamped into the slider range. The only rejection
    /// is a style label outside the fixed option set.
    pub fn collect(&self) -> Result<GenerationRequest, FormError> {
        let style = BlogStyle::from_label(&self.style)?;
        Ok(GenerationRequest::new(
            self.topic.clone(),
            self.word_count.clone(),
            style,
            Temperature::new(self.temperature),
        ))
    }

    /// Slider position after clamping.
    pub fn slider_value(&self) -> Temperature {
        Temperature::new(self.temperature)
    }
}
