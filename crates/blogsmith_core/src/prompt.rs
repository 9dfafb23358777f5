//! Fixed prompt template with named interpolation points.

use crate::GenerationRequest;

macro_rules! blog_template {
    () => {
        "Write a blog for {style} job profile for a topic {topic} within {word_count} words."
    };
}

/// The blog instruction sent to the model.
pub const BLOG_TEMPLATE: &str = blog_template!();

/// The blog template plus the variables it interpolates.
///
/// Values are substituted once, so braces inside user text are copied
/// literally and never re-expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PromptTemplate;

impl PromptTemplate {
    /// The blog template with `style`, `topic` and `word_count`.
    pub fn blog() -> Self {
        Self
    }

    /// Raw template text.
    pub fn template(&self) -> &'static str {
        BLOG_TEMPLATE
    }

    /// Names the template interpolates.
    pub fn input_variables(&self) -> &'static [&'static str] {
        &["style", "topic", "word_count"]
    }

    /// Fill the template from a request.
    pub fn format_request(&self, request: &GenerationRequest) -> String {
        format!(
            blog_template!(),
            style = request.style(),
            topic = request.topic(),
            word_count = request.word_count(),
        )
    }
}

impl std::fmt::Display for PromptTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "PromptTemplate(input_variables={:?}, template={:?})",
            self.input_variables(),
            self.template()
        )
    }
}
