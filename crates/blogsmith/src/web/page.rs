//! HTML rendering for the single page.

use crate::web::FormState;
use blogsmith_core::{BlogStyle, Temperature};
use blogsmith_error::RenderError;
use minijinja::{Environment, context};
use serde::Serialize;

const PAGE_NAME: &str = "index.html";
const PAGE_TEMPLATE: &str = include_str!("../../templates/index.html");

/// Page title and header.
pub const PAGE_TITLE: &str = "Generate Blogs";

/// What the page shows below the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing submitted yet
    #[default]
    Empty,
    /// Generated text, shown verbatim
    Generated(String),
    /// Failure banner
    Failed(String),
}

#[derive(Debug, Serialize)]
struct StyleOption {
    label: String,
    selected: bool,
}

/// Renders the page template. The `.html` name turns on HTML auto-escaping.
#[derive(Debug)]
pub struct PageRenderer {
    env: Environment<'static>,
}

impl PageRenderer {
    /// Compile the page template.
    pub fn new() -> Result<Self, RenderError> {
        let mut env = Environment::new();
        env.add_template(PAGE_NAME, PAGE_TEMPLATE)
            .map_err(|e| RenderError::new(format!("Failed to compile page template: {}", e)))?;
        Ok(Self { env })
    }

    /// Render the form holding `form`'s values, followed by `outcome`.
    pub fn render(&self, form: &FormState, outcome: &Outcome) -> Result<String, RenderError> {
        let selected = BlogStyle::from_label(&form.style).unwrap_or_default();
        let styles: Vec<StyleOption> = BlogStyle::all()
            .map(|style| StyleOption {
                label: style.to_string(),
                selected: style == selected,
            })
            .collect();

        let (output, error) = match outcome {
            Outcome::Empty => (None, None),
            Outcome::Generated(text) => (Some(text.as_str()), None),
            Outcome::Failed(message) => (None, Some(message.as_str())),
        };

        let template = self
            .env
            .get_template(PAGE_NAME)
            .map_err(|e| RenderError::new(format!("Page template missing: {}", e)))?;

        template
            .render(context! {
                title => PAGE_TITLE,
                header => PAGE_TITLE,
                topic => &form.topic,
                word_count => &form.word_count,
                temperature => form.slider_value().to_string(),
                temperature_min => Temperature::MIN.to_string(),
                temperature_max => Temperature::MAX.to_string(),
                styles => styles,
                output => output,
                error => error,
            })
            .map_err(|e| RenderError::new(format!("Failed to render page: {}", e)))
    }
}
