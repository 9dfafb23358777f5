//! Turns one generation request into one model call.

use crate::{ModelCache, TextGenerator};
use blogsmith_core::{GenerationMetrics, GenerationRequest, GenerationResult, PromptTemplate};
use blogsmith_error::BlogsmithResult;
use std::io::Write;
use std::sync::{Arc, Mutex};
use std::time::Instant;
use tracing::{info, instrument, warn};

/// Where generated text is written after each call.
type Output = Arc<Mutex<Box<dyn Write + Send>>>;

/// The generation pipeline: load model, format prompt, call, return text.
///
/// Nothing is retried and the output is never post-processed. The requested
/// word count only exists as text inside the prompt.
#[derive(Clone)]
pub struct BlogInvoker {
    generator: Arc<dyn TextGenerator>,
    cache: Arc<ModelCache>,
    template: PromptTemplate,
    metrics: GenerationMetrics,
    output: Output,
}

impl std::fmt::Debug for BlogInvoker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlogInvoker")
            .field("cache", &self.cache)
            .field("template", &self.template)
            .finish_non_exhaustive()
    }
}

impl BlogInvoker {
    /// Creates an invoker over the given runtime and model cache.
    pub fn new(generator: Arc<dyn TextGenerator>, cache: Arc<ModelCache>) -> Self {
        Self {
            generator,
            cache,
            template: PromptTemplate::blog(),
            metrics: GenerationMetrics::new(),
            output: Arc::new(Mutex::new(Box::new(std::io::stdout()))),
        }
    }

    /// Write generated text to `out` instead of stdout.
    pub fn with_output(mut self, out: impl Write + Send + 'static) -> Self {
        self.output = Arc::new(Mutex::new(Box::new(out)));
        self
    }

    /// The model cache backing this invoker.
    pub fn cache(&self) -> &Arc<ModelCache> {
        &self.cache
    }

    /// Run one generation.
    ///
    /// Logs the formatted prompt at info level before the call and writes the
    /// raw result to the output (stdout unless replaced) after it.
    ///
    /// # Errors
    ///
    /// Returns a model-load error if the artifact is unusable, or an
    /// inference error if the runtime call fails.
    #[instrument(skip(self, request), fields(style = %request.style()))]
    pub async fn invoke(&self, request: &GenerationRequest) -> BlogsmithResult<GenerationResult> {
        let style = request.style().to_string();
        let started = Instant::now();

        let outcome = self.run(request).await;
        match &outcome {
            Ok(_) => self.metrics.record_success(&style, started.elapsed()),
            Err(_) => self.metrics.record_failure(&style),
        }
        outcome
    }

    async fn run(&self, request: &GenerationRequest) -> BlogsmithResult<GenerationResult> {
        let model = self.cache.get().await?;
        let config = request.generation_config();

        let prompt = self.template.format_request(request);
        info!(%prompt, "Prompt");

        let text = self.generator.generate(&model, &prompt, &config).await?;
        self.emit(&text);

        Ok(GenerationResult::new(text))
    }

    fn emit(&self, text: &str) {
        let Ok(mut out) = self.output.lock() else {
            warn!("Output writer poisoned, result not written");
            return;
        };
        if let Err(e) = writeln!(out, "{}", text).and_then(|()| out.flush()) {
            warn!(error = %e, "Failed to write result");
        }
    }
}
