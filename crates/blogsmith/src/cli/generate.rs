//! One-shot generation from the terminal.

use blogsmith::web::FormState;
use blogsmith::{AppConfig, build_invoker};
use tracing::info;

/// Handle the `generate` command
///
/// Goes through the same collect and invoke path as the page; the invoker
/// prints the result to stdout.
pub async fn handle_generate_command(
    config: &AppConfig,
    topic: String,
    words: String,
    style: String,
    temperature: f32,
) -> anyhow::Result<()> {
    let form = FormState {
        topic,
        word_count: words,
        temperature,
        style,
    };
    let request = form.collect()?;

    let invoker = build_invoker(config);
    invoker.invoke(&request).await?;
    invoker.cache().release().await;

    info!("Generation complete");
    Ok(())
}
