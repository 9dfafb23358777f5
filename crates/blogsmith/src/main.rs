//! Blogsmith binary: serves the blog form or runs a single generation.

mod cli;

use blogsmith::AppConfig;
use blogsmith_core::{init_observability, shutdown_observability};
use clap::Parser;
use cli::{Cli, Commands, handle_generate_command, handle_serve_command};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let command = cli.command.clone().unwrap_or_default();

    let bind = match &command {
        Commands::Serve { bind } => bind.clone(),
        Commands::Generate { .. } => None,
    };
    let config = AppConfig::load(cli.config.as_deref())?.with_overrides(bind, cli.model_path)?;
    info!(
        model = %config.model().spec().path().display(),
        reload_per_request = config.model().reload_per_request(),
        "Configuration loaded"
    );

    init_observability("blogsmith", 60).map_err(anyhow::Error::msg)?;

    let outcome = match command {
        Commands::Serve { .. } => handle_serve_command(&config).await,
        Commands::Generate {
            topic,
            words,
            style,
            temperature,
        } => handle_generate_command(&config, topic, words, style, temperature).await,
    };

    shutdown_observability();
    outcome
}
