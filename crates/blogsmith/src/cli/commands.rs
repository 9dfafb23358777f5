use blogsmith_core::{DEFAULT_TEMPERATURE, DEFAULT_WORD_COUNT};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments for blogsmith.
#[derive(Parser, Debug)]
#[command(name = "blogsmith")]
#[command(about = "Generate Blogs with a locally hosted LLaMA model")]
#[command(version)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Model artifact path (overrides config and BLOGSMITH_MODEL_PATH)
    #[arg(long, global = true)]
    pub model_path: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands. `serve` runs when none is given.
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Run the blog form page server
    Serve {
        /// Listen address, e.g. 127.0.0.1:8501
        #[arg(long)]
        bind: Option<String>,
    },
    /// Generate one blog and print it to stdout
    Generate {
        /// Blog topic
        #[arg(long)]
        topic: String,
        /// Requested word count
        #[arg(long, default_value = DEFAULT_WORD_COUNT)]
        words: String,
        /// Audience: "Researchers", "Data Scientist" or "Common People"
        #[arg(long, default_value = "Researchers")]
        style: String,
        /// Sampling temperature, clamped to 0.1-2.0
        #[arg(long, default_value_t = DEFAULT_TEMPERATURE)]
        temperature: f32,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Serve { bind: None }
    }
}
