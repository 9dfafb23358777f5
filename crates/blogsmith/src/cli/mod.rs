//! Command-line interface module.

mod commands;
mod generate;
mod serve;

pub use commands::{Cli, Commands};
pub use generate::handle_generate_command;
pub use serve::handle_serve_command;
