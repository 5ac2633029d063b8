//! CLI command definitions and dispatch.

pub mod config;
pub mod plugins;
pub mod redirect;
pub mod render;

use clap::{Parser, Subcommand};

use pagehook_core::config::AppConfig;
use pagehook_core::error::AppError;

use crate::output::OutputFormat;

/// pagehook: render flat-file pages through the plugin pipeline
#[derive(Debug, Parser)]
#[command(name = "pagehook", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render a page by request path
    Render(render::RenderArgs),
    /// Configuration management
    Config(config::ConfigArgs),
    /// List loaded plugins
    Plugins,
    /// Show the redirect decision for a content file path
    Redirect(redirect::RedirectArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(&self, config: AppConfig) -> Result<(), AppError> {
        match &self.command {
            Commands::Render(args) => render::execute(args, config),
            Commands::Config(args) => config::execute(args, &self.config, config, self.format),
            Commands::Plugins => plugins::execute(config, self.format),
            Commands::Redirect(args) => redirect::execute(args, &config, self.format),
        }
    }
}
