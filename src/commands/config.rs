//! Configuration management CLI commands.

use std::fs;
use std::path::Path;

use clap::{Args, Subcommand};

use pagehook_core::config::AppConfig;
use pagehook_core::error::AppError;

use crate::output::{self, OutputFormat};

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,
    /// Validate configuration file
    Validate,
    /// Generate a default configuration file
    Generate {
        /// Output file path
        #[arg(short, long, default_value = "config/generated.toml")]
        output: String,
    },
}

/// Execute config commands
pub fn execute(
    args: &ConfigArgs,
    config_path: &str,
    config: AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => {
            output::print_item(&config, format);
        }
        ConfigCommand::Validate => {
            let site = &config.site;
            if !Path::new(&site.content_dir).is_dir() {
                let msg = format!("Content directory '{}' does not exist", site.content_dir);
                output::print_error(&msg);
                return Err(AppError::configuration(msg));
            }

            output::print_success(&format!("Configuration '{config_path}' is valid"));
            output::print_kv("Base URL", &site.base_url);
            output::print_kv("Content", &format!("{}*{}", site.content_dir, site.content_ext));
            output::print_kv("Template", &site.template);
            output::print_kv("Redirects", &site.redirect_path().display().to_string());

            if site.base_url.is_empty() {
                output::print_warning("base_url is empty; absolute links will be relative");
            }
            if !Path::new(&site.template).is_file() {
                output::print_warning("Template file missing; the built-in template is used");
            }
        }
        ConfigCommand::Generate { output: out_path } => {
            let default_config = include_str!("../../config/default.toml");

            if let Some(parent) = Path::new(out_path).parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(out_path, default_config)?;

            output::print_success(&format!("Default config written to '{out_path}'"));
        }
    }

    Ok(())
}
