//! Redirect lookup command.

use clap::Args;
use serde::Serialize;

use pagehook_core::config::AppConfig;
use pagehook_core::error::AppError;
use plugin_old_links_redirect::{RedirectTable, derive_key};

use crate::output::{self, OutputFormat};

/// Arguments for the redirect command
#[derive(Debug, Args)]
pub struct RedirectArgs {
    /// Content file path as the host would request it, e.g. `content/old/a.md`
    pub file: String,
}

/// Result of a redirect lookup
#[derive(Debug, Serialize)]
struct RedirectCheck {
    file: String,
    key: String,
    table: String,
    location: Option<String>,
}

/// Execute the redirect command
///
/// Unlike the plugin, a missing or malformed table is reported as an error.
pub fn execute(args: &RedirectArgs, config: &AppConfig, format: OutputFormat) -> Result<(), AppError> {
    let site = &config.site;
    let table_path = site.redirect_path();
    let table = RedirectTable::load(&table_path)?;

    let key = derive_key(&args.file, &site.content_dir, &site.content_ext);
    let check = RedirectCheck {
        file: args.file.clone(),
        key: key.to_string(),
        table: table_path.display().to_string(),
        location: table.resolve(key).map(|r| r.location),
    };

    match format {
        OutputFormat::Json => output::print_item(&check, format),
        OutputFormat::Table => {
            output::print_kv("File", &check.file);
            output::print_kv("Key", &check.key);
            output::print_kv("Table", &format!("{} ({} entries)", check.table, table.len()));
            match &check.location {
                Some(location) => output::print_kv("301 Location", location),
                None => output::print_warning("No redirect for this key"),
            }
        }
    }

    Ok(())
}
