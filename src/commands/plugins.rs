//! Plugin listing command.

use serde::Serialize;
use tabled::Tabled;

use pagehook::App;
use pagehook_core::config::AppConfig;
use pagehook_core::error::AppError;
use pagehook_plugin::PluginInfo;

use crate::output::{self, OutputFormat};

/// One row of the plugin table
#[derive(Debug, Serialize, Tabled)]
struct PluginRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Version")]
    version: String,
    #[tabled(rename = "Priority")]
    priority: i32,
    #[tabled(rename = "Hooks")]
    hooks: String,
}

impl From<PluginInfo> for PluginRow {
    fn from(info: PluginInfo) -> Self {
        Self {
            id: info.id,
            name: info.name,
            version: info.version,
            priority: info.priority,
            hooks: info.hooks.join(", "),
        }
    }
}

/// Execute the plugins command
pub fn execute(config: AppConfig, format: OutputFormat) -> Result<(), AppError> {
    let app = App::new(config)?;
    let rows: Vec<PluginRow> = app.plugins().into_iter().map(PluginRow::from).collect();
    output::print_list(&rows, format);
    Ok(())
}
