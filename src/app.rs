//! Application wiring: configuration, plugins and the page pipeline.

use std::sync::Arc;

use tracing::info;

use pagehook_core::config::{AppConfig, PluginToggle};
use pagehook_core::result::AppResult;
use pagehook_plugin::{PagePipeline, PageResponse, Plugin, PluginInfo, PluginManager};

use plugin_fb_comments::FbCommentsPlugin;
use plugin_old_links_redirect::OldLinksRedirectPlugin;
use plugin_opengraph::OpenGraphPlugin;
use plugin_share_buttons::ShareButtonsPlugin;

use crate::render::TemplateRenderer;
use crate::site::ContentSite;

/// A configured site ready to serve pages.
#[derive(Debug)]
pub struct App {
    config: AppConfig,
    plugins: PluginManager,
    pipeline: PagePipeline,
    host: ContentSite,
}

impl App {
    /// Builds the site and loads every enabled plugin.
    pub fn new(config: AppConfig) -> AppResult<Self> {
        let plugins = PluginManager::new();
        let toggles = &config.plugins;

        load_if_enabled(&plugins, &toggles.fb_comments, FbCommentsPlugin::with_priority)?;
        load_if_enabled(&plugins, &toggles.share_buttons, ShareButtonsPlugin::with_priority)?;
        load_if_enabled(
            &plugins,
            &toggles.old_links_redirect,
            OldLinksRedirectPlugin::with_priority,
        )?;
        load_if_enabled(&plugins, &toggles.opengraph, OpenGraphPlugin::with_priority)?;

        info!(plugins = plugins.plugin_registry().count(), "Plugins loaded");

        let pipeline = PagePipeline::new(config.site.clone(), plugins.dispatcher().clone());
        let host = ContentSite::new(
            config.site.clone(),
            TemplateRenderer::new(&config.site.template),
        );

        Ok(Self {
            config,
            plugins,
            pipeline,
            host,
        })
    }

    /// Renders the page for a request path.
    pub fn render(&self, url: &str) -> AppResult<PageResponse> {
        let request = self.host.resolve(url);
        self.pipeline.run(&self.host, &request)
    }

    /// The loaded configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// The content host.
    pub fn host(&self) -> &ContentSite {
        &self.host
    }

    /// Metadata of the loaded plugins.
    pub fn plugins(&self) -> Vec<PluginInfo> {
        self.plugins.list_plugins()
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.plugins.unload_all();
    }
}

fn load_if_enabled<P, F>(manager: &PluginManager, toggle: &PluginToggle, build: F) -> AppResult<()>
where
    P: Plugin + 'static,
    F: FnOnce(i32) -> P,
{
    if toggle.enabled {
        manager.load_plugin(Arc::new(build(toggle.priority)))?;
    }
    Ok(())
}
