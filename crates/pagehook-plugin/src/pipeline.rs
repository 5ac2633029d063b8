//! Page pipeline driver.
//!
//! Fires every hook point once per request, in fixed order, against a
//! fresh [`HookContext`]. The host supplies content loading and template
//! rendering through [`PageHost`]; everything in between is plugin work.

use std::collections::BTreeMap;
use std::sync::Arc;

use http::StatusCode;
use serde_json::{Value, json};
use tracing::{debug, info, info_span};

use pagehook_core::config::SiteConfig;
use pagehook_core::result::AppResult;
use pagehook_core::types::{MetaHeaders, PageMeta, Redirect};

use crate::context::HookContext;
use crate::hooks::definitions::{HookPayload, HookPoint, keys};
use crate::hooks::dispatcher::HookDispatcher;

/// Template variable names the host always provides.
pub mod vars {
    /// Site base URL as configured.
    pub const BASE_URL: &str = "base_url";
    /// Site title.
    pub const SITE_TITLE: &str = "site_title";
    /// Absolute URL of the current page.
    pub const CURRENT_URL: &str = "current_url";
    /// Page body.
    pub const CONTENT: &str = "content";
    /// Parsed metadata object.
    pub const META: &str = "meta";
}

/// One page request as resolved by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Request path without leading slash; empty for the home page.
    pub url: String,
    /// Content file the path maps to.
    pub file: String,
    /// Whether `file` does not exist.
    pub not_found: bool,
}

impl PageRequest {
    /// A request for an existing content file.
    pub fn found(url: impl Into<String>, file: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            file: file.into(),
            not_found: false,
        }
    }

    /// A request whose content file does not exist.
    pub fn not_found(url: impl Into<String>, file: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            file: file.into(),
            not_found: true,
        }
    }
}

/// A content file split into front matter and body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawPage {
    /// Front-matter label → value.
    pub front_matter: BTreeMap<String, String>,
    /// Page body.
    pub content: String,
}

impl RawPage {
    /// Creates a raw page.
    pub fn new(front_matter: BTreeMap<String, String>, content: impl Into<String>) -> Self {
        Self {
            front_matter,
            content: content.into(),
        }
    }
}

/// Final outcome of a page request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageResponse {
    /// A rendered document.
    Page {
        /// `200 OK`, or `404 Not Found` for the not-found page.
        status: StatusCode,
        /// Rendered document.
        body: String,
    },
    /// A redirect decided by a hook; no body is produced.
    Redirect(Redirect),
}

impl PageResponse {
    /// Returns the response status.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Page { status, .. } => *status,
            Self::Redirect(redirect) => redirect.status,
        }
    }
}

/// Content loading and template rendering supplied by the host.
pub trait PageHost {
    /// Loads the page for `request`. For a not-found request this is the
    /// host's not-found page.
    fn load(&self, request: &PageRequest) -> AppResult<RawPage>;

    /// Renders the page template with the final variable set.
    fn render(&self, variables: &BTreeMap<String, Value>) -> AppResult<String>;
}

/// Drives one request through every hook point.
#[derive(Debug, Clone)]
pub struct PagePipeline {
    site: SiteConfig,
    dispatcher: Arc<HookDispatcher>,
}

impl PagePipeline {
    /// Creates a pipeline for a site.
    pub fn new(site: SiteConfig, dispatcher: Arc<HookDispatcher>) -> Self {
        Self { site, dispatcher }
    }

    /// Site settings the pipeline was built with.
    pub fn site(&self) -> &SiteConfig {
        &self.site
    }

    /// Runs a request and returns the rendered page or the redirect.
    pub fn run(&self, host: &dyn PageHost, request: &PageRequest) -> AppResult<PageResponse> {
        let mut ctx = HookContext::new();
        let span = info_span!("page", request_id = %ctx.request_id, url = %request.url);
        let _guard = span.enter();

        let config = self.site.to_map();
        let payload = HookPayload::from_strings(
            HookPoint::OnConfigLoaded,
            config.iter().map(|(k, v)| (k.as_str(), v.as_str())),
        );
        self.dispatcher.dispatch(&mut ctx, payload);

        let payload = HookPayload::new(HookPoint::OnRequestUrl).with_string(keys::URL, &request.url);
        self.dispatcher.dispatch(&mut ctx, payload);

        if request.not_found {
            let payload = HookPayload::new(HookPoint::On404ContentLoading)
                .with_string(keys::FILE, &request.file);
            let result = self.dispatcher.dispatch(&mut ctx, payload);

            if let Some(redirect) = result.redirect {
                info!(
                    file = %request.file,
                    location = %redirect.location,
                    halted_by = ?result.halted_by,
                    "Request redirected"
                );
                return Ok(PageResponse::Redirect(redirect));
            }
        }

        let page = host.load(request)?;

        let defaults = MetaHeaders::defaults();
        let payload = HookPayload::from_strings(HookPoint::OnMetaHeaders, defaults.iter());
        let headers: MetaHeaders = self
            .dispatcher
            .dispatch(&mut ctx, payload)
            .payload
            .string_entries()
            .collect();

        let parsed = PageMeta::resolve(&headers, &page.front_matter);
        let payload = HookPayload::from_strings(HookPoint::OnMetaParsed, parsed.iter());
        let meta: PageMeta = self
            .dispatcher
            .dispatch(&mut ctx, payload)
            .payload
            .string_entries()
            .collect();

        let payload =
            HookPayload::new(HookPoint::OnContentParsed).with_string(keys::CONTENT, &page.content);
        let content = self
            .dispatcher
            .dispatch(&mut ctx, payload)
            .payload
            .string_or_empty(keys::CONTENT)
            .to_string();

        let payload = HookPayload::new(HookPoint::OnPageRendering)
            .with_string(vars::BASE_URL, &self.site.base_url)
            .with_string(vars::SITE_TITLE, &self.site.site_title)
            .with_string(vars::CURRENT_URL, &self.current_url(&request.url))
            .with_string(vars::CONTENT, &content)
            .with_data(vars::META, json!(meta));
        let variables = self.dispatcher.dispatch(&mut ctx, payload).payload.data;

        let rendered = host.render(&variables)?;

        let payload = HookPayload::new(HookPoint::OnPageRendered).with_string(keys::OUTPUT, &rendered);
        let body = self
            .dispatcher
            .dispatch(&mut ctx, payload)
            .payload
            .string_or_empty(keys::OUTPUT)
            .to_string();

        let status = if request.not_found {
            StatusCode::NOT_FOUND
        } else {
            StatusCode::OK
        };

        debug!(
            status = %status,
            bytes = body.len(),
            elapsed_ms = ctx.elapsed_ms(),
            "Page rendered"
        );

        Ok(PageResponse::Page { status, body })
    }

    fn current_url(&self, url: &str) -> String {
        format!("{}/{}", self.site.base_url.trim_end_matches('/'), url)
    }
}
