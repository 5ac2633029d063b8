//! Page template rendering with minijinja.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use minijinja::{AutoEscape, Environment};
use serde_json::Value;
use tracing::debug;

use pagehook_core::error::{AppError, ErrorKind};
use pagehook_core::result::AppResult;

/// Template used when the configured template file does not exist.
pub const DEFAULT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
	<meta charset="utf-8" />
	<title>{% if meta.title %}{{ meta.title }} | {% endif %}{{ site_title }}</title>
	{% if meta.description %}<meta name="description" content="{{ meta.description }}" />{% endif %}
</head>
<body>
	<article>
{{ content }}
	</article>
	{{ share_buttons }}
	{{ fb_comments }}
</body>
</html>
"#;

/// Renders the page template.
///
/// Variables are inserted without HTML escaping: page content and plugin
/// markup are already HTML.
#[derive(Debug, Clone)]
pub struct TemplateRenderer {
    template: PathBuf,
}

impl TemplateRenderer {
    /// Creates a renderer for the template at `template`.
    pub fn new(template: impl AsRef<Path>) -> Self {
        Self {
            template: template.as_ref().to_path_buf(),
        }
    }

    /// Renders with the given variables.
    pub fn render(&self, variables: &BTreeMap<String, Value>) -> AppResult<String> {
        let source = match fs::read_to_string(&self.template) {
            Ok(source) => source,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(template = %self.template.display(), "Template missing, using default");
                DEFAULT_TEMPLATE.to_string()
            }
            Err(e) => {
                return Err(AppError::with_source(
                    ErrorKind::Storage,
                    format!("Cannot read template {}", self.template.display()),
                    e,
                ));
            }
        };

        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::None);

        env.render_str(&source, variables).map_err(|e| {
            AppError::with_source(
                ErrorKind::Template,
                format!("Cannot render template {}", self.template.display()),
                e,
            )
        })
    }
}
