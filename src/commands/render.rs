//! Page rendering command.

use clap::Args;
use http::header;

use pagehook::App;
use pagehook_core::config::AppConfig;
use pagehook_core::error::AppError;
use pagehook_plugin::PageResponse;

use crate::output;

/// Arguments for the render command
#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Request path, e.g. `blog/post`; empty for the home page
    #[arg(default_value = "")]
    pub url: String,

    /// Print only the response status
    #[arg(long)]
    pub head: bool,
}

/// Execute the render command
pub fn execute(args: &RenderArgs, config: AppConfig) -> Result<(), AppError> {
    let app = App::new(config)?;

    match app.render(&args.url)? {
        PageResponse::Page { status, body } => {
            if args.head {
                println!("{status}");
            } else {
                if !status.is_success() {
                    tracing::warn!(url = %args.url, %status, "Served error page");
                }
                print!("{body}");
            }
        }
        PageResponse::Redirect(redirect) => {
            let response = redirect.to_response()?;
            println!("{}", response.status());
            if let Some(location) = response.headers().get(header::LOCATION) {
                output::print_kv("Location", location.to_str().unwrap_or_default());
            }
        }
    }

    Ok(())
}
