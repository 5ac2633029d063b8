//! Embed markup for the comments widget.

/// SDK bootstrap, spliced before `</body>` on pages with comments.
pub const SDK_SCRIPT: &str = r#"<div id="fb-root"></div>
<script>(function(d, s, id) {
  var js, fjs = d.getElementsByTagName(s)[0];
  if (d.getElementById(id)) return;
  js = d.createElement(s); js.id = id;
  js.src = "//connect.facebook.net/en_US/sdk.js#xfbml=1&version=v2.8";
  fjs.parentNode.insertBefore(js, fjs);
}(document, 'script', 'facebook-jssdk'));</script>"#;

/// The per-page comments widget pointing at `page_url`.
pub fn widget(page_url: &str) -> String {
    format!(
        r#"<div class="fb-comments" data-href="{page_url}" data-width="100%" data-numposts="10"></div>"#
    )
}

/// Base URL with exactly the trailing slash the widget URL needs.
pub fn normalize_base_url(base_url: &str) -> String {
    if base_url.ends_with('/') {
        base_url.to_string()
    } else {
        format!("{base_url}/")
    }
}
