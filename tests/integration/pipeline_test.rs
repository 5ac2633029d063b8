//! Integration tests for the page pipeline and the widget plugins.

mod helpers;

use http::StatusCode;

use plugin_fb_comments::markup::SDK_SCRIPT;
use plugin_share_buttons::SHARE_BUTTONS;

#[test]
fn test_home_page_renders() {
    let site = helpers::TestSite::new();
    site.page("index", r#"Title = "Home""#, "<p>Welcome</p>");

    let response = site.get("");

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("<title>Home | Example</title>"));
    assert!(response.body.contains("<p>Welcome</p>"));
}

#[test]
fn test_missing_page_is_served_as_not_found() {
    let site = helpers::TestSite::new();

    let response = site.get("nowhere");

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(response.body.contains("Error 404"));
    assert!(response.location.is_none());
}

#[test]
fn test_custom_not_found_page() {
    let site = helpers::TestSite::new();
    site.page("404", r#"Title = "Lost""#, "<p>Nothing here</p>");

    let response = site.get("nowhere");

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(response.body.contains("<p>Nothing here</p>"));
}

#[test]
fn test_comments_widget_and_sdk_are_injected() {
    let site = helpers::TestSite::new();
    site.page(
        "blog/post",
        "Title = \"Post\"\nFB-Comments = true",
        "<p>Body</p>",
    );

    let response = site.get("blog/post");

    assert!(response.body.contains(
        r#"<div class="fb-comments" data-href="https://x.com/blog/post" data-width="100%" data-numposts="10"></div>"#
    ));
    let sdk = response.body.find(SDK_SCRIPT).expect("SDK spliced");
    let body_close = response.body.find("</body>").expect("body close");
    assert!(sdk < body_close);
}

#[test]
fn test_share_buttons_are_exposed() {
    let site = helpers::TestSite::new();
    site.page("post", "Title = \"Post\"\nShare-Buttons = \"yes\"", "<p>Body</p>");

    let response = site.get("post");

    assert!(response.body.contains(SHARE_BUTTONS));
    assert!(!response.body.contains("fb-comments"));
}

#[test]
fn test_falsy_flags_inject_nothing() {
    let site = helpers::TestSite::new();
    site.page(
        "post",
        "Title = \"Post\"\nFB-Comments = false\nShare-Buttons = \"0\"",
        "<p>Body</p>",
    );

    let response = site.get("post");

    assert!(!response.body.contains("fb-comments"));
    assert!(!response.body.contains("fb-root"));
    assert!(!response.body.contains("jiathis"));
}

#[test]
fn test_flag_labels_are_case_insensitive() {
    let site = helpers::TestSite::new();
    site.page("post", "title = \"Post\"\nfb-comments = 1", "<p>Body</p>");

    let response = site.get("post");

    assert!(response.body.contains("<title>Post | Example</title>"));
    assert!(response.body.contains("fb-comments"));
}

#[test]
fn test_state_does_not_leak_between_requests() {
    let site = helpers::TestSite::new();
    site.page("with", "Title = \"With\"\nFB-Comments = true", "<p>a</p>");
    site.page("without", r#"Title = "Without""#, "<p>b</p>");

    let app = site.app();
    let first = helpers::TestResponse::from(app.render("with").expect("render"));
    let second = helpers::TestResponse::from(app.render("without").expect("render"));

    assert!(first.body.contains("fb-comments"));
    assert!(!second.body.contains("fb-comments"));
    assert!(!second.body.contains("fb-root"));
}

#[test]
fn test_template_variables() {
    let site = helpers::TestSite::new();
    site.template(
        "<html><head></head><body>{{ current_url }}|{{ base_url }}|{{ meta.title }}|{{ content }}</body></html>",
    );
    site.page("docs/intro", r#"Title = "Intro""#, "<p>x</p>");

    let response = site.get("docs/intro");

    assert!(
        response
            .body
            .contains("https://x.com/docs/intro|https://x.com|Intro|<p>x</p>")
    );
}

#[test]
fn test_anchorless_template_is_left_alone() {
    let site = helpers::TestSite::new();
    site.template("{{ content }}");
    site.page("post", "FB-Comments = true", "<p>plain</p>");

    let response = site.get("post");

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, "<p>plain</p>");
}

#[test]
fn test_disabled_plugins_leave_page_untouched() {
    let site = helpers::TestSite::new();
    site.page("post", "FB-Comments = true\nShare-Buttons = true", "<p>Body</p>");

    let app = pagehook::App::new({
        let mut config = site.config();
        config.plugins = Default::default();
        config
    })
    .expect("app");
    let response = helpers::TestResponse::from(app.render("post").expect("render"));

    assert!(!response.body.contains("fb-comments"));
    assert!(!response.body.contains("jiathis"));
    assert!(response.og_tags().is_empty());
}
