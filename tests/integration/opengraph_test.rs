//! Integration tests for OpenGraph tag injection.

mod helpers;

use http::StatusCode;

#[test]
fn test_tags_follow_fixed_order() {
    let site = helpers::TestSite::new();
    site.page(
        "blog/post1",
        "Title = \"Post\"\nDescription = \"About it\"",
        "<p>text</p>",
    );

    let response = site.get("blog/post1");

    let properties: Vec<String> = response.og_tags().into_iter().map(|(p, _)| p).collect();
    assert_eq!(
        properties,
        vec!["og:type", "og:title", "og:description", "og:url", "og:site_name"]
    );
    assert_eq!(response.og("og:title"), vec!["Post"]);
    assert_eq!(response.og("og:description"), vec!["About it"]);
    assert_eq!(response.og("og:url"), vec!["https://x.com/blog/post1"]);
    assert_eq!(response.og("og:site_name"), vec!["Example"]);
}

#[test]
fn test_tags_are_spliced_inside_head() {
    let site = helpers::TestSite::new();
    site.page("post", r#"Title = "Post""#, "");

    let response = site.get("post");

    let tag = response.body.find("og:type").expect("og tags");
    let head_close = response.body.find("</head>").expect("head close");
    assert!(tag < head_close);
}

#[test]
fn test_home_page_is_website() {
    let site = helpers::TestSite::new();
    site.page("index", r#"Title = "Home""#, "");

    let response = site.get("");

    assert_eq!(response.og("og:type"), vec!["website"]);
    assert_eq!(response.og("og:url"), vec!["https://x.com/"]);
}

#[test]
fn test_other_pages_are_articles() {
    let site = helpers::TestSite::new();
    site.page("about", r#"Title = "About""#, "");

    assert_eq!(site.get("about").og("og:type"), vec!["article"]);
}

#[test]
fn test_explicit_image_uses_page_path_prefix() {
    let site = helpers::TestSite::new();
    site.page(
        "blog/post1",
        "Title = \"Post\"\nImage = \"pic.jpg\"",
        r#"<img src="ignored.png">"#,
    );

    let response = site.get("blog/post1");

    // Relative references are appended to the page path without a separator.
    assert_eq!(
        response.og("og:image"),
        vec!["https://x.com/blog/post1pic.jpg"]
    );
}

#[test]
fn test_body_images_then_default_image() {
    let site = helpers::TestSite::new().with_default_image("d.png");
    site.page(
        "gallery",
        r#"Title = "Gallery""#,
        r#"<p><img src="a.png"> and <IMG class="x" src="http://cdn/b.png"></p>"#,
    );

    let response = site.get("gallery");

    assert_eq!(
        response.og("og:image"),
        vec!["https://x.com/gallerya.png", "http://cdn/b.png", "d.png"]
    );
}

#[test]
fn test_root_relative_image() {
    let site = helpers::TestSite::new();
    site.page("post", "Image = \"/assets/p.png\"", "");

    assert_eq!(
        site.get("post").og("og:image"),
        vec!["https://x.com/assets/p.png"]
    );
}

#[test]
fn test_image_without_src_is_skipped() {
    let site = helpers::TestSite::new();
    site.page("post", "", r#"<img alt="no source"><img src="https://cdn/x.png">"#);

    assert_eq!(site.get("post").og("og:image"), vec!["https://cdn/x.png"]);
}

#[test]
fn test_not_found_has_no_tags() {
    let site = helpers::TestSite::new().with_default_image("d.png");
    site.page(
        "404",
        "Title = \"Lost\"\nImage = \"lost.png\"",
        r#"<img src="a.png">"#,
    );

    let response = site.get("missing");

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(response.og_tags().is_empty());
    assert!(!response.body.contains("og:"));
}

#[test]
fn test_values_are_not_escaped() {
    let site = helpers::TestSite::new();
    site.page("post", r#"Title = "Fish & Chips""#, "");

    assert_eq!(site.get("post").og("og:title"), vec!["Fish & Chips"]);
}
