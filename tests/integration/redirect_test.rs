//! Integration tests for legacy link redirects.

mod helpers;

use http::StatusCode;

const TABLE: &str = r#"
[redirects]
"old/a" = "new/a"
"blank" = ""
"#;

#[test]
fn test_known_old_link_redirects() {
    let site = helpers::TestSite::new();
    site.redirects(TABLE);

    let response = site.get("old/a");

    assert_eq!(response.status, StatusCode::MOVED_PERMANENTLY);
    assert_eq!(response.location.as_deref(), Some("/new/a"));
    assert!(response.body.is_empty());
}

#[test]
fn test_unknown_old_link_falls_through_to_not_found() {
    let site = helpers::TestSite::new();
    site.redirects(TABLE);

    let response = site.get("old/b");

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(response.location.is_none());
}

#[test]
fn test_redirect_wins_over_custom_not_found_page() {
    let site = helpers::TestSite::new();
    site.redirects(TABLE);
    site.page("404", r#"Title = "Lost""#, "<p>Nothing here</p>");

    let response = site.get("old/a");

    assert_eq!(response.status, StatusCode::MOVED_PERMANENTLY);
    assert!(!response.body.contains("Nothing here"));
}

#[test]
fn test_existing_page_is_never_redirected() {
    let site = helpers::TestSite::new();
    site.redirects(TABLE);
    site.page("old/a", r#"Title = "Still here""#, "<p>kept</p>");

    let response = site.get("old/a");

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("<p>kept</p>"));
}

#[test]
fn test_empty_target_is_not_a_redirect() {
    let site = helpers::TestSite::new();
    site.redirects(TABLE);

    let response = site.get("blank");

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[test]
fn test_missing_table_degrades_to_not_found() {
    let site = helpers::TestSite::new();

    let response = site.get("old/a");

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[test]
fn test_malformed_table_degrades_to_not_found() {
    let site = helpers::TestSite::new();
    site.redirects("[redirects\n\"old/a\" = ");

    let response = site.get("old/a");

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[test]
fn test_table_is_read_per_request() {
    let site = helpers::TestSite::new();
    let app = site.app();

    let before = helpers::TestResponse::from(app.render("old/a").expect("render"));
    site.redirects(TABLE);
    let after = helpers::TestResponse::from(app.render("old/a").expect("render"));

    assert_eq!(before.status, StatusCode::NOT_FOUND);
    assert_eq!(after.status, StatusCode::MOVED_PERMANENTLY);
}

#[test]
fn test_redirect_suppresses_later_plugins() {
    let site = helpers::TestSite::new();
    site.redirects(TABLE);

    let response = site.get("old/a");

    assert!(response.og_tags().is_empty());
    assert!(!response.body.contains("fb-root"));
}
