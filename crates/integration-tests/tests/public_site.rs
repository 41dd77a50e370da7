//! Public site reads: typing, aggregation, and caching.

#![allow(clippy::unwrap_used)]

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use atelier_integration_tests::TestContext;

#[tokio::test]
async fn test_public_configurations_are_typed() {
    let ctx = TestContext::new().await;

    Mock::given(method("GET"))
        .and(path("/api/public/configurations/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "site_title": "Atelier Studio",
            "posts_per_page": 12.0,
            "maintenance_mode": false,
        })))
        .mount(&ctx.server)
        .await;

    let outcome = ctx.client.public().configurations().await;

    assert!(outcome.is_success());
    let map = outcome.into_data().unwrap();
    assert_eq!(map["site_title"], json!("Atelier Studio"));
    assert_eq!(map["posts_per_page"], json!(12.0));
    assert_eq!(map["maintenance_mode"], json!(false));
}

#[tokio::test]
async fn test_public_configurations_served_from_cache() {
    let ctx = TestContext::new().await;

    Mock::given(method("GET"))
        .and(path("/api/public/configurations/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"site_title": "Atelier Studio"})),
        )
        .expect(1)
        .mount(&ctx.server)
        .await;

    let first = ctx.client.public().configurations().await;
    let second = ctx.client.public().configurations().await;

    assert!(first.is_success());
    assert_eq!(first.into_data(), second.into_data());
    // expect(1) on the mock verifies the second read never hit the server
}

#[tokio::test]
async fn test_failed_public_read_is_not_cached() {
    let ctx = TestContext::new().await;

    Mock::given(method("GET"))
        .and(path("/api/public/configurations/"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .mount(&ctx.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/public/configurations/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"site_title": "Atelier Studio"})),
        )
        .mount(&ctx.server)
        .await;

    let first = ctx.client.public().configurations().await;
    assert!(!first.is_success());

    let second = ctx.client.public().configurations().await;
    assert!(second.is_success());
}

#[tokio::test]
async fn test_site_info_groups() {
    let ctx = TestContext::new().await;

    Mock::given(method("GET"))
        .and(path("/api/public/site-info/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "site": {"site_title": "Atelier Studio"},
            "seo": {"meta_description": "A marketing studio"},
            "social": {"instagram_url": "https://instagram.com/atelier"},
        })))
        .mount(&ctx.server)
        .await;

    let outcome = ctx.client.public().site_info().await;

    assert!(outcome.is_success());
    let info = outcome.into_data().unwrap();
    assert_eq!(info.site["site_title"], json!("Atelier Studio"));
    assert_eq!(info.seo["meta_description"], json!("A marketing studio"));
    assert_eq!(
        info.social["instagram_url"],
        json!("https://instagram.com/atelier")
    );
}
