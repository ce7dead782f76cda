//! Integration tests for collections index listing.

use svgrepo_downloader::{
    config::Config, download::list_collections, Error, SvgRepoClient,
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn index_page(slugs: &[&str], total_pages: u32) -> String {
    let mut html = String::from("<html><body>");
    for slug in slugs {
        html.push_str(&format!(
            r#"<div class="style_Collection__k1"><a href="/collection/{}/">{}</a></div>"#,
            slug, slug
        ));
    }
    html.push_str(&format!(
        r#"<div class="style_pagingCarrier__p2">Page 1 / {}</div></body></html>"#,
        total_pages
    ));
    html
}

#[tokio::test]
async fn test_list_collections_across_pages() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/collections/monocolor/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(index_page(&["one", "two"], 2)))
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/collections/monocolor/2"))
        .respond_with(ResponseTemplate::new(200).set_body_string(index_page(&["three"], 2)))
        .expect(1)
        .mount(&server)
        .await;

    let client = SvgRepoClient::new(&Config::default().http).unwrap();
    let mut out = Vec::new();
    let found = list_collections(&client, &server.uri(), "monocolor", &mut out)
        .await
        .expect("listing should succeed");

    let expected: Vec<String> = ["one", "two", "three"]
        .iter()
        .map(|slug| format!("{}/collection/{}/", server.uri(), slug))
        .collect();
    assert_eq!(found, expected);
    assert_eq!(String::from_utf8(out).unwrap(), format!("{}\n", expected.join("\n")));
}

#[tokio::test]
async fn test_list_collections_without_footer() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/collections/all/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html><body></body></html>"))
        .mount(&server)
        .await;

    let client = SvgRepoClient::new(&Config::default().http).unwrap();
    let err = list_collections(&client, &server.uri(), "all", &mut std::io::sink())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::PageCount { .. }));
}
