#![allow(dead_code)]

use paper_fetch::Config;
use serde_json::json;
use std::path::Path;
use std::time::Duration;
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

pub const DOI: &str = "10.1038/s41524-025-01675-6";

/// Config pointing every external service at the mock server and writing into `dir`.
pub fn test_config(server: &MockServer, dir: &Path) -> Config {
    let mut config = Config::with_save_folder(dir);
    config.crossref_url = server.uri();
    config.translate_url = server.uri();
    config.pause = Duration::ZERO;
    config
}

pub fn article_html(doi: Option<&str>, pdf_href: Option<&str>) -> String {
    let meta = doi
        .map(|d| format!(r#"<meta name="citation_doi" content="{}">"#, d))
        .unwrap_or_default();
    let link = pdf_href
        .map(|h| format!(r#"<a href="{}">Download PDF</a>"#, h))
        .unwrap_or_default();
    format!(
        r#"<html><head>{}</head><body><a href="/">Home</a><p>Article body</p>{}</body></html>"#,
        meta, link
    )
}

pub async fn mount_page(server: &MockServer, route: &str, html: String) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_raw(html, "text/html; charset=utf-8"))
        .mount(server)
        .await;
}

pub async fn mount_crossref(server: &MockServer, doi: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/works/{}", doi)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "ok",
            "message-type": "work",
            "message": {
                "DOI": doi,
                "issued": { "date-parts": [[2025, 6, 3]] },
                "author": [
                    { "given": "Jane", "family": "Smith", "sequence": "first" },
                    { "given": "Li", "family": "Wang", "sequence": "additional" }
                ],
                "short-container-title": ["npj Comput. Mater."],
                "container-title": ["npj Computational Materials"],
                "title": ["Example Title"]
            }
        })))
        .mount(server)
        .await;
}

pub async fn mount_translation(server: &MockServer, source: &str, translated: &str) {
    Mock::given(method("GET"))
        .and(path("/translate_a/single"))
        .and(query_param("q", source))
        .and(query_param("tl", "zh-CN"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            [[translated, source, null, null, 10]],
            null,
            "en"
        ])))
        .mount(server)
        .await;
}

pub async fn mount_pdf(server: &MockServer, route: &str, body: &[u8], content_type: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body.to_vec(), content_type))
        .mount(server)
        .await;
}

pub fn files_in(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
