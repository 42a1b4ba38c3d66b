use paper_fetch::layers::fetch::{FetchError, PageFetcher};
use reqwest::Client;
use std::time::Duration;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

#[tokio::test]
async fn test_fetch_follows_redirect_and_reports_final_url() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/doi/old"))
        .respond_with(
            ResponseTemplate::new(301)
                .insert_header("location", format!("{}/articles/new", mock_server.uri()).as_str()),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/articles/new"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(r#"<a href="paper.pdf">PDF</a>"#, "text/html"),
        )
        .mount(&mock_server)
        .await;

    let fetcher = PageFetcher::new(Client::new());
    let page = fetcher
        .fetch(&format!("{}/doi/old", mock_server.uri()))
        .await
        .unwrap();

    assert!(page.base_url.as_str().ends_with("/articles/new"));
    let found = paper_fetch::layers::extract::extract(&page);
    assert_eq!(
        found.pdf_url.unwrap().as_str(),
        format!("{}/articles/paper.pdf", mock_server.uri())
    );
}

#[tokio::test]
async fn test_fetch_returns_body_of_error_pages() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/gone"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not here"))
        .mount(&mock_server)
        .await;

    let fetcher = PageFetcher::new(Client::new());
    let page = fetcher
        .fetch(&format!("{}/gone", mock_server.uri()))
        .await
        .unwrap();

    assert_eq!(page.html, "not here");
}

#[tokio::test]
async fn test_fetch_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
        .mount(&mock_server)
        .await;

    let client = Client::builder()
        .timeout(Duration::from_millis(200))
        .build()
        .unwrap();
    let result = PageFetcher::new(client)
        .fetch(&format!("{}/slow", mock_server.uri()))
        .await;

    match result {
        Err(FetchError::Timeout) => {}
        other => panic!("Expected timeout, got {:?}", other.map(|p| p.base_url)),
    }
}

#[tokio::test]
async fn test_fetch_sends_configured_user_agent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ua"))
        .and(wiremock::matchers::header("user-agent", "Mozilla/5.0"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = paper_fetch::Config::with_save_folder("unused")
        .http_client()
        .unwrap();
    let page = PageFetcher::new(client)
        .fetch(&format!("{}/ua", mock_server.uri()))
        .await
        .unwrap();
    assert_eq!(page.html, "ok");
}
