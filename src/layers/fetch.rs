use reqwest::Client;
use thiserror::Error;
use url::Url;

use crate::layers::ArticlePage;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("request timeout")]
    Timeout,

    #[error("too many redirects")]
    Redirect,

    #[error("request failed: {0}")]
    Request(String),

    #[error("failed to read body: {0}")]
    Body(String),
}

impl FetchError {
    pub fn from_reqwest_error(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_redirect() {
            Self::Redirect
        } else {
            Self::Request(err.to_string())
        }
    }
}

pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    /// The client carries the user agent and timeout; see [`crate::config::Config::http_client`].
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// GET the page and return its text along with the post-redirect URL.
    ///
    /// The status code is not inspected: an error page is still handed to the
    /// extractor, which will usually find nothing in it.
    pub async fn fetch(&self, url: &str) -> Result<ArticlePage, FetchError> {
        let parsed = Url::parse(url)?;

        tracing::debug!("Fetching page: {}", parsed);
        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(FetchError::from_reqwest_error)?;

        let base_url = response.url().clone();
        if base_url.as_str() != url {
            tracing::debug!("Redirected to: {}", base_url);
        }

        let html = response.text().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout
            } else {
                FetchError::Body(e.to_string())
            }
        })?;

        Ok(ArticlePage { html, base_url })
    }
}
