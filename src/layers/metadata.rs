use anyhow::{anyhow, Context, Result};
use governor::clock::DefaultClock;
use governor::state::{direct::NotKeyed, InMemoryState};
use governor::{Quota, RateLimiter};
use nonzero_ext::nonzero;
use reqwest::Client;
use serde::Deserialize;
use std::sync::Arc;

use crate::layers::PaperMetadata;

// Crossref works API data structures
#[derive(Deserialize)]
struct CrossrefResponse {
    message: CrossrefWork,
}

#[derive(Deserialize)]
struct CrossrefWork {
    issued: Option<CrossrefDate>,
    #[serde(default)]
    author: Vec<CrossrefAuthor>,
    #[serde(rename = "short-container-title", default)]
    short_container_title: Vec<String>,
    #[serde(rename = "container-title", default)]
    container_title: Vec<String>,
    #[serde(default)]
    title: Vec<String>,
}

#[derive(Deserialize)]
struct CrossrefAuthor {
    family: Option<String>,
}

#[derive(Deserialize)]
struct CrossrefDate {
    /// `[[year, month, day]]`, later parts optional; Crossref sends `[[null]]` for unknown dates.
    #[serde(rename = "date-parts")]
    date_parts: Vec<Vec<Option<i32>>>,
}

impl CrossrefWork {
    fn into_metadata(self) -> Result<PaperMetadata> {
        let year = self
            .issued
            .as_ref()
            .and_then(|d| d.date_parts.first())
            .and_then(|parts| parts.first().copied().flatten())
            .ok_or_else(|| anyhow!("Crossref record has no issued year"))?;

        let first_author = self
            .author
            .into_iter()
            .next()
            .ok_or_else(|| anyhow!("Crossref record has no authors"))?
            .family
            .ok_or_else(|| anyhow!("First author has no family name"))?;

        // Prefer the abbreviated journal name when Crossref has one.
        let journal = self
            .short_container_title
            .into_iter()
            .next()
            .or_else(|| self.container_title.into_iter().next())
            .ok_or_else(|| anyhow!("Crossref record has no container title"))?;

        let title = self
            .title
            .into_iter()
            .next()
            .ok_or_else(|| anyhow!("Crossref record has no title"))?;

        Ok(PaperMetadata {
            year,
            first_author,
            journal,
            title,
        })
    }
}

pub const DEFAULT_CROSSREF_URL: &str = "https://api.crossref.org";

pub struct CrossrefClient {
    client: Client,
    base_url: String,
    mailto: Option<String>,
    limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
}

impl CrossrefClient {
    pub fn new(client: Client, base_url: impl Into<String>, mailto: Option<String>) -> Self {
        // Crossref's public pool tolerates roughly 50 requests per second; stay well under.
        let quota = Quota::per_second(nonzero!(10u32));

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            mailto,
            limiter: Arc::new(RateLimiter::direct(quota)),
        }
    }

    pub async fn lookup(&self, doi: &str) -> Result<PaperMetadata> {
        self.limiter.until_ready().await;

        let mut url = format!("{}/works/{}", self.base_url, doi);
        if let Some(email) = &self.mailto {
            url.push_str(&format!("?mailto={}", urlencoding::encode(email)));
        }

        tracing::info!("Querying Crossref: {}", url);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| anyhow!("Crossref request failed: {}", e))?;

        if !resp.status().is_success() {
            return Err(anyhow!("Crossref API error for {}: {}", doi, resp.status()));
        }

        let body: CrossrefResponse = resp
            .json()
            .await
            .with_context(|| format!("Malformed Crossref response for {}", doi))?;

        body.message
            .into_metadata()
            .with_context(|| format!("Incomplete Crossref metadata for {}", doi))
    }
}
