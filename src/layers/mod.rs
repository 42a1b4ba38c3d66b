use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use url::Url;

/// One fetched article page: the raw body and the URL it resolved to.
#[derive(Debug, Clone)]
pub struct ArticlePage {
    pub html: String,
    pub base_url: Url,
}

/// Best-effort findings from a single page. Either field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub doi: Option<String>,
    pub pdf_url: Option<Url>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct PaperMetadata {
    pub year: i32,
    pub first_author: String,
    pub journal: String,
    pub title: String,
}

/// Where processing of one article URL ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlOutcome {
    Saved(PathBuf),
    NoDoi,
    NoPdfLink { filename: String },
    NotPdf { content_type: String },
    DownloadFailed(String),
    Failed(String),
}

impl UrlOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, Self::Saved(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::DownloadFailed(_) | Self::Failed(_))
    }
}

pub mod download;
pub mod extract;
pub mod fetch;
pub mod filename;
pub mod metadata;
pub mod pipeline;
pub mod translate;
