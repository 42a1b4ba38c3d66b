use anyhow::Result;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::path::{Path, PathBuf};
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    Saved(PathBuf),
    NotPdf { content_type: String },
    Failed(String),
}

impl DownloadOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, Self::Saved(_))
    }
}

pub struct Downloader {
    client: Client,
    base_dir: PathBuf,
}

impl Downloader {
    pub fn new(client: Client, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            client,
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Fetch `pdf_url` into `<base_dir>/<filename>`, replacing any existing file.
    ///
    /// Never returns an error: every failure is logged and reported through
    /// [`DownloadOutcome`].
    pub async fn download_pdf(&self, pdf_url: &Url, filename: &str) -> DownloadOutcome {
        match self.try_download(pdf_url, filename).await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!("❌ Download failed: {}, error: {:#}", pdf_url, e);
                DownloadOutcome::Failed(format!("{:#}", e))
            }
        }
    }

    async fn try_download(&self, pdf_url: &Url, filename: &str) -> Result<DownloadOutcome> {
        tracing::info!("Downloading PDF from: {}", pdf_url);
        let response = self.client.get(pdf_url.clone()).send().await?;

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|ct| ct.to_str().ok())
            .unwrap_or("")
            .to_string();

        if !content_type.contains("pdf") {
            tracing::warn!("⚠️ Not a PDF ({}): {}", content_type, pdf_url);
            return Ok(DownloadOutcome::NotPdf { content_type });
        }

        // The whole body must arrive before the target is touched, so a dropped
        // connection never truncates an existing file.
        let body = response.bytes().await?;
        let pdf_path = self.base_dir.join(filename);
        tokio::fs::write(&pdf_path, &body).await?;

        tracing::info!("✅ Saved: {}", pdf_path.display());
        Ok(DownloadOutcome::Saved(pdf_path))
    }
}
