use anyhow::{Context, Result};
use std::path::PathBuf;
use std::time::Duration;

use crate::config::Config;
use crate::layers::download::{DownloadOutcome, Downloader};
use crate::layers::extract::extract;
use crate::layers::fetch::PageFetcher;
use crate::layers::filename::compose_filename;
use crate::layers::metadata::CrossrefClient;
use crate::layers::translate::Translator;
use crate::layers::UrlOutcome;

/// Per-run tally, one entry per input URL in input order.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub outcomes: Vec<(String, UrlOutcome)>,
}

impl RunSummary {
    pub fn saved(&self) -> usize {
        self.outcomes.iter().filter(|(_, o)| o.is_saved()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.iter().filter(|(_, o)| o.is_failure()).count()
    }

    pub fn skipped(&self) -> usize {
        self.outcomes.len() - self.saved() - self.failed()
    }
}

pub struct Pipeline {
    fetcher: PageFetcher,
    crossref: CrossrefClient,
    translator: Translator,
    downloader: Downloader,
    pause: Duration,
}

impl Pipeline {
    pub fn new(config: &Config) -> Result<Self> {
        let client = config.http_client()?;

        Ok(Self::from_parts(
            PageFetcher::new(client.clone()),
            CrossrefClient::new(
                client.clone(),
                config.crossref_url.clone(),
                config.crossref_mailto.clone(),
            ),
            Translator::new(
                client.clone(),
                config.translate_url.clone(),
                config.source_lang.clone(),
                config.target_lang.clone(),
            ),
            Downloader::new(client, config.save_folder.clone()),
            config.pause,
        ))
    }

    pub fn from_parts(
        fetcher: PageFetcher,
        crossref: CrossrefClient,
        translator: Translator,
        downloader: Downloader,
        pause: Duration,
    ) -> Self {
        Self {
            fetcher,
            crossref,
            translator,
            downloader,
            pause,
        }
    }

    /// Create the output folder. Safe to call more than once.
    pub async fn prepare(&self) -> Result<PathBuf> {
        let dir = self.downloader.base_dir().to_path_buf();
        tokio::fs::create_dir_all(&dir)
            .await
            .with_context(|| format!("create save folder {}", dir.display()))?;
        Ok(dir)
    }

    /// Run one article page through every stage. Errors from fetching or
    /// metadata lookup are returned; missing DOI/PDF and download problems
    /// are reported as outcomes.
    pub async fn process_url(&self, url: &str) -> Result<UrlOutcome> {
        let page = self
            .fetcher
            .fetch(url)
            .await
            .with_context(|| format!("fetch {}", url))?;

        let found = extract(&page);

        let Some(doi) = found.doi else {
            tracing::warn!("❌ No DOI found on page, cannot look up metadata. Skipping.");
            return Ok(UrlOutcome::NoDoi);
        };
        tracing::info!("Found DOI: {}", doi);

        let meta = self.crossref.lookup(&doi).await?;
        let title = self.translator.translate_or_original(&meta.title).await;
        let filename = compose_filename(&meta, &title);
        tracing::debug!("Target filename: {}", filename);

        let Some(pdf_url) = found.pdf_url else {
            tracing::warn!("⚠️ No PDF link found on page, cannot download");
            return Ok(UrlOutcome::NoPdfLink { filename });
        };

        Ok(match self.downloader.download_pdf(&pdf_url, &filename).await {
            DownloadOutcome::Saved(path) => UrlOutcome::Saved(path),
            DownloadOutcome::NotPdf { content_type } => UrlOutcome::NotPdf { content_type },
            DownloadOutcome::Failed(reason) => UrlOutcome::DownloadFailed(reason),
        })
    }

    /// Process every URL in order. A failure on one URL never stops the batch.
    pub async fn run<S: AsRef<str>>(&self, urls: &[S]) -> RunSummary {
        let mut summary = RunSummary::default();

        for (i, url) in urls.iter().enumerate() {
            let url = url.as_ref();
            if i > 0 && !self.pause.is_zero() {
                tokio::time::sleep(self.pause).await;
            }

            tracing::info!("📘 Processing page: {}", url);
            let outcome = match self.process_url(url).await {
                Ok(outcome) => outcome,
                Err(e) => {
                    tracing::error!("❌ Page processing failed: {:#}", e);
                    UrlOutcome::Failed(format!("{:#}", e))
                }
            };
            summary.outcomes.push((url.to_string(), outcome));
        }

        summary
    }
}
