//! Runtime configuration.
//!
//! Values come from command-line flags, falling back to environment
//! variables (a `.env` file is loaded first by `main`) and then to defaults.
//! The list of article pages is not configurable; it lives in `main`.

use anyhow::{Context, Result};
use clap::Parser;
use reqwest::Client;
use std::path::PathBuf;
use std::time::Duration;

use crate::layers::metadata::DEFAULT_CROSSREF_URL;
use crate::layers::translate::DEFAULT_TRANSLATE_URL;

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

#[derive(Debug, Parser)]
#[command(name = "paper-fetch", version, about = "Download article PDFs named from their Crossref metadata")]
pub struct Cli {
    /// Folder the PDFs are written to (created if missing).
    #[arg(long, env = "SAVE_FOLDER", default_value = "downloads")]
    pub save_folder: PathBuf,

    /// Per-request timeout in seconds.
    #[arg(long, env = "HTTP_TIMEOUT_SECS", default_value_t = 20)]
    pub timeout_secs: u64,

    /// Pause between article pages, in milliseconds.
    #[arg(long, env = "PAUSE_MS", default_value_t = 1000)]
    pub pause_ms: u64,

    #[arg(long, env = "HTTP_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    #[arg(long, env = "CROSSREF_URL", default_value = DEFAULT_CROSSREF_URL)]
    pub crossref_url: String,

    /// Contact address sent to Crossref for its polite pool.
    #[arg(long, env = "CROSSREF_MAILTO")]
    pub crossref_mailto: Option<String>,

    #[arg(long, env = "TRANSLATE_URL", default_value = DEFAULT_TRANSLATE_URL)]
    pub translate_url: String,

    #[arg(long, env = "SOURCE_LANG", default_value = "en")]
    pub source_lang: String,

    #[arg(long, env = "TARGET_LANG", default_value = "zh-CN")]
    pub target_lang: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub save_folder: PathBuf,
    pub timeout: Duration,
    pub pause: Duration,
    pub user_agent: String,
    pub crossref_url: String,
    pub crossref_mailto: Option<String>,
    pub translate_url: String,
    pub source_lang: String,
    pub target_lang: String,
}

impl Config {
    /// Defaults with the given output folder; handy for tests.
    pub fn with_save_folder(save_folder: impl Into<PathBuf>) -> Self {
        Self {
            save_folder: save_folder.into(),
            timeout: Duration::from_secs(20),
            pause: Duration::from_secs(1),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            crossref_url: DEFAULT_CROSSREF_URL.to_string(),
            crossref_mailto: None,
            translate_url: DEFAULT_TRANSLATE_URL.to_string(),
            source_lang: "en".to_string(),
            target_lang: "zh-CN".to_string(),
        }
    }

    /// Shared HTTP client: browser-like user agent, with the timeout bounding
    /// the connect and each read rather than the whole transfer.
    pub fn http_client(&self) -> Result<Client> {
        Client::builder()
            .user_agent(&self.user_agent)
            .connect_timeout(self.timeout)
            .read_timeout(self.timeout)
            .build()
            .context("build HTTP client")
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            save_folder: cli.save_folder,
            timeout: Duration::from_secs(cli.timeout_secs),
            pause: Duration::from_millis(cli.pause_ms),
            user_agent: cli.user_agent,
            crossref_url: cli.crossref_url,
            crossref_mailto: cli.crossref_mailto.filter(|m| !m.trim().is_empty()),
            translate_url: cli.translate_url,
            source_lang: cli.source_lang,
            target_lang: cli.target_lang,
        }
    }
}
