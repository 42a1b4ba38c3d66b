use regex::Regex;
use scraper::{Html, Selector};
use std::sync::OnceLock;
use url::Url;

use crate::layers::{ArticlePage, Extraction};

fn doi_regex() -> &'static Regex {
    static DOI_RE: OnceLock<Regex> = OnceLock::new();
    DOI_RE.get_or_init(|| {
        Regex::new(r"(?i)10\.\d{4,9}/[-._;()/:A-Z0-9]+").expect("DOI pattern is valid")
    })
}

fn anchor_selector() -> &'static Selector {
    static ANCHOR: OnceLock<Selector> = OnceLock::new();
    ANCHOR.get_or_init(|| Selector::parse("a[href]").expect("anchor selector is valid"))
}

/// First DOI-shaped substring anywhere in the raw text.
pub fn extract_doi(text: &str) -> Option<String> {
    doi_regex().find(text).map(|m| m.as_str().to_string())
}

/// First anchor, in document order, whose href mentions `.pdf`, made absolute.
pub fn extract_pdf_url(html: &str, base_url: &Url) -> Option<Url> {
    let document = Html::parse_document(html);

    document
        .select(anchor_selector())
        .filter_map(|a| a.value().attr("href"))
        .filter(|href| href.to_lowercase().contains(".pdf"))
        .find_map(|href| match base_url.join(href) {
            Ok(url) => Some(url),
            Err(e) => {
                tracing::debug!("Skipping unresolvable PDF href {:?}: {}", href, e);
                None
            }
        })
}

pub fn extract(page: &ArticlePage) -> Extraction {
    Extraction {
        doi: extract_doi(&page.html),
        pdf_url: extract_pdf_url(&page.html, &page.base_url),
    }
}
