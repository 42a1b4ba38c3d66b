use anyhow::{anyhow, Result};
use reqwest::Client;
use serde_json::Value;

pub const DEFAULT_TRANSLATE_URL: &str = "https://translate.googleapis.com";

/// Client for the keyless Google translate endpoint (`client=gtx`).
pub struct Translator {
    client: Client,
    base_url: String,
    source_lang: String,
    target_lang: String,
}

impl Translator {
    pub fn new(
        client: Client,
        base_url: impl Into<String>,
        source_lang: impl Into<String>,
        target_lang: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            source_lang: source_lang.into(),
            target_lang: target_lang.into(),
        }
    }

    pub async fn translate(&self, text: &str) -> Result<String> {
        let url = format!(
            "{}/translate_a/single?client=gtx&sl={}&tl={}&dt=t&q={}",
            self.base_url,
            urlencoding::encode(&self.source_lang),
            urlencoding::encode(&self.target_lang),
            urlencoding::encode(text)
        );

        tracing::debug!("Requesting translation to {}", self.target_lang);
        let resp = self.client.get(&url).send().await?;
        if !resp.status().is_success() {
            return Err(anyhow!("Translation API error: {}", resp.status()));
        }

        let payload: Value = resp.json().await?;
        parse_translation(&payload)
    }

    /// Translate, or hand back the input untouched if anything goes wrong.
    pub async fn translate_or_original(&self, text: &str) -> String {
        match self.translate(text).await {
            Ok(translated) => translated,
            Err(e) => {
                tracing::warn!("⚠️ Translation failed, keeping original title: {}", e);
                text.to_string()
            }
        }
    }
}

/// The response is `[[["译文", "source", ...], ...], ...]`; segments are concatenated.
fn parse_translation(payload: &Value) -> Result<String> {
    let segments = payload
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| anyhow!("Unexpected translation payload shape"))?;

    let translated: String = segments
        .iter()
        .filter_map(|seg| seg.get(0).and_then(Value::as_str))
        .collect();

    if translated.trim().is_empty() {
        return Err(anyhow!("Translation payload contained no text"));
    }
    Ok(translated)
}
