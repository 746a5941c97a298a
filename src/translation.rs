use crate::config::Config;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// HTML entity the translation API sometimes emits for apostrophes
const HTML_APOSTROPHE: &str = "&#39;";

/// Translation API (Google Translate v2) request body
#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'static str,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    data: TranslateData,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranslateData {
    translations: Vec<TranslatedText>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranslatedText {
    translated_text: String,
}

/// Translate `text` from one API language code to another.
///
/// Returns the first translation in the response. The text is sent as HTML so
/// markup in descriptions survives, which means the output can carry HTML
/// entities. The credential goes in the `X-Goog-Api-Key` header so it never
/// shows up in a logged URL.
pub async fn translate_text(
    client: &reqwest::Client,
    config: &Config,
    source: &str,
    target: &str,
    text: &str,
) -> Result<String> {
    let request = TranslateRequest {
        q: text,
        source,
        target,
        format: "html",
    };

    let response = client
        .post(&config.translate_api_url)
        .header("X-Goog-Api-Key", &config.translate_api_key)
        .json(&request)
        .send()
        .await
        .context("Failed to send request to translation API")?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|e| format!("<failed to read body: {}>", e));
        anyhow::bail!(
            "Translation API error ({} -> {}, {}): {}",
            source,
            target,
            status,
            body
        );
    }

    let translate_response: TranslateResponse = response
        .json()
        .await
        .context("Failed to parse translation API response")?;

    translate_response
        .data
        .translations
        .into_iter()
        .next()
        .map(|t| t.translated_text)
        .context("Translation API response contained no translations")
}

/// Replace the numeric HTML apostrophe entity in French output
pub fn fix_french_apostrophes(text: &str) -> String {
    text.replace(HTML_APOSTROPHE, "'")
}
