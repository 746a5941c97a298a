use anyhow::{Context, Result};
use std::path::PathBuf;

/// Environment variable holding the translation API key unless overridden
pub const DEFAULT_API_KEY_VAR: &str = "GOOGLE_TRANSLATE_API_KEY";

#[derive(Debug, Clone)]
pub struct Config {
    // Input / output
    pub manifest_path: PathBuf,
    pub output_dir: PathBuf,
    pub no_description_log: PathBuf,

    // Content API
    pub content_api_base_url: String,

    // Translation API
    pub translate_api_url: String,
    pub translate_api_key: String,

    // Worker pool
    pub pool_size: usize,
    pub request_timeout_secs: u64,
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// `api_key_var` names the variable the translation credential is read from.
    /// Every other field falls back to a default when its variable is unset.
    pub fn from_env(api_key_var: &str) -> Result<Self> {
        let translate_api_key = std::env::var(api_key_var)
            .with_context(|| format!("{} not set", api_key_var))?;
        if translate_api_key.trim().is_empty() {
            anyhow::bail!("{} is empty", api_key_var);
        }

        Ok(Self {
            manifest_path: std::env::var("MANIFEST_PATH")
                .unwrap_or_else(|_| "all-langs-zumata-id.txt".to_string())
                .into(),
            output_dir: std::env::var("OUTPUT_DIR")
                .unwrap_or_else(|_| "txt_files".to_string())
                .into(),
            no_description_log: std::env::var("NO_DESCRIPTION_LOG")
                .unwrap_or_else(|_| "empty_hotel_descriptions.txt".to_string())
                .into(),

            content_api_base_url: std::env::var("CONTENT_API_BASE_URL")
                .unwrap_or_else(|_| "http://data.zumata.com/hotels".to_string()),

            translate_api_url: std::env::var("TRANSLATE_API_URL").unwrap_or_else(|_| {
                "https://translation.googleapis.com/language/translate/v2".to_string()
            }),
            translate_api_key,

            pool_size: std::env::var("POOL_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|&n: &usize| n > 0)
                .unwrap_or(200),
            request_timeout_secs: std::env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        })
    }

    /// URL of the long description for one hotel in one locale
    pub fn description_url(&self, hotel_id: &str, locale: &str) -> String {
        format!(
            "{}/{}/{}/long.json",
            self.content_api_base_url.trim_end_matches('/'),
            hotel_id,
            locale
        )
    }

    /// Path of the JSON artifact written for a hotel
    pub fn artifact_path(&self, hotel_id: &str) -> PathBuf {
        self.output_dir.join(format!("{}.json", hotel_id))
    }

    /// Build the shared HTTP client with per-request timeouts applied
    pub fn http_client(&self) -> Result<reqwest::Client> {
        reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(self.request_timeout_secs))
            .connect_timeout(std::time::Duration::from_secs(
                self.request_timeout_secs.min(10),
            ))
            .build()
            .context("Failed to build HTTP client")
    }
}
