use crate::config::Config;
use crate::i18n::PREFERRED_SOURCE_LOCALE;
use crate::no_description_log::NoDescriptionLog;
use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, info, warn};

/// Body of `{base_url}/{hotel_id}/{locale}/long.json`
#[derive(Debug, Deserialize)]
struct LongDescriptionResponse {
    description: String,
}

/// A non-empty description and the locale it was fetched in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Description {
    pub locale: String,
    pub text: String,
}

/// Pick the locale to fetch a hotel's source description in.
///
/// `en-US` wins wherever it appears. Otherwise the last active locale that is
/// also in `supported_locales` wins, and the first active locale is the
/// fallback when none are supported. Returns `None` only for an empty list.
pub fn select_locale<'a>(
    active_locales: &'a [String],
    supported_locales: &[&str],
) -> Option<&'a str> {
    let mut selected = active_locales.first()?.as_str();

    for code in active_locales {
        if code == PREFERRED_SOURCE_LOCALE {
            return Some(code.as_str());
        }
        if supported_locales.contains(&code.as_str()) {
            selected = code.as_str();
        }
    }

    Some(selected)
}

/// Fetch the long description for one hotel in one locale, trimmed
pub async fn fetch_long_description(
    client: &reqwest::Client,
    config: &Config,
    hotel_id: &str,
    locale: &str,
) -> Result<String> {
    let url = config.description_url(hotel_id, locale);

    let response = client
        .get(&url)
        .send()
        .await
        .with_context(|| format!("Failed to fetch {}", url))?;

    if !response.status().is_success() {
        anyhow::bail!("Content API error ({}) for {}", response.status(), url);
    }

    let body: LongDescriptionResponse = response
        .json()
        .await
        .with_context(|| format!("Failed to parse description from {}", url))?;

    Ok(body.description.trim().to_string())
}

/// Fetch a hotel's source description, falling back through its active locales.
///
/// Each attempt selects a locale from the remaining candidates. An empty
/// description or a failed fetch drops that locale and tries again, so at most
/// `active_locales.len()` requests are made. When every candidate is exhausted
/// the hotel is recorded in the no-description log and `None` is returned.
pub async fn fetch_description(
    client: &reqwest::Client,
    config: &Config,
    hotel_id: &str,
    active_locales: &[String],
    supported_locales: &[&str],
    no_description_log: &NoDescriptionLog,
) -> Result<Option<Description>> {
    let mut candidates = active_locales.to_vec();

    while let Some(locale) = select_locale(&candidates, supported_locales).map(str::to_string) {
        match fetch_long_description(client, config, hotel_id, &locale).await {
            Ok(text) if !text.is_empty() => {
                debug!("{}: using {} description", hotel_id, locale);
                return Ok(Some(Description { locale, text }));
            }
            Ok(_) => debug!("{}: empty description in {}", hotel_id, locale),
            Err(e) => warn!("{}: {:#}", hotel_id, e),
        }

        candidates.retain(|c| *c != locale);
    }

    info!("{}: no description in any active locale", hotel_id);
    no_description_log.record(hotel_id).await?;

    Ok(None)
}
