//! Per-hotel translation units and the bounded pool that runs them.
//!
//! A unit fetches one hotel's source description, translates it once per
//! missing API language code, copies translations across aliased locales and
//! writes a JSON artifact. Units share nothing but the HTTP client and the
//! no-description log, and a failing unit never stops its siblings.

use crate::config::Config;
use crate::description::{fetch_description, Description};
use crate::i18n::{api_language_code, complement, is_french, SUPPORTED_LOCALES};
use crate::manifest::HotelRecord;
use crate::no_description_log::NoDescriptionLog;
use crate::translation::{fix_french_apostrophes, translate_text};
use anyhow::{Context, Result};
use futures::stream::{self, StreamExt};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, error, info};

/// Translations produced for one hotel. This is what gets written to disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TranslationResult {
    /// Locales that received a translation, in supported-locale order
    #[serde(rename = "Translated_Languages")]
    pub translated_locales: Vec<String>,

    /// API language codes requested, one per translation API call
    #[serde(rename = "Translated_Languages_Google_Codes")]
    pub api_codes: Vec<String>,

    #[serde(rename = "Translated_Descriptions")]
    pub descriptions: BTreeMap<String, String>,
}

impl TranslationResult {
    pub fn is_empty(&self) -> bool {
        self.translated_locales.is_empty()
    }
}

/// One translation API call to make for a hotel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranslationTarget {
    pub locale: &'static str,
    pub api_code: &'static str,
}

/// The API calls needed to cover a hotel's missing locales
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationPlan {
    pub source_code: &'static str,
    pub targets: Vec<TranslationTarget>,
}

/// Work out which locales need a translation API call.
///
/// A supported locale is skipped when it is already active, when it shares the
/// source's API code, or when an earlier locale already claimed its API code.
/// Each API code therefore appears at most once in the plan.
pub fn plan_translations(
    supported_locales: &[&'static str],
    active_locales: &[String],
    source_locale: &str,
) -> Result<TranslationPlan> {
    let source_code = api_language_code(source_locale).with_context(|| {
        format!("No translation API code for source locale {}", source_locale)
    })?;

    let mut targets: Vec<TranslationTarget> = Vec::new();

    for &locale in supported_locales {
        if active_locales.iter().any(|a| a == locale) {
            continue;
        }
        let Some(api_code) = api_language_code(locale) else {
            continue;
        };
        if api_code == source_code || targets.iter().any(|t| t.api_code == api_code) {
            continue;
        }
        targets.push(TranslationTarget { locale, api_code });
    }

    Ok(TranslationPlan {
        source_code,
        targets,
    })
}

/// Copy translations into aliased locales that were not translated directly.
///
/// A missing, non-active locale whose API code was already requested takes the
/// text of its complement. Afterwards `translated_locales` lists every filled
/// locale in supported-locale order.
pub fn propagate_aliases(
    result: &mut TranslationResult,
    supported_locales: &[&'static str],
    active_locales: &[String],
) {
    for &locale in supported_locales {
        if result.descriptions.contains_key(locale) || active_locales.iter().any(|a| a == locale)
        {
            continue;
        }
        let Some(api_code) = api_language_code(locale) else {
            continue;
        };
        if !result.api_codes.iter().any(|c| c == api_code) {
            continue;
        }

        let sibling = complement(locale);
        if api_language_code(sibling) != Some(api_code) {
            continue;
        }
        if let Some(text) = result.descriptions.get(sibling).cloned() {
            result.descriptions.insert(locale.to_string(), text);
        }
    }

    result.translated_locales = supported_locales
        .iter()
        .filter(|l| result.descriptions.contains_key(**l))
        .map(|l| l.to_string())
        .collect();
}

/// Translate a hotel's description into every supported locale it lacks
pub async fn translate_description(
    client: &reqwest::Client,
    config: &Config,
    supported_locales: &[&'static str],
    active_locales: &[String],
    description: &Description,
) -> Result<TranslationResult> {
    let mut result = TranslationResult::default();
    if description.text.is_empty() {
        return Ok(result);
    }

    let plan = plan_translations(supported_locales, active_locales, &description.locale)?;

    for target in &plan.targets {
        let translated = translate_text(
            client,
            config,
            plan.source_code,
            target.api_code,
            &description.text,
        )
        .await
        .with_context(|| format!("Failed to translate into {}", target.locale))?;

        let translated = if is_french(target.locale) {
            fix_french_apostrophes(&translated)
        } else {
            translated
        };

        result
            .descriptions
            .insert(target.locale.to_string(), translated);
        result.api_codes.push(target.api_code.to_string());
    }

    propagate_aliases(&mut result, supported_locales, active_locales);

    Ok(result)
}

/// Write a hotel's translations to `{output_dir}/{hotel_id}.json`
pub async fn write_artifact(
    config: &Config,
    hotel_id: &str,
    result: &TranslationResult,
) -> Result<()> {
    let path = config.artifact_path(hotel_id);
    let json = serde_json::to_string(result).context("Failed to serialize translations")?;

    tokio::fs::write(&path, json)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))
}

/// How a single hotel's unit of work ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotelOutcome {
    /// Artifact written with this many translated locales
    Written { translated: usize },
    /// Every supported locale was already covered
    NothingToTranslate,
    /// No active locale had a non-empty description
    NoDescription,
    /// Recording the hotel in the no-description log failed
    DescriptionFailed,
    TranslationFailed,
    WriteFailed,
}

/// Run the full unit of work for one hotel.
///
/// Errors are logged here and turned into an outcome so the pool keeps going.
pub async fn process_hotel(
    client: &reqwest::Client,
    config: &Config,
    no_description_log: &NoDescriptionLog,
    record: &HotelRecord,
) -> HotelOutcome {
    let hotel_id = record.hotel_id.as_str();

    let description = match fetch_description(
        client,
        config,
        hotel_id,
        &record.active_locales,
        &SUPPORTED_LOCALES,
        no_description_log,
    )
    .await
    {
        Ok(Some(description)) => description,
        Ok(None) => return HotelOutcome::NoDescription,
        Err(e) => {
            error!("{}: {:#}", hotel_id, e);
            return HotelOutcome::DescriptionFailed;
        }
    };

    let result = match translate_description(
        client,
        config,
        &SUPPORTED_LOCALES,
        &record.active_locales,
        &description,
    )
    .await
    {
        Ok(result) => result,
        Err(e) => {
            error!("{}: {:#}", hotel_id, e);
            return HotelOutcome::TranslationFailed;
        }
    };

    if result.is_empty() {
        debug!("{}: all supported locales already covered", hotel_id);
        return HotelOutcome::NothingToTranslate;
    }

    match write_artifact(config, hotel_id, &result).await {
        Ok(()) => {
            debug!(
                "{}: wrote {} translations ({} API calls)",
                hotel_id,
                result.translated_locales.len(),
                result.api_codes.len()
            );
            HotelOutcome::Written {
                translated: result.translated_locales.len(),
            }
        }
        Err(e) => {
            error!("{}: {:#}", hotel_id, e);
            HotelOutcome::WriteFailed
        }
    }
}

/// Outcome counts for a whole run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub hotels: usize,
    pub written: usize,
    pub translated_locales: usize,
    pub nothing_to_translate: usize,
    pub no_description: usize,
    pub description_failures: usize,
    pub translation_failures: usize,
    pub write_failures: usize,
}

impl RunSummary {
    pub fn record(&mut self, outcome: HotelOutcome) {
        self.hotels += 1;
        match outcome {
            HotelOutcome::Written { translated } => {
                self.written += 1;
                self.translated_locales += translated;
            }
            HotelOutcome::NothingToTranslate => self.nothing_to_translate += 1,
            HotelOutcome::NoDescription => self.no_description += 1,
            HotelOutcome::DescriptionFailed => self.description_failures += 1,
            HotelOutcome::TranslationFailed => self.translation_failures += 1,
            HotelOutcome::WriteFailed => self.write_failures += 1,
        }
    }

    pub fn failures(&self) -> usize {
        self.description_failures + self.translation_failures + self.write_failures
    }
}

/// Process every hotel with at most `config.pool_size` units in flight
pub async fn run(config: &Config, hotels: &[HotelRecord]) -> Result<RunSummary> {
    tokio::fs::create_dir_all(&config.output_dir)
        .await
        .with_context(|| format!("Failed to create {}", config.output_dir.display()))?;

    let no_description_log = NoDescriptionLog::open(&config.no_description_log).await?;
    let client = config.http_client()?;
    let total = hotels.len();

    info!(
        "Processing {} hotels with up to {} in flight (no-description log: {})",
        total,
        config.pool_size,
        no_description_log.path().display()
    );

    let mut summary = RunSummary::default();
    let mut outcomes = stream::iter(hotels)
        .map(|record| process_hotel(&client, config, &no_description_log, record))
        .buffer_unordered(config.pool_size.max(1));

    while let Some(outcome) = outcomes.next().await {
        summary.record(outcome);
        if summary.hotels % 1000 == 0 {
            info!("[{}/{}] hotels processed", summary.hotels, total);
        }
    }

    Ok(summary)
}
