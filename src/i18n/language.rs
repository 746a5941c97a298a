//! Locale → translation API language code mapping.
//!
//! English, Spanish and French are mapped by their two-letter prefix. Chinese
//! needs exact overrides since `zh` alone does not say whether the script is
//! Simplified or Traditional.

use crate::i18n::registry::SUPPORTED_LOCALES;

/// Exact-match overrides, checked before the prefix rule
const EXACT_CODES: &[(&str, &str)] = &[
    ("zh_CN", "zh-CN"),
    ("zh-CN", "zh-CN"),
    ("zh_TW", "zh-TW"),
    ("zh-TW", "zh-TW"),
];

/// Two-letter prefixes whose API code is the prefix itself
const PREFIX_CODES: &[&str] = &["en", "es", "fr"];

/// Map a locale code to the translation API's language code.
///
/// # Returns
/// * `Some(code)` for English, Spanish, French and the two Chinese variants
/// * `None` for anything the translation API mapping does not cover
///
/// # Example
/// ```ignore
/// assert_eq!(api_language_code("es_MX"), Some("es"));
/// assert_eq!(api_language_code("zh_TW"), Some("zh-TW"));
/// ```
pub fn api_language_code(locale: &str) -> Option<&'static str> {
    if let Some((_, code)) = EXACT_CODES.iter().find(|(l, _)| *l == locale) {
        return Some(*code);
    }

    let prefix = locale.get(..2)?;
    PREFIX_CODES.iter().copied().find(|p| *p == prefix)
}

/// Find the other supported locale sharing the same two-letter prefix.
///
/// `fr_CA` yields `fr_FR` and the reverse. A locale with no such sibling is
/// its own complement.
pub fn complement(locale: &str) -> &str {
    let Some(prefix) = locale.get(..2) else {
        return locale;
    };

    SUPPORTED_LOCALES
        .iter()
        .copied()
        .find(|code| code.get(..2) == Some(prefix) && *code != locale)
        .unwrap_or(locale)
}

/// Whether a locale translates into French
pub fn is_french(locale: &str) -> bool {
    api_language_code(locale) == Some("fr")
}
