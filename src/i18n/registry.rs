//! Locale registry: the locales the pipeline guarantees coverage for.

/// Locales every hotel should have a description in, in output order.
pub const SUPPORTED_LOCALES: [&str; 7] = [
    "en_US", "es_ES", "es_MX", "fr_FR", "fr_CA", "zh_CN", "zh_TW",
];

/// Locale always preferred as the translation source when a hotel has it.
///
/// This is the content API's spelling and is not itself in [`SUPPORTED_LOCALES`].
pub const PREFERRED_SOURCE_LOCALE: &str = "en-US";
