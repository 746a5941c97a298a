//! Locale handling for hotel descriptions.
//!
//! The content API and the translation API disagree on how languages are
//! named. The content API uses locale codes (`fr_CA`, `en-US`) while the
//! translation API only knows coarser language codes (`fr`, `zh-CN`).
//!
//! # Architecture
//!
//! - `registry`: the fixed set of locales every hotel should end up covering
//! - `language`: locale → API language code mapping and complement lookup

mod language;
mod registry;

pub use language::{api_language_code, complement, is_french};
pub use registry::{PREFERRED_SOURCE_LOCALE, SUPPORTED_LOCALES};
