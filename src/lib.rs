//! Batch translation of hotel descriptions into the supported locales.
//!
//! Reads a manifest of hotels and the locales they already have, fetches one
//! source description per hotel, translates it into every missing locale and
//! writes one JSON file per hotel.

pub mod config;
pub mod description;
pub mod dispatcher;
pub mod i18n;
pub mod manifest;
pub mod no_description_log;
pub mod translation;
