//! Hotel manifest loader.
//!
//! Each line of the manifest reads `hotel_id | locale1,locale2,...` and lists
//! the locales a hotel already has a native description in.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading the manifest. All of them abort the run.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Failed to read manifest {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Manifest line {line} has no '|' separator")]
    MissingSeparator { line: usize },

    #[error("Manifest line {line} has an empty hotel id")]
    EmptyHotelId { line: usize },

    #[error("Manifest line {line} has an invalid hotel id '{hotel_id}'")]
    InvalidHotelId { line: usize, hotel_id: String },
}

/// A hotel and the locales it already has a native description in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HotelRecord {
    pub hotel_id: String,
    pub active_locales: Vec<String>,
}

/// Parsed manifest, in first-seen hotel order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    hotels: Vec<HotelRecord>,
}

impl Manifest {
    /// Read and parse a manifest file
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let content = std::fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Parse manifest text.
    ///
    /// Blank lines are skipped. A hotel listed twice keeps its first position
    /// but takes the locales of its last line.
    pub fn parse(content: &str) -> Result<Self, ManifestError> {
        let mut hotels: Vec<HotelRecord> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for (i, raw) in content.lines().enumerate() {
            let line = i + 1;
            if raw.trim().is_empty() {
                continue;
            }

            let (id, locales) = raw
                .split_once('|')
                .ok_or(ManifestError::MissingSeparator { line })?;

            let hotel_id = id.trim();
            if hotel_id.is_empty() {
                return Err(ManifestError::EmptyHotelId { line });
            }
            if hotel_id.contains(['/', '\\']) || hotel_id == "." || hotel_id == ".." {
                return Err(ManifestError::InvalidHotelId {
                    line,
                    hotel_id: hotel_id.to_string(),
                });
            }

            let record = HotelRecord {
                hotel_id: hotel_id.to_string(),
                active_locales: parse_locales(locales),
            };

            match index.get(hotel_id) {
                Some(&pos) => hotels[pos] = record,
                None => {
                    index.insert(hotel_id.to_string(), hotels.len());
                    hotels.push(record);
                }
            }
        }

        Ok(Self { hotels })
    }

    pub fn hotels(&self) -> &[HotelRecord] {
        &self.hotels
    }

    pub fn len(&self) -> usize {
        self.hotels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hotels.is_empty()
    }
}

/// Split a comma list, trimming tokens, dropping empties and repeats
fn parse_locales(list: &str) -> Vec<String> {
    let mut locales: Vec<String> = Vec::new();
    for token in list.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        if !locales.iter().any(|l| l == token) {
            locales.push(token.to_string());
        }
    }
    locales
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_manifest() {
        let manifest = Manifest::parse("H1 | en-US,fr_FR\nH2|es_MX\n").expect("Should parse");

        assert_eq!(manifest.len(), 2);
        assert_eq!(
            manifest.hotels()[0],
            HotelRecord {
                hotel_id: "H1".to_string(),
                active_locales: vec!["en-US".to_string(), "fr_FR".to_string()],
            }
        );
        assert_eq!(manifest.hotels()[1].active_locales, vec!["es_MX"]);
    }

    #[test]
    fn test_parse_trims_whitespace_and_preserves_order() {
        let manifest = Manifest::parse("  H1  |  zh_TW , fr_CA ,en-US  ").expect("Should parse");

        assert_eq!(manifest.hotels()[0].hotel_id, "H1");
        assert_eq!(
            manifest.hotels()[0].active_locales,
            vec!["zh_TW", "fr_CA", "en-US"]
        );
    }

    #[test]
    fn test_parse_empty_locale_list_is_valid() {
        let manifest = Manifest::parse("H1 |\nH2 |   \n").expect("Should parse");

        assert_eq!(manifest.len(), 2);
        assert!(manifest.hotels()[0].active_locales.is_empty());
        assert!(manifest.hotels()[1].active_locales.is_empty());
    }

    #[test]
    fn test_parse_collapses_duplicate_locales() {
        let manifest = Manifest::parse("H1 | fr_FR,es_ES,fr_FR").expect("Should parse");
        assert_eq!(manifest.hotels()[0].active_locales, vec!["fr_FR", "es_ES"]);
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let manifest = Manifest::parse("\nH1 | fr_FR\n\n   \nH2 | es_ES\n").expect("Should parse");
        assert_eq!(manifest.len(), 2);
    }

    #[test]
    fn test_parse_repeated_hotel_keeps_position_takes_last_locales() {
        let manifest =
            Manifest::parse("H1 | fr_FR\nH2 | es_ES\nH1 | zh_CN\n").expect("Should parse");

        assert_eq!(manifest.len(), 2);
        assert_eq!(manifest.hotels()[0].hotel_id, "H1");
        assert_eq!(manifest.hotels()[0].active_locales, vec!["zh_CN"]);
        assert_eq!(manifest.hotels()[1].hotel_id, "H2");
    }

    #[test]
    fn test_parse_missing_separator_fails() {
        let err = Manifest::parse("H1 | fr_FR\nH2 fr_FR\n").unwrap_err();
        assert!(matches!(err, ManifestError::MissingSeparator { line: 2 }));
    }

    #[test]
    fn test_parse_empty_hotel_id_fails() {
        let err = Manifest::parse(" | fr_FR").unwrap_err();
        assert!(matches!(err, ManifestError::EmptyHotelId { line: 1 }));
    }

    #[test]
    fn test_parse_path_like_hotel_id_fails() {
        for line in [
            "../etc | fr_FR",
            "a/b | fr_FR",
            "a\\b | fr_FR",
            ". | fr_FR",
            ".. | fr_FR",
        ] {
            let err = Manifest::parse(line).unwrap_err();
            assert!(
                matches!(err, ManifestError::InvalidHotelId { line: 1, .. }),
                "{} should be rejected",
                line
            );
        }
    }

    #[test]
    fn test_parse_accepts_dots_inside_hotel_id() {
        let manifest = Manifest::parse("abc..def | fr_FR\nv1.2 | es_ES").expect("Should parse");

        let ids: Vec<&str> = manifest.hotels().iter().map(|h| h.hotel_id.as_str()).collect();
        assert_eq!(ids, vec!["abc..def", "v1.2"]);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(file, "abc | en-US,fr_FR").expect("Failed to write");
        writeln!(file, "def | zh_CN").expect("Failed to write");

        let manifest = Manifest::load(file.path()).expect("Should load");
        let ids: Vec<&str> = manifest.hotels().iter().map(|h| h.hotel_id.as_str()).collect();
        assert_eq!(ids, vec!["abc", "def"]);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let err = Manifest::load(Path::new("/nonexistent/manifest.txt")).unwrap_err();
        assert!(matches!(err, ManifestError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/manifest.txt"));
    }
}
