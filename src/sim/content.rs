//! Biography entries shown by the collectibles
//!
//! The list is fixed at build time: `assets/cv.json` is embedded into the
//! binary and parsed on startup. Nothing is fetched at runtime.

use serde::{Deserialize, Serialize};

use crate::error::ContentError;

/// Embedded content file
const CV_JSON: &str = include_str!("../../assets/cv.json");

/// One résumé entry (one platform + one collectible in the scene)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CvEntry {
    pub title: String,
    pub description: String,
}

impl CvEntry {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Parse a JSON array of entries
pub fn parse_entries(json: &str) -> Result<Vec<CvEntry>, ContentError> {
    let entries: Vec<CvEntry> = serde_json::from_str(json)?;
    if entries.is_empty() {
        return Err(ContentError::Empty);
    }
    Ok(entries)
}

/// Entries from the embedded content file
pub fn load_entries() -> Result<Vec<CvEntry>, ContentError> {
    parse_entries(CV_JSON)
}

/// Embedded entries, or the built-in list if the file is unusable
pub fn entries_or_default() -> Vec<CvEntry> {
    match load_entries() {
        Ok(entries) => entries,
        Err(e) => {
            log::warn!("Falling back to built-in CV entries: {}", e);
            default_entries()
        }
    }
}

/// Built-in résumé content
pub fn default_entries() -> Vec<CvEntry> {
    vec![
        CvEntry::new(
            "Infos Personnelles",
            "Dorothée Braud-Meignant, Franco-Américaine, née en 1983",
        ),
        CvEntry::new(
            "Expérience",
            "Cheffe de projets ventes internationales chez MEDIAWAN (2017-2022)",
        ),
        CvEntry::new(
            "Formation",
            "Master en Marketing et Distribution Audiovisuelle, INA SUP - Sorbonne",
        ),
        CvEntry::new("Compétences", "Gestion de projet, Traduction, Web, Marketing"),
        CvEntry::new(
            "Langues",
            "Français (natif), Anglais (bilingue), Allemand (professionnel)",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_content_matches_builtin() {
        let entries = load_entries().expect("embedded content should parse");
        assert_eq!(entries, default_entries());
        assert_eq!(entries.len(), 5);
    }

    #[test]
    fn test_parse_rejects_empty_list() {
        assert!(matches!(parse_entries("[]"), Err(ContentError::Empty)));
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        let result = parse_entries(r#"[{"title": "only a title"}]"#);
        assert!(matches!(result, Err(ContentError::Parse(_))));
    }
}
