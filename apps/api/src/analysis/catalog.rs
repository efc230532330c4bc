use std::fmt;

use serde::{Deserialize, Serialize};

/// A thematic resume block the analyzer looks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Contact,
    Experience,
    Education,
    Skills,
}

impl Section {
    pub fn as_str(self) -> &'static str {
        match self {
            Section::Contact => "contact",
            Section::Experience => "experience",
            Section::Education => "education",
            Section::Skills => "skills",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One catalog row: a section and the lowercase keywords that signal it.
#[derive(Debug, Clone)]
pub struct SectionKeywords {
    pub section: Section,
    pub keywords: Vec<String>,
}

impl SectionKeywords {
    /// True if any keyword occurs anywhere in `text_lower` (plain substring, not tokenized).
    pub fn matches(&self, text_lower: &str) -> bool {
        self.keywords.iter().any(|k| text_lower.contains(k.as_str()))
    }
}

const STANDARD_SECTIONS: &[(Section, &[&str])] = &[
    (
        Section::Contact,
        &["email", "phone", "contact", "mobile", "linkedin", "@"],
    ),
    (
        Section::Experience,
        &[
            "experience",
            "work history",
            "employment",
            "professional experience",
        ],
    ),
    (
        Section::Education,
        &[
            "education",
            "degree",
            "university",
            "college",
            "bachelor",
            "master",
        ],
    ),
    (
        Section::Skills,
        &["skills", "technical skills", "competencies", "expertise"],
    ),
];

/// Immutable section → keywords table. Built once at startup and shared via `AppState`.
///
/// Row order is significant: `found_sections` and `missing_sections` are reported
/// in catalog order.
#[derive(Debug, Clone)]
pub struct SectionCatalog {
    entries: Vec<SectionKeywords>,
}

impl SectionCatalog {
    pub fn standard() -> Self {
        let entries = STANDARD_SECTIONS
            .iter()
            .map(|(section, keywords)| SectionKeywords {
                section: *section,
                keywords: keywords.iter().map(|k| k.to_string()).collect(),
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[SectionKeywords] {
        &self.entries
    }

    pub fn sections(&self) -> impl Iterator<Item = Section> + '_ {
        self.entries.iter().map(|e| e.section)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl Default for SectionCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_order() {
        let catalog = SectionCatalog::standard();
        let sections: Vec<_> = catalog.sections().collect();
        assert_eq!(
            sections,
            vec![
                Section::Contact,
                Section::Experience,
                Section::Education,
                Section::Skills
            ]
        );
    }

    #[test]
    fn test_keywords_are_lowercase() {
        for entry in SectionCatalog::standard().entries() {
            for kw in &entry.keywords {
                assert_eq!(kw, &kw.to_lowercase(), "keyword {kw} is not lowercase");
            }
        }
    }

    #[test]
    fn test_keyword_embedded_in_word_still_matches() {
        let catalog = SectionCatalog::standard();
        let skills = &catalog.entries()[3];
        // substring containment, not tokenized
        assert!(skills.matches("upskillsets"));
        assert!(!skills.matches("nothing relevant"));
    }

    #[test]
    fn test_section_serializes_as_snake_case() {
        let json = serde_json::to_string(&Section::Experience).unwrap();
        assert_eq!(json, r#""experience""#);
        assert_eq!(Section::Skills.to_string(), "skills");
    }
}
