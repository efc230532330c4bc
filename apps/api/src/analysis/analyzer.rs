//! Resume analyzer: a pure function from extracted text to an `AnalysisResult`.
//!
//! Stages: normalize → detect sections → count words → match contact patterns →
//! aggregate score → build advice. Total over all inputs, including `""`.

use serde::{Deserialize, Serialize};

use crate::analysis::advice::{build_advice, AdviceContext};
use crate::analysis::catalog::{Section, SectionCatalog};
use crate::analysis::patterns;
use crate::analysis::scoring::{compute_score, count_words, ScoreBreakdown};

/// Serialized as the `POST /analyze` response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub score: u32,
    pub word_count: usize,
    pub found_sections: Vec<Section>,
    pub missing_sections: Vec<Section>,
    pub advice: Vec<String>,
    pub has_email: bool,
    pub has_phone: bool,
}

/// Found and missing sections, both in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionPartition {
    pub found: Vec<Section>,
    pub missing: Vec<Section>,
}

pub fn detect_sections(text_lower: &str, catalog: &SectionCatalog) -> SectionPartition {
    let (found, missing): (Vec<_>, Vec<_>) = catalog
        .entries()
        .iter()
        .partition(|entry| entry.matches(text_lower));

    SectionPartition {
        found: found.into_iter().map(|e| e.section).collect(),
        missing: missing.into_iter().map(|e| e.section).collect(),
    }
}

pub fn analyze(text: &str, catalog: &SectionCatalog) -> AnalysisResult {
    analyze_with_breakdown(text, catalog).0
}

/// Same as [`analyze`], also returning the per-component points behind `score`.
pub fn analyze_with_breakdown(
    text: &str,
    catalog: &SectionCatalog,
) -> (AnalysisResult, ScoreBreakdown) {
    let text_lower = text.to_lowercase();
    let sections = detect_sections(&text_lower, catalog);

    // Word count and contact patterns run on the original-case text.
    let word_count = count_words(text);
    let has_email = patterns::has_email(text);
    let has_phone = patterns::has_phone(text);

    let breakdown = compute_score(sections.found.len(), word_count, has_email, has_phone);

    let advice = build_advice(&AdviceContext {
        score: breakdown.score,
        word_count,
        missing_sections: &sections.missing,
        has_email,
        has_phone,
    });

    let result = AnalysisResult {
        score: breakdown.score,
        word_count,
        found_sections: sections.found,
        missing_sections: sections.missing,
        advice,
        has_email,
        has_phone,
    };
    (result, breakdown)
}
