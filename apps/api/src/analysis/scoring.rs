use serde::{Deserialize, Serialize};

pub const POINTS_PER_SECTION: u32 = 25;
pub const IDEAL_LENGTH_POINTS: u32 = 10;
pub const ACCEPTABLE_LENGTH_POINTS: u32 = 5;
pub const EMAIL_POINTS: u32 = 5;
pub const PHONE_POINTS: u32 = 5;
pub const MAX_SCORE: u32 = 100;

/// Lower bound of the "too short" advice and of the acceptable-length bonus.
pub const MIN_WORDS: usize = 200;
pub const IDEAL_MIN_WORDS: usize = 300;
pub const IDEAL_MAX_WORDS: usize = 800;

/// Per-component points behind an ATS score.
///
/// `raw_total` can exceed `MAX_SCORE` (4 sections + ideal length + both contacts = 120),
/// so `score` is always the clamped value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub sections: u32,
    pub length: u32,
    pub email: u32,
    pub phone: u32,
    pub raw_total: u32,
    pub score: u32,
}

/// Number of whitespace-separated tokens. Runs of whitespace count as one separator.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// 10 points for 300..=800 words, 5 for any other count above 200, else 0.
pub fn length_points(word_count: usize) -> u32 {
    if (IDEAL_MIN_WORDS..=IDEAL_MAX_WORDS).contains(&word_count) {
        IDEAL_LENGTH_POINTS
    } else if word_count > MIN_WORDS {
        ACCEPTABLE_LENGTH_POINTS
    } else {
        0
    }
}

pub fn compute_score(
    found_sections: usize,
    word_count: usize,
    has_email: bool,
    has_phone: bool,
) -> ScoreBreakdown {
    let sections = found_sections as u32 * POINTS_PER_SECTION;
    let length = length_points(word_count);
    let email = if has_email { EMAIL_POINTS } else { 0 };
    let phone = if has_phone { PHONE_POINTS } else { 0 };
    let raw_total = sections + length + email + phone;

    ScoreBreakdown {
        sections,
        length,
        email,
        phone,
        raw_total,
        score: raw_total.min(MAX_SCORE),
    }
}
