//! Advice generation.
//!
//! Output order is part of the response contract: verdict first, then the gap
//! rules in `ADVICE_RULES` order, then the general tips.

use crate::analysis::catalog::Section;
use crate::analysis::scoring::{IDEAL_MAX_WORDS, MIN_WORDS};

pub const VERDICT_STRONG: &str = "✅ Your resume is excellent and ATS-friendly!";
pub const VERDICT_FAIR: &str = "⚠️ Your resume is good but needs some improvements";
pub const VERDICT_WEAK: &str = "❌ Your resume needs major improvements";

pub const ADD_CONTACT: &str = "📧 Add contact information: email address and phone number";
pub const ADD_EXPERIENCE: &str = "💼 Add a clearly labeled work experience section";
pub const ADD_EDUCATION: &str = "🎓 Add an education and certifications section";
pub const ADD_SKILLS: &str = "🛠️ Add a technical skills section";
pub const TOO_SHORT: &str = "📝 Your resume is too short; add more detail";
pub const TOO_LONG: &str = "📄 Your resume is long; try trimming it to one or two pages";
pub const ADD_EMAIL: &str = "📧 Make sure to include your email address";
pub const ADD_PHONE: &str = "📞 Make sure to include your phone number";

pub const GENERAL_TIPS: &[&str] = &[
    "💡 Use keywords from the target job description",
    "📊 Use strong action verbs such as managed, developed, achieved, led",
];

const STRONG_THRESHOLD: u32 = 80;
const FAIR_THRESHOLD: u32 = 60;

/// Facts the advice rules are evaluated against.
#[derive(Debug, Clone, Copy)]
pub struct AdviceContext<'a> {
    pub score: u32,
    pub word_count: usize,
    pub missing_sections: &'a [Section],
    pub has_email: bool,
    pub has_phone: bool,
}

impl AdviceContext<'_> {
    fn is_missing(&self, section: Section) -> bool {
        self.missing_sections.contains(&section)
    }
}

pub struct AdviceRule {
    pub applies: fn(&AdviceContext) -> bool,
    pub message: &'static str,
}

fn contact_missing(ctx: &AdviceContext) -> bool {
    ctx.is_missing(Section::Contact)
}

fn experience_missing(ctx: &AdviceContext) -> bool {
    ctx.is_missing(Section::Experience)
}

fn education_missing(ctx: &AdviceContext) -> bool {
    ctx.is_missing(Section::Education)
}

fn skills_missing(ctx: &AdviceContext) -> bool {
    ctx.is_missing(Section::Skills)
}

fn too_short(ctx: &AdviceContext) -> bool {
    ctx.word_count < MIN_WORDS
}

// Disjoint from `too_short`: the band 200..=800 adds no length advice.
fn too_long(ctx: &AdviceContext) -> bool {
    ctx.word_count > IDEAL_MAX_WORDS
}

fn email_absent(ctx: &AdviceContext) -> bool {
    !ctx.has_email
}

fn phone_absent(ctx: &AdviceContext) -> bool {
    !ctx.has_phone
}

pub const ADVICE_RULES: &[AdviceRule] = &[
    AdviceRule {
        applies: contact_missing,
        message: ADD_CONTACT,
    },
    AdviceRule {
        applies: experience_missing,
        message: ADD_EXPERIENCE,
    },
    AdviceRule {
        applies: education_missing,
        message: ADD_EDUCATION,
    },
    AdviceRule {
        applies: skills_missing,
        message: ADD_SKILLS,
    },
    AdviceRule {
        applies: too_short,
        message: TOO_SHORT,
    },
    AdviceRule {
        applies: too_long,
        message: TOO_LONG,
    },
    AdviceRule {
        applies: email_absent,
        message: ADD_EMAIL,
    },
    AdviceRule {
        applies: phone_absent,
        message: ADD_PHONE,
    },
];

pub fn verdict(score: u32) -> &'static str {
    match score {
        s if s >= STRONG_THRESHOLD => VERDICT_STRONG,
        s if s >= FAIR_THRESHOLD => VERDICT_FAIR,
        _ => VERDICT_WEAK,
    }
}

/// Builds the ordered advice list. Never empty: the verdict and tips are unconditional.
pub fn build_advice(ctx: &AdviceContext) -> Vec<String> {
    let mut advice = vec![verdict(ctx.score).to_string()];
    advice.extend(
        ADVICE_RULES
            .iter()
            .filter(|rule| (rule.applies)(ctx))
            .map(|rule| rule.message.to_string()),
    );
    advice.extend(GENERAL_TIPS.iter().map(|tip| tip.to_string()));
    advice
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ctx(score: u32, word_count: usize, missing: &[Section]) -> AdviceContext<'_> {
        AdviceContext {
            score,
            word_count,
            missing_sections: missing,
            has_email: true,
            has_phone: true,
        }
    }

    #[test]
    fn test_verdict_thresholds() {
        assert_eq!(verdict(100), VERDICT_STRONG);
        assert_eq!(verdict(80), VERDICT_STRONG);
        assert_eq!(verdict(79), VERDICT_FAIR);
        assert_eq!(verdict(60), VERDICT_FAIR);
        assert_eq!(verdict(59), VERDICT_WEAK);
        assert_eq!(verdict(0), VERDICT_WEAK);
    }

    #[test]
    fn test_complete_resume_gets_verdict_and_tips_only() {
        let advice = build_advice(&ctx(100, 500, &[]));
        assert_eq!(
            advice,
            vec![VERDICT_STRONG, GENERAL_TIPS[0], GENERAL_TIPS[1]]
        );
    }

    #[test]
    fn test_missing_sections_listed_in_rule_order() {
        let missing = [Section::Skills, Section::Contact];
        let advice = build_advice(&ctx(55, 400, &missing));
        assert_eq!(
            advice,
            vec![
                VERDICT_WEAK,
                ADD_CONTACT,
                ADD_SKILLS,
                GENERAL_TIPS[0],
                GENERAL_TIPS[1]
            ]
        );
    }

    #[test]
    fn test_length_advice_boundaries() {
        assert!(build_advice(&ctx(90, 199, &[])).contains(&TOO_SHORT.to_string()));
        let at_200 = build_advice(&ctx(90, 200, &[]));
        assert!(!at_200.contains(&TOO_SHORT.to_string()));
        assert!(!at_200.contains(&TOO_LONG.to_string()));
        assert!(!build_advice(&ctx(90, 800, &[])).contains(&TOO_LONG.to_string()));
        assert!(build_advice(&ctx(90, 801, &[])).contains(&TOO_LONG.to_string()));
    }

    #[test]
    fn test_contact_advice_when_patterns_absent() {
        let context = AdviceContext {
            has_email: false,
            has_phone: false,
            ..ctx(70, 400, &[])
        };
        let advice = build_advice(&context);
        assert_eq!(
            advice,
            vec![
                VERDICT_FAIR,
                ADD_EMAIL,
                ADD_PHONE,
                GENERAL_TIPS[0],
                GENERAL_TIPS[1]
            ]
        );
    }
}
