//! Contact-pattern detection. Both patterns are heuristics, not validators.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b")
        .expect("email pattern is valid")
});

// Loose North-American shape: [+CC][sep] [(]AAA[)] [sep] NNN [sep] NNNN.
// Unrelated 10-digit runs also match.
static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\+?\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}")
        .expect("phone pattern is valid")
});

pub fn has_email(text: &str) -> bool {
    EMAIL_RE.is_match(text)
}

pub fn has_phone(text: &str) -> bool {
    PHONE_RE.is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_with_plus_and_dots() {
        assert!(has_email("reach me at a.b+c@example.co"));
    }

    #[test]
    fn test_email_absent() {
        assert!(!has_email("no address here"));
        assert!(!has_email("user@localhost"));
    }

    #[test]
    fn test_email_uppercase() {
        assert!(has_email("JANE.DOE@EXAMPLE.COM"));
    }

    #[test]
    fn test_email_single_letter_tld_rejected() {
        assert!(!has_email("someone@example.c"));
    }

    #[test]
    fn test_phone_dashed() {
        assert!(has_phone("call 555-123-4567"));
    }

    #[test]
    fn test_phone_variants() {
        assert!(has_phone("(555) 123-4567"));
        assert!(has_phone("+1 555.123.4567"));
        assert!(has_phone("5551234567"));
    }

    #[test]
    fn test_phone_too_few_digits() {
        assert!(!has_phone("call 123-4567"));
        assert!(!has_phone("no digits at all"));
    }
}
