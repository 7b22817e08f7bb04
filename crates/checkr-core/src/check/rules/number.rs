//! Check number extraction.
//!
//! Labeled fields are unambiguous and trusted first; the unlabeled fallback is
//! weaker and only consulted when no structured cue exists.

use regex::Regex;

use super::patterns::{
    NUMBER_CHECK_HASH, NUMBER_CHECK_NUMBER, NUMBER_ISOLATED, NUMBER_LINE_END, NUMBER_NO_LABEL,
};
use super::FieldExtractor;

/// Minimum digits for a labeled candidate.
const MIN_LABELED_DIGITS: usize = 3;

/// Digit-count range for the unlabeled fallback. Isolated 3-digit runs are
/// excluded; they are more likely amounts or partial dates.
const FALLBACK_DIGITS: std::ops::RangeInclusive<usize> = 4..=6;

/// Check number field extractor.
pub struct CheckNumberExtractor;

impl CheckNumberExtractor {
    pub fn new() -> Self {
        Self
    }

    fn labeled_patterns() -> [&'static Regex; 4] {
        [
            &NUMBER_NO_LABEL,
            &NUMBER_CHECK_HASH,
            &NUMBER_LINE_END,
            &NUMBER_CHECK_NUMBER,
        ]
    }
}

impl Default for CheckNumberExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for CheckNumberExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        if let Some(number) = self.extract_all(text).into_iter().next() {
            return Some(number);
        }

        // Unlabeled fallback: first isolated run of 4-6 digits, document
        // order. First-match-wins can misfire on dates or amounts; see the
        // fallback tests.
        NUMBER_ISOLATED
            .find_iter(text)
            .map(|m| m.as_str())
            .find(|digits| FALLBACK_DIGITS.contains(&digits.len()))
            .map(str::to_string)
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results = Vec::new();

        for pattern in Self::labeled_patterns() {
            for caps in pattern.captures_iter(text) {
                let digits = &caps[1];
                if digits.len() < MIN_LABELED_DIGITS {
                    continue;
                }
                if results.iter().any(|r| r == digits) {
                    continue;
                }
                results.push(digits.to_string());
            }
        }

        results
    }
}

/// Extract the check number from text.
pub fn find_check_number(text: &str) -> Option<String> {
    CheckNumberExtractor::new().extract(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_check_hash_label() {
        assert_eq!(
            find_check_number("Check #004521"),
            Some("004521".to_string())
        );
    }

    #[test]
    fn test_no_label() {
        assert_eq!(
            find_check_number("No. 1482 payable on demand"),
            Some("1482".to_string())
        );
    }

    #[test]
    fn test_check_number_label() {
        assert_eq!(
            find_check_number("Check Number: 10234"),
            Some("10234".to_string())
        );
    }

    #[test]
    fn test_line_end_heuristic() {
        let text = "First National Bank   2210\nPay to the order of: Jane Doe";
        assert_eq!(find_check_number(text), Some("2210".to_string()));
    }

    #[test]
    fn test_labeled_three_digits_accepted() {
        assert_eq!(find_check_number("Check # 321 for supplies"), Some("321".to_string()));
    }

    #[test]
    fn test_isolated_three_digits_excluded() {
        // A bare 3-digit run with no label is not trusted as a check number.
        assert_eq!(find_check_number("amount was 123 dollars even"), None);
    }

    #[test]
    fn test_isolated_five_digits_accepted() {
        assert_eq!(
            find_check_number("reference 45678 held on file"),
            Some("45678".to_string())
        );
    }

    #[test]
    fn test_label_beats_line_end() {
        let text = "No. 5501 issued\ntotal due today 9999";
        assert_eq!(find_check_number(text), Some("5501".to_string()));
    }

    #[test]
    fn test_fallback_prefers_first_run_even_if_date_like() {
        // Known heuristic weakness, inherited deliberately: with no labeled
        // field anywhere, the first isolated 4-6 digit run wins even when it
        // is a year rather than a check number.
        assert_eq!(
            find_check_number("dated 2024 in the amount of 56012 dollars"),
            Some("2024".to_string())
        );
    }

    #[test]
    fn test_absent_when_nothing_matches() {
        assert_eq!(find_check_number("void void void"), None);
        assert_eq!(find_check_number(""), None);
    }
}
