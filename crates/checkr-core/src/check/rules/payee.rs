//! Payee name extraction from the "pay to the order of" field.

use regex::Regex;

use super::patterns::{PAYABLE_TO, PAY_TO_ORDER};
use super::FieldExtractor;

/// Payee field extractor.
pub struct PayeeExtractor;

impl PayeeExtractor {
    pub fn new() -> Self {
        Self
    }

    fn anchor_patterns() -> [&'static Regex; 2] {
        [&PAY_TO_ORDER, &PAYABLE_TO]
    }
}

impl Default for PayeeExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for PayeeExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results = Vec::new();

        // Earlier anchors take precedence; within an anchor, document order.
        for pattern in Self::anchor_patterns() {
            for caps in pattern.captures_iter(text) {
                let name = normalize_name(&caps[1]);
                if name.is_empty() || results.contains(&name) {
                    continue;
                }
                results.push(name);
            }
        }

        results
    }
}

/// Extract the payee name from text.
pub fn find_payee(text: &str) -> Option<String> {
    PayeeExtractor::new().extract(text)
}

/// Collapse whitespace runs, trim, and title-case each word.
fn normalize_name(raw: &str) -> String {
    let words: Vec<String> = raw.split_whitespace().map(title_case_word).collect();
    words.join(" ")
}

fn title_case_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(|c| c.to_lowercase())).collect(),
        None => String::new(),
    }
}
