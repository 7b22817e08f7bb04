//! Rule-based extraction strategy.

use tracing::debug;

use super::rules::{find_check_number, find_payee};
use super::{ExtractionStrategy, Result};
use crate::models::check::CheckFields;

/// Regex rule-table extraction strategy.
///
/// Runs the payee and check-number rule cascades independently; either may
/// come back empty without failing the call.
pub struct RegexStrategy;

impl RegexStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RegexStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractionStrategy for RegexStrategy {
    fn extract(&self, text: &str) -> Result<CheckFields> {
        let fields = CheckFields {
            payee: find_payee(text),
            check_number: find_check_number(text),
        };

        debug!(
            "Rule extraction from {} chars: payee={:?}, check_number={:?}",
            text.len(),
            fields.payee,
            fields.check_number
        );

        Ok(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extracts_both_fields() {
        let text = "PAY TO THE ORDER OF  Jane   Doe\n$152.35\nCheck Number: 10234";
        let fields = RegexStrategy::new().extract(text).unwrap();

        assert_eq!(fields, CheckFields::new("Jane Doe", "10234"));
    }

    #[test]
    fn test_absent_fields_are_not_errors() {
        let fields = RegexStrategy::new().extract("illegible scan").unwrap();

        assert_eq!(fields.payee, None);
        assert_eq!(fields.check_number, None);
        assert_eq!(fields.missing(), vec!["payee", "check_number"]);
    }

    #[test]
    fn test_payee_only() {
        let fields = RegexStrategy::new()
            .extract("Pay to the order of: John Smith")
            .unwrap();

        assert_eq!(fields.payee, Some("John Smith".to_string()));
        assert_eq!(fields.check_number, None);
    }
}
