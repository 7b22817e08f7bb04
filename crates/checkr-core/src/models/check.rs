//! Check field data model.

use serde::{Deserialize, Serialize};

/// Fields extracted from a single check.
///
/// Either field may be absent; absence is a normal extraction outcome, not an
/// error. Once produced the pair is never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckFields {
    /// Payee name from the "pay to the order of" field.
    pub payee: Option<String>,

    /// Check number, kept as a string to preserve leading zeros.
    pub check_number: Option<String>,
}

impl CheckFields {
    /// Create a result with both fields present.
    pub fn new(payee: impl Into<String>, check_number: impl Into<String>) -> Self {
        Self {
            payee: Some(payee.into()),
            check_number: Some(check_number.into()),
        }
    }

    /// True when both fields were determined.
    pub fn is_complete(&self) -> bool {
        self.payee.is_some() && self.check_number.is_some()
    }

    /// Names of the fields that could not be determined.
    pub fn missing(&self) -> Vec<String> {
        let mut missing = Vec::new();
        if self.payee.is_none() {
            missing.push("payee".to_string());
        }
        if self.check_number.is_none() {
            missing.push("check_number".to_string());
        }
        missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_names_each_absent_field() {
        let both = CheckFields::default();
        assert_eq!(both.missing(), vec!["payee", "check_number"]);

        let no_number = CheckFields {
            payee: Some("Jane Doe".to_string()),
            check_number: None,
        };
        assert_eq!(no_number.missing(), vec!["check_number"]);

        let complete = CheckFields::new("Jane Doe", "10234");
        assert!(complete.is_complete());
        assert!(complete.missing().is_empty());
    }
}
