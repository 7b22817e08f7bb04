//! Payee sanitization for filenames.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref UNSAFE_CHARS: Regex = Regex::new(r"[^\w\s-]").unwrap();
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
}

/// Derive a filesystem-safe token from a payee name.
///
/// Drops everything that is not a word character, whitespace, or hyphen,
/// collapses whitespace runs into single underscores, and trims
/// leading/trailing underscores. Pure and idempotent; imposes no length cap.
pub fn sanitize_payee(name: &str) -> String {
    let cleaned = UNSAFE_CHARS.replace_all(name, "");
    let joined = WHITESPACE_RUN.replace_all(&cleaned, "_");
    joined.trim_matches('_').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_spaces_become_underscores() {
        assert_eq!(sanitize_payee("Jane Doe"), "Jane_Doe");
        assert_eq!(sanitize_payee("Jane   Doe"), "Jane_Doe");
    }

    #[test]
    fn test_punctuation_removed() {
        assert_eq!(sanitize_payee("O'Brien & Sons, Inc."), "OBrien_Sons_Inc");
        assert_eq!(sanitize_payee("Smith-Jones"), "Smith-Jones");
    }

    #[test]
    fn test_no_leading_or_trailing_underscores() {
        assert_eq!(sanitize_payee("  Jane Doe  "), "Jane_Doe");
        assert_eq!(sanitize_payee("__Jane__"), "Jane");
    }

    #[test]
    fn test_idempotent() {
        for input in ["Jane Doe", "  a  b  ", "x-y_z", "@@@", "", "Ümlaut GmbH"] {
            let once = sanitize_payee(input);
            assert_eq!(sanitize_payee(&once), once);
        }
    }

    #[test]
    fn test_garbage_collapses_to_empty() {
        assert_eq!(sanitize_payee("@#$%"), "");
        assert_eq!(sanitize_payee("   "), "");
    }

    #[test]
    fn test_output_charset() {
        let out = sanitize_payee("a!b@c #d$ e-f_g");
        assert!(out
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-'));
    }
}
