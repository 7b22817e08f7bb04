//! Regex patterns for check field extraction.
//!
//! Patterns within each group are evaluated top-down; the first group to
//! produce a match wins.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Payee anchors. The capture runs over letters and whitespace, so it can
    // continue across a line break in noisy OCR output.
    pub static ref PAY_TO_ORDER: Regex = Regex::new(
        r"(?i)pay\s+to\s+the\s+order\s+of[:\s]+([A-Za-z\s]+)"
    ).unwrap();

    pub static ref PAYABLE_TO: Regex = Regex::new(
        r"(?i)payable\s+to[:\s]+([A-Za-z\s]+)"
    ).unwrap();

    // Labeled check-number patterns, 3-6 consecutive digits.
    pub static ref NUMBER_NO_LABEL: Regex = Regex::new(
        r"(?i)no\.?\s*[:\s]*(\d{3,6})"
    ).unwrap();

    pub static ref NUMBER_CHECK_HASH: Regex = Regex::new(
        r"(?i)check\s*#?\s*[:\s]*(\d{3,6})"
    ).unwrap();

    // Check numbers are often printed at a line's right edge.
    pub static ref NUMBER_LINE_END: Regex = Regex::new(
        r"(?im)#?\s*(\d{3,6})\s*$"
    ).unwrap();

    pub static ref NUMBER_CHECK_NUMBER: Regex = Regex::new(
        r"(?i)check\s+number[:\s]+(\d{3,6})"
    ).unwrap();

    // Unlabeled fallback: isolated digit runs bounded by word boundaries.
    pub static ref NUMBER_ISOLATED: Regex = Regex::new(
        r"\b\d{3,6}\b"
    ).unwrap();
}
