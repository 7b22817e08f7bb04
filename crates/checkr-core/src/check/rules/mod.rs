//! Rule-based field extractors for checks.

pub mod number;
pub mod patterns;
pub mod payee;

pub use number::{find_check_number, CheckNumberExtractor};
pub use payee::{find_payee, PayeeExtractor};

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all occurrences of the field.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}
