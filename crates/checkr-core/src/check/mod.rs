//! Check field extraction module.

mod llm;
mod parser;
pub mod rules;

pub use llm::LlmStrategy;
pub use parser::RegexStrategy;

use crate::error::ExtractionError;
use crate::models::check::CheckFields;

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Strategy for turning recognized text into check fields.
///
/// Implementations are selected once at orchestrator construction and never
/// switched mid-call. Absence of a field is a normal outcome, not an error.
pub trait ExtractionStrategy {
    /// Extract payee and check number from raw text.
    fn extract(&self, text: &str) -> Result<CheckFields>;
}
