//! File renaming: sanitization and the rename pipeline.

mod orchestrator;
mod sanitize;

pub use orchestrator::CheckRenamer;
pub use sanitize::sanitize_payee;
