//! Core library for check file renaming.
//!
//! This crate provides:
//! - Text sourcing from check images and first-page PDF scans
//! - Rule-based field extraction (payee, check number) with an optional
//!   LLM-assisted strategy
//! - Payee sanitization and the collision-aware rename pipeline

pub mod check;
pub mod error;
pub mod models;
pub mod ocr;
pub mod pdf;
pub mod rename;
pub mod source;

pub use check::{ExtractionStrategy, LlmStrategy, RegexStrategy};
pub use check::rules::{find_check_number, find_payee};
pub use error::{CheckrError, ExtractionError, OcrError, PdfError, Result};
pub use models::check::CheckFields;
pub use models::config::{CheckrConfig, CollisionPolicy, ExtractionConfig};
pub use ocr::{MockRecognizer, OcrBackend};
pub use pdf::PdfReader;
pub use rename::{sanitize_payee, CheckRenamer};
pub use source::{DocumentTextSource, StaticTextSource, TextSource};
