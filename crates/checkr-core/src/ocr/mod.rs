//! OCR backend abstraction.
//!
//! Backends accept raw PNG/JPEG image bytes and return the recognized text.
//! The real engine is Tesseract, gated behind the `tesseract` feature; builds
//! without it get a backend that reports `OcrError::NotAvailable` at
//! recognition time, so path preconditions still run first.

mod recognizer;

#[cfg(feature = "tesseract")]
pub use recognizer::TesseractRecognizer;
pub use recognizer::{MockRecognizer, OcrBackend};

use crate::models::config::OcrConfig;

/// Build the OCR backend for this build configuration.
#[cfg(feature = "tesseract")]
pub fn default_backend(config: &OcrConfig) -> Box<dyn OcrBackend> {
    Box::new(TesseractRecognizer::new(
        config.data_path.as_ref().map(|p| p.display().to_string()),
        &config.lang,
    ))
}

/// Build the OCR backend for this build configuration.
#[cfg(not(feature = "tesseract"))]
pub fn default_backend(_config: &OcrConfig) -> Box<dyn OcrBackend> {
    Box::new(recognizer::UnavailableBackend)
}
