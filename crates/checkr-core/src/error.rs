//! Error types for the checkr-core library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the checkr library.
#[derive(Error, Debug)]
pub enum CheckrError {
    /// Source path does not reference an existing file.
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Document exists but no page or image could be obtained from it.
    #[error("no readable page in {}", .0.display())]
    Unreadable(PathBuf),

    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// OCR processing error.
    #[error("OCR error: {0}")]
    Ocr(#[from] OcrError),

    /// Field extraction error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// Image processing error.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// I/O error, including a failed rename/move.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to PDF processing.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// Failed to extract a page image from PDF.
    #[error("failed to extract page image: {0}")]
    ImageExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,
}

/// Errors related to OCR processing.
#[derive(Error, Debug)]
pub enum OcrError {
    /// The image bytes could not be decoded by the backend.
    #[error("image decode error: {0}")]
    ImageDecode(String),

    /// The OCR engine failed.
    #[error("OCR engine error: {0}")]
    Engine(String),

    /// No OCR backend compiled in.
    #[error("OCR not available - build with the `tesseract` feature")]
    NotAvailable,
}

/// Errors related to check field extraction.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// Extraction completed but one or both fields could not be determined.
    #[error("missing required field(s): {}", .missing.join(", "))]
    MissingFields { missing: Vec<String> },

    /// The LLM extraction call failed (transport or response parsing).
    #[error("LLM extraction failed: {0}")]
    Llm(String),
}

/// Result type for the checkr library.
pub type Result<T> = std::result::Result<T, CheckrError>;
