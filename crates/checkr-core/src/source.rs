//! Text sourcing: turning a document path into raw recognized text.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{CheckrError, PdfError, Result};
use crate::models::config::PdfConfig;
use crate::ocr::OcrBackend;
use crate::pdf::PdfReader;

/// Source of raw text for a document's first page.
///
/// Fails with `NotFound` when the path does not exist and with `Unreadable`
/// when the document contains no extractable page. Text is produced fresh on
/// every call, never cached.
pub trait TextSource {
    fn extract_text(&self, path: &Path) -> Result<String>;
}

/// Text source for real documents: images go straight to the OCR backend,
/// PDFs are read first-page-only.
pub struct DocumentTextSource {
    ocr: Box<dyn OcrBackend>,
    pdf: PdfConfig,
}

impl DocumentTextSource {
    pub fn new(ocr: Box<dyn OcrBackend>, pdf: PdfConfig) -> Self {
        Self { ocr, pdf }
    }

    fn extract_from_pdf(&self, path: &Path) -> Result<String> {
        let data = fs::read(path)?;
        let reader = match PdfReader::load(&data) {
            Ok(reader) => reader,
            Err(PdfError::NoPages) => {
                return Err(CheckrError::Unreadable(path.to_path_buf()));
            }
            Err(e) => return Err(e.into()),
        };

        debug!("Loaded PDF with {} pages", reader.page_count());

        // Text-bearing PDFs skip OCR entirely when the embedded text looks
        // substantial enough to carry the check fields.
        if self.pdf.prefer_embedded_text {
            if let Ok(text) = reader.extract_text() {
                if text.trim().len() >= self.pdf.min_text_length {
                    debug!("Using {} chars of embedded PDF text", text.len());
                    return Ok(text);
                }
            }
        }

        let image = match reader.first_page_image() {
            Ok(image) => image,
            Err(PdfError::ImageExtraction(_)) => {
                return Err(CheckrError::Unreadable(path.to_path_buf()));
            }
            Err(e) => return Err(e.into()),
        };

        let mut png = Vec::new();
        image.write_to(&mut Cursor::new(&mut png), image::ImageFormat::Png)?;

        Ok(self.ocr.recognize(&png)?)
    }
}

impl TextSource for DocumentTextSource {
    fn extract_text(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(CheckrError::NotFound(path.to_path_buf()));
        }

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        info!("Extracting text from {}", path.display());

        if extension == "pdf" {
            self.extract_from_pdf(path)
        } else {
            let bytes = fs::read(path)?;
            Ok(self.ocr.recognize(&bytes)?)
        }
    }
}

/// Returns a preset string for any existing path.
///
/// Test seam for exercising the rename pipeline without an OCR engine.
pub struct StaticTextSource {
    pub text: String,
}

impl StaticTextSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl TextSource for StaticTextSource {
    fn extract_text(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(CheckrError::NotFound(path.to_path_buf()));
        }
        Ok(self.text.clone())
    }
}
