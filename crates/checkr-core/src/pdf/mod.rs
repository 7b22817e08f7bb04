//! PDF processing module.
//!
//! Checks arrive either as text-bearing PDFs or as scans wrapping a single
//! page image. Only the first page is ever consulted.

mod reader;

pub use reader::PdfReader;

use crate::error::PdfError;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;
