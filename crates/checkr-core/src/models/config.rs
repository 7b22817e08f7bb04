//! Configuration structures for the check renaming pipeline.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration for the checkr pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckrConfig {
    /// OCR backend configuration.
    pub ocr: OcrConfig,

    /// PDF processing configuration.
    pub pdf: PdfConfig,

    /// Field extraction configuration.
    pub extraction: ExtractionConfig,

    /// Rename behavior configuration.
    pub rename: RenameConfig,
}

impl Default for CheckrConfig {
    fn default() -> Self {
        Self {
            ocr: OcrConfig::default(),
            pdf: PdfConfig::default(),
            extraction: ExtractionConfig::default(),
            rename: RenameConfig::default(),
        }
    }
}

/// OCR backend configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OcrConfig {
    /// Tesseract language code.
    pub lang: String,

    /// Tesseract data directory; None uses the system default.
    pub data_path: Option<PathBuf>,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            lang: "eng".to_string(),
            data_path: None,
        }
    }
}

/// PDF processing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Try embedded text before falling back to OCR on the page image.
    pub prefer_embedded_text: bool,

    /// Minimum text length to consider embedded text usable.
    pub min_text_length: usize,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            prefer_embedded_text: true,
            min_text_length: 50,
        }
    }
}

/// Field extraction configuration.
///
/// Selected once at orchestrator construction; the strategy is never switched
/// mid-call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Use LLM-assisted extraction instead of the regex rules.
    pub use_llm: bool,

    /// API credential for the LLM path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Model name for the LLM path.
    pub model: String,

    /// Chat-completions endpoint for the LLM path.
    pub api_url: String,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            use_llm: false,
            api_key: None,
            model: "gpt-4o-mini".to_string(),
            api_url: "https://api.openai.com/v1/chat/completions".to_string(),
        }
    }
}

/// Rename behavior configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenameConfig {
    /// What to do when the target path already exists.
    pub on_collision: CollisionPolicy,
}

impl Default for RenameConfig {
    fn default() -> Self {
        Self {
            on_collision: CollisionPolicy::Suffix,
        }
    }
}

/// Policy for an already-existing target path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollisionPolicy {
    /// Append `_1`, `_2`, ... before the extension until a free name is found.
    Suffix,
    /// Let the move replace whatever is at the target path.
    Overwrite,
    /// Refuse the move with an `AlreadyExists` I/O error.
    Fail,
}

impl CheckrConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}
