//! The rename pipeline: text sourcing, extraction, and the file move.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::sanitize::sanitize_payee;
use crate::check::{ExtractionStrategy, LlmStrategy, RegexStrategy};
use crate::error::{CheckrError, ExtractionError, Result};
use crate::models::check::CheckFields;
use crate::models::config::{CheckrConfig, CollisionPolicy};
use crate::ocr::default_backend;
use crate::source::{DocumentTextSource, TextSource};

/// Coordinates extraction and the file move.
///
/// The only side-effecting component in the crate. Each call runs one linear
/// pass: source check, text extraction, field extraction, sanitization, move.
/// Nothing is retried and no state is shared between calls; concurrent calls
/// on the same source file must be serialized by the caller.
pub struct CheckRenamer {
    source: Box<dyn TextSource>,
    strategy: Box<dyn ExtractionStrategy>,
    on_collision: CollisionPolicy,
}

impl std::fmt::Debug for CheckRenamer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckRenamer")
            .field("on_collision", &self.on_collision)
            .finish_non_exhaustive()
    }
}

impl CheckRenamer {
    /// Build a renamer from configuration.
    ///
    /// The extraction strategy is chosen here, once; `use_llm` without a
    /// configured credential is a configuration error rather than a silent
    /// downgrade (the CLI resolves the env fallback before this point).
    pub fn from_config(config: &CheckrConfig) -> Result<Self> {
        let strategy: Box<dyn ExtractionStrategy> = if config.extraction.use_llm {
            let llm = LlmStrategy::from_config(&config.extraction)
                .map_err(|e| CheckrError::Config(e.to_string()))?;
            info!("Using LLM extraction with model {}", config.extraction.model);
            Box::new(llm)
        } else {
            Box::new(RegexStrategy::new())
        };

        let source = DocumentTextSource::new(default_backend(&config.ocr), config.pdf.clone());

        Ok(Self {
            source: Box::new(source),
            strategy,
            on_collision: config.rename.on_collision,
        })
    }

    /// Build a renamer from explicit parts. Used by tests and by callers that
    /// bring their own text source.
    pub fn with_parts(
        source: Box<dyn TextSource>,
        strategy: Box<dyn ExtractionStrategy>,
        on_collision: CollisionPolicy,
    ) -> Self {
        Self {
            source,
            strategy,
            on_collision,
        }
    }

    /// Extract check fields from a document without touching the filesystem.
    pub fn extract(&self, path: &Path) -> Result<CheckFields> {
        if !path.is_file() {
            return Err(CheckrError::NotFound(path.to_path_buf()));
        }

        let text = self.source.extract_text(path)?;
        Ok(self.strategy.extract(&text)?)
    }

    /// Extract fields from the file at `source_path` and move it to
    /// `{payee}_{check_number}{ext}`, in `output_dir` when given, otherwise
    /// alongside the source.
    ///
    /// The file is either left untouched at its original path or fully
    /// relocated; no partial rename is ever produced.
    pub fn rename(&self, source_path: &Path, output_dir: Option<&Path>) -> Result<PathBuf> {
        let fields = self.extract(source_path)?;

        let mut missing = fields.missing();
        let token = fields.payee.as_deref().map(sanitize_payee);

        // A payee that sanitizes away entirely cannot name a file.
        if let Some(ref token) = token {
            if token.is_empty() && !missing.iter().any(|m| m == "payee") {
                missing.insert(0, "payee".to_string());
            }
        }

        if !missing.is_empty() {
            warn!(
                "Extraction incomplete for {}: missing {}",
                source_path.display(),
                missing.join(", ")
            );
            return Err(ExtractionError::MissingFields { missing }.into());
        }

        let token = token.unwrap_or_default();
        let number = fields.check_number.unwrap_or_default();

        let directory = match output_dir {
            Some(dir) => {
                fs::create_dir_all(dir)?;
                dir.to_path_buf()
            }
            None => source_path.parent().unwrap_or(Path::new("")).to_path_buf(),
        };

        let file_name = build_file_name(&token, &number, source_path.extension());
        let target = self.resolve_collision(directory.join(file_name))?;

        debug!(
            "Renaming {} -> {}",
            source_path.display(),
            target.display()
        );

        // Atomic within one filesystem; cross-device moves fail and are
        // surfaced as-is, never retried.
        fs::rename(source_path, &target)?;

        info!("Renamed {} to {}", source_path.display(), target.display());
        Ok(target)
    }

    fn resolve_collision(&self, target: PathBuf) -> Result<PathBuf> {
        if !target.exists() {
            return Ok(target);
        }

        match self.on_collision {
            CollisionPolicy::Overwrite => Ok(target),
            CollisionPolicy::Fail => Err(CheckrError::Io(std::io::Error::new(
                std::io::ErrorKind::AlreadyExists,
                format!("target already exists: {}", target.display()),
            ))),
            CollisionPolicy::Suffix => {
                let stem = target
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or("check")
                    .to_string();
                let extension = target.extension().and_then(|e| e.to_str()).map(String::from);
                let parent = target.parent().unwrap_or(Path::new("")).to_path_buf();

                for n in 1u32.. {
                    let name = match &extension {
                        Some(ext) => format!("{stem}_{n}.{ext}"),
                        None => format!("{stem}_{n}"),
                    };
                    let candidate = parent.join(name);
                    if !candidate.exists() {
                        debug!(
                            "Target {} exists, using {}",
                            target.display(),
                            candidate.display()
                        );
                        return Ok(candidate);
                    }
                }
                unreachable!("suffix search is unbounded")
            }
        }
    }
}

fn build_file_name(token: &str, number: &str, extension: Option<&std::ffi::OsStr>) -> String {
    match extension.and_then(|e| e.to_str()) {
        Some(ext) => format!("{token}_{number}.{ext}"),
        None => format!("{token}_{number}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::StaticTextSource;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    const CHECK_TEXT: &str = "PAY TO THE ORDER OF  Jane   Doe\n$152.35\nCheck Number: 10234";

    fn renamer_with_text(text: &str) -> CheckRenamer {
        CheckRenamer::with_parts(
            Box::new(StaticTextSource::new(text)),
            Box::new(RegexStrategy::new()),
            CollisionPolicy::Suffix,
        )
    }

    fn write_check(dir: &TempDir, name: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, b"scanned check bytes").unwrap();
        path
    }

    #[test]
    fn test_rename_in_place() {
        let dir = TempDir::new().unwrap();
        let source = write_check(&dir, "check1.jpg");

        let target = renamer_with_text(CHECK_TEXT).rename(&source, None).unwrap();

        assert_eq!(target, dir.path().join("Jane_Doe_10234.jpg"));
        assert!(target.exists());
        assert!(!source.exists());
    }

    #[test]
    fn test_rename_into_created_output_dir() {
        let dir = TempDir::new().unwrap();
        let source = write_check(&dir, "check1.jpg");
        let out = dir.path().join("processed");
        assert!(!out.exists());

        let target = renamer_with_text(CHECK_TEXT)
            .rename(&source, Some(&out))
            .unwrap();

        assert_eq!(target, out.join("Jane_Doe_10234.jpg"));
        assert!(target.exists());
        assert!(!source.exists());
    }

    #[test]
    fn test_nonexistent_source_fails_without_mutation() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("ghost.jpg");

        let err = renamer_with_text(CHECK_TEXT)
            .rename(&missing, None)
            .unwrap_err();

        assert!(matches!(err, CheckrError::NotFound(_)));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_missing_payee_names_the_field_and_leaves_source() {
        let dir = TempDir::new().unwrap();
        let source = write_check(&dir, "check1.jpg");

        let err = renamer_with_text("Check Number: 10234")
            .rename(&source, None)
            .unwrap_err();

        match err {
            CheckrError::Extraction(ExtractionError::MissingFields { missing }) => {
                assert_eq!(missing, vec!["payee"]);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(source.exists());
    }

    #[test]
    fn test_missing_both_fields_names_both() {
        let dir = TempDir::new().unwrap();
        let source = write_check(&dir, "check1.jpg");

        let err = renamer_with_text("illegible").rename(&source, None).unwrap_err();

        match err {
            CheckrError::Extraction(ExtractionError::MissingFields { missing }) => {
                assert_eq!(missing, vec!["payee", "check_number"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_collision_appends_suffix() {
        let dir = TempDir::new().unwrap();
        let source = write_check(&dir, "check1.jpg");
        fs::write(dir.path().join("Jane_Doe_10234.jpg"), b"earlier check").unwrap();

        let target = renamer_with_text(CHECK_TEXT).rename(&source, None).unwrap();

        assert_eq!(target, dir.path().join("Jane_Doe_10234_1.jpg"));
        assert!(dir.path().join("Jane_Doe_10234.jpg").exists());
        assert!(target.exists());
    }

    #[test]
    fn test_collision_fail_policy() {
        let dir = TempDir::new().unwrap();
        let source = write_check(&dir, "check1.jpg");
        fs::write(dir.path().join("Jane_Doe_10234.jpg"), b"earlier check").unwrap();

        let renamer = CheckRenamer::with_parts(
            Box::new(StaticTextSource::new(CHECK_TEXT)),
            Box::new(RegexStrategy::new()),
            CollisionPolicy::Fail,
        );

        let err = renamer.rename(&source, None).unwrap_err();
        assert!(matches!(err, CheckrError::Io(_)));
        assert!(source.exists());
    }

    #[test]
    fn test_collision_overwrite_policy() {
        let dir = TempDir::new().unwrap();
        let source = write_check(&dir, "check1.jpg");
        fs::write(dir.path().join("Jane_Doe_10234.jpg"), b"earlier check").unwrap();

        let renamer = CheckRenamer::with_parts(
            Box::new(StaticTextSource::new(CHECK_TEXT)),
            Box::new(RegexStrategy::new()),
            CollisionPolicy::Overwrite,
        );

        let target = renamer.rename(&source, None).unwrap();

        assert_eq!(fs::read(&target).unwrap(), b"scanned check bytes");
        assert!(!source.exists());
    }

    #[test]
    fn test_extension_preserved_case() {
        let dir = TempDir::new().unwrap();
        let source = write_check(&dir, "scan.PNG");

        let target = renamer_with_text(CHECK_TEXT).rename(&source, None).unwrap();

        assert_eq!(target.file_name().unwrap(), "Jane_Doe_10234.PNG");
    }

    #[test]
    fn test_extract_does_not_move() {
        let dir = TempDir::new().unwrap();
        let source = write_check(&dir, "check1.jpg");

        let fields = renamer_with_text(CHECK_TEXT).extract(&source).unwrap();

        assert_eq!(fields, CheckFields::new("Jane Doe", "10234"));
        assert!(source.exists());
    }

    #[test]
    fn test_from_config_defaults_to_regex_strategy() {
        let config = CheckrConfig::default();
        assert!(CheckRenamer::from_config(&config).is_ok());
    }

    #[test]
    fn test_from_config_llm_without_credential_is_config_error() {
        let mut config = CheckrConfig::default();
        config.extraction.use_llm = true;

        let err = CheckRenamer::from_config(&config).unwrap_err();
        assert!(matches!(err, CheckrError::Config(_)));
    }
}
