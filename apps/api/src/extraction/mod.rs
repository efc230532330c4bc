//! Text extraction — turns an uploaded PDF/DOCX into plain text for the analyzer.
//!
//! Default: `DocumentExtractor` (stages bytes to a temp file, parses on the blocking pool).
//! `AppState` holds an `Arc<dyn TextExtractor>` so tests can swap in a fake backend.

pub mod docx;
pub mod pdf;
pub mod staging;

use std::fmt;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;
use tracing::debug;

use crate::extraction::staging::StagedUpload;

/// Accepted upload formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
}

impl DocumentKind {
    /// Classifies by the last extension, case-insensitively. `None` for anything
    /// that is not `.pdf` / `.docx`, including names without a dot.
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let (_, ext) = file_name.rsplit_once('.')?;
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(DocumentKind::Pdf),
            "docx" => Some(DocumentKind::Docx),
            _ => None,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            DocumentKind::Pdf => "pdf",
            DocumentKind::Docx => "docx",
        }
    }

    fn label(self) -> &'static str {
        match self {
            DocumentKind::Pdf => "PDF",
            DocumentKind::Docx => "DOCX",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Error)]
pub enum ExtractionError {
    /// The document could not be parsed.
    #[error("Error reading {kind}: {reason}")]
    Unreadable { kind: DocumentKind, reason: String },

    /// The upload could not be written to temporary storage.
    #[error("Failed to stage upload: {0}")]
    Staging(#[from] std::io::Error),

    #[error("Extraction task failed: {0}")]
    Task(String),
}

impl ExtractionError {
    pub fn unreadable(kind: DocumentKind, reason: impl fmt::Display) -> Self {
        ExtractionError::Unreadable {
            kind,
            reason: reason.to_string(),
        }
    }
}

/// The extraction backend trait. Returns either the full document text or an
/// explicit failure; callers never see a sentinel string.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(&self, kind: DocumentKind, bytes: Bytes) -> Result<String, ExtractionError>;
}

/// Extracts text from a file on disk. Blocking; call from `spawn_blocking`.
pub fn extract_from_path(kind: DocumentKind, path: &Path) -> Result<String, ExtractionError> {
    match kind {
        DocumentKind::Pdf => pdf::extract_pdf_text(path),
        DocumentKind::Docx => docx::extract_docx_text(path),
    }
}

/// Default backend: writes the upload into `upload_dir`, extracts, and removes the
/// staged file when done (also on failure or panic).
pub struct DocumentExtractor {
    upload_dir: PathBuf,
}

impl DocumentExtractor {
    pub fn new(upload_dir: impl Into<PathBuf>) -> Self {
        Self {
            upload_dir: upload_dir.into(),
        }
    }
}

#[async_trait]
impl TextExtractor for DocumentExtractor {
    async fn extract(&self, kind: DocumentKind, bytes: Bytes) -> Result<String, ExtractionError> {
        let upload_dir = self.upload_dir.clone();

        let joined = tokio::task::spawn_blocking(move || {
            let staged = StagedUpload::write(&upload_dir, kind, &bytes)?;
            debug!(path = %staged.path().display(), size = bytes.len(), "Staged upload");
            extract_from_path(kind, staged.path())
            // `staged` drops here and the temp file is removed
        })
        .await;

        match joined {
            Ok(result) => result,
            // pdf-extract can panic on malformed input; the staged file is still
            // removed during unwinding.
            Err(e) if e.is_panic() => Err(ExtractionError::unreadable(
                kind,
                "document parser panicked on malformed input",
            )),
            Err(e) => Err(ExtractionError::Task(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_file_name() {
        assert_eq!(DocumentKind::from_file_name("cv.pdf"), Some(DocumentKind::Pdf));
        assert_eq!(DocumentKind::from_file_name("CV.PDF"), Some(DocumentKind::Pdf));
        assert_eq!(
            DocumentKind::from_file_name("my.resume.Docx"),
            Some(DocumentKind::Docx)
        );
    }

    #[test]
    fn test_kind_rejects_other_extensions() {
        assert_eq!(DocumentKind::from_file_name("cv.doc"), None);
        assert_eq!(DocumentKind::from_file_name("cv.pdf.exe"), None);
        assert_eq!(DocumentKind::from_file_name("pdf"), None);
        assert_eq!(DocumentKind::from_file_name(""), None);
        assert_eq!(DocumentKind::from_file_name("cv."), None);
    }

    #[test]
    fn test_unreadable_message_format() {
        let err = ExtractionError::unreadable(DocumentKind::Pdf, "bad xref");
        assert_eq!(err.to_string(), "Error reading PDF: bad xref");
        let err = ExtractionError::unreadable(DocumentKind::Docx, "not a zip");
        assert_eq!(err.to_string(), "Error reading DOCX: not a zip");
    }

    #[tokio::test]
    async fn test_document_extractor_rejects_garbage_pdf() {
        let dir = tempfile::tempdir().unwrap();
        let extractor = DocumentExtractor::new(dir.path());
        let result = extractor
            .extract(DocumentKind::Pdf, Bytes::from_static(b"this is not a pdf"))
            .await;
        assert!(matches!(
            result,
            Err(ExtractionError::Unreadable {
                kind: DocumentKind::Pdf,
                ..
            })
        ));
        // staged file is gone regardless of the outcome
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_document_extractor_reads_docx() {
        let dir = tempfile::tempdir().unwrap();
        let extractor = DocumentExtractor::new(dir.path());
        let bytes = docx::tests::build_docx(&["Experience", "Skills: Rust"]);
        let text = extractor
            .extract(DocumentKind::Docx, Bytes::from(bytes))
            .await
            .unwrap();
        assert_eq!(text, "Experience\nSkills: Rust\n");
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
