use std::path::Path;

use crate::extraction::{DocumentKind, ExtractionError};

/// Extracts the text of every page, concatenated in page order.
///
/// Encrypted, scanned (image-only) and corrupt PDFs either fail here or yield
/// little or no text; the analyzer handles an empty string.
pub fn extract_pdf_text(path: &Path) -> Result<String, ExtractionError> {
    pdf_extract::extract_text(path).map_err(|e| ExtractionError::unreadable(DocumentKind::Pdf, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let result = extract_pdf_text(&dir.path().join("absent.pdf"));
        assert!(matches!(
            result,
            Err(ExtractionError::Unreadable {
                kind: DocumentKind::Pdf,
                ..
            })
        ));
    }

    #[test]
    fn test_non_pdf_bytes_are_unreadable() {
        let mut file = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
        file.write_all(b"%NOT-A-PDF plain text").unwrap();
        let err = extract_pdf_text(file.path()).unwrap_err();
        assert!(err.to_string().starts_with("Error reading PDF: "), "{err}");
    }
}
