//! Document loading: size cap, PDF sniffing, and text extraction.

use crate::error::{CliError, Result};
use std::fs;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use tracing::{debug, info};

/// Leading bytes of every PDF file.
const PDF_MAGIC: &[u8] = b"%PDF-";

/// Returns true if the buffer starts with the PDF header.
pub fn is_pdf(head: &[u8]) -> bool {
    head.starts_with(PDF_MAGIC)
}

/// Read a document from disk and return its text.
///
/// With `plain_text` the file is read as UTF-8; otherwise it must be a PDF.
/// Files larger than `max_bytes` are rejected before being read.
pub fn read_document(path: &Path, plain_text: bool, max_bytes: usize) -> Result<String> {
    let size = fs::metadata(path)?.len();
    if size > max_bytes as u64 {
        return Err(CliError::DocumentTooLarge {
            size,
            limit: max_bytes,
        });
    }

    let bytes = fs::read(path)?;
    info!(path = %path.display(), bytes = bytes.len(), "Loaded document");

    let text = if plain_text {
        String::from_utf8(bytes)
            .map_err(|_| CliError::InvalidInput(format!("{} is not UTF-8 text", path.display())))?
    } else {
        if !is_pdf(&bytes) {
            return Err(CliError::NotPdf(path.display().to_string()));
        }
        extract_pdf_text(&bytes)?
    };

    if text.trim().is_empty() {
        return Err(CliError::NoTextExtracted);
    }

    Ok(text)
}

/// Extract text from an in-memory PDF.
///
/// `pdf-extract` panics on some malformed inputs, so the call is isolated.
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String> {
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem(bytes)
    }));

    match outcome {
        Ok(Ok(text)) => {
            debug!(chars = text.len(), "Extracted PDF text");
            Ok(text)
        }
        Ok(Err(e)) => Err(CliError::PdfExtraction(e.to_string())),
        Err(_) => Err(CliError::PdfExtraction("malformed PDF".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_file(contents: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents).unwrap();
        file
    }

    #[test]
    fn test_pdf_magic() {
        assert!(is_pdf(b"%PDF-1.7\n..."));
        assert!(!is_pdf(b"PK\x03\x04"));
        assert!(!is_pdf(b""));
    }

    #[test]
    fn test_plain_text_document() {
        let file = temp_file(b"The Tenant shall pay rent monthly.");
        let text = read_document(file.path(), true, 1024).unwrap();
        assert_eq!(text, "The Tenant shall pay rent monthly.");
    }

    #[test]
    fn test_oversized_document_rejected() {
        let file = temp_file(&[b'a'; 64]);
        match read_document(file.path(), true, 16) {
            Err(CliError::DocumentTooLarge { size, limit }) => {
                assert_eq!(size, 64);
                assert_eq!(limit, 16);
            }
            other => panic!("Expected DocumentTooLarge, got {:?}", other),
        }
    }

    #[test]
    fn test_non_pdf_rejected() {
        let file = temp_file(b"just some text");
        let error = read_document(file.path(), false, 1024).unwrap_err();
        assert!(matches!(error, CliError::NotPdf(_)));
        assert!(error.is_client_error());
    }

    #[test]
    fn test_blank_text_is_no_text_extracted() {
        let file = temp_file(b"  \n\t ");
        assert!(matches!(
            read_document(file.path(), true, 1024),
            Err(CliError::NoTextExtracted)
        ));
    }

    #[test]
    fn test_truncated_pdf_is_extraction_error() {
        let file = temp_file(b"%PDF-1.4\nnot really a pdf");
        let error = read_document(file.path(), false, 1024).unwrap_err();
        assert!(matches!(
            error,
            CliError::PdfExtraction(_) | CliError::NoTextExtracted
        ));
        assert_eq!(error.exit_code(), 2);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let error = read_document(Path::new("/nonexistent/contract.pdf"), false, 1024).unwrap_err();
        assert!(matches!(error, CliError::Io(_)));
    }
}
