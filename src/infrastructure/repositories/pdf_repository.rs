use crate::domain::synthesis::{TtsError, TtsResult};
use lopdf::Document;
use std::path::Path;

/// Page-by-page text extraction from a PDF file
pub trait PdfRepository: Send + Sync {
    /// Text of every page, in page order
    ///
    /// # Errors
    /// Returns `TtsError::InputAccess` if the path lacks a `.pdf` extension,
    /// or the file is missing, unreadable or not a parseable PDF
    fn extract_pages(&self, path: &Path) -> TtsResult<Vec<String>>;
}

/// `lopdf` implementation of PDF text extraction
#[derive(Debug, Default, Clone, Copy)]
pub struct LopdfPdfRepository;

impl LopdfPdfRepository {
    pub fn new() -> Self {
        Self
    }
}

impl PdfRepository for LopdfPdfRepository {
    fn extract_pages(&self, path: &Path) -> TtsResult<Vec<String>> {
        let input_access = |reason: String| TtsError::InputAccess {
            path: path.to_path_buf(),
            reason,
        };

        let is_pdf = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
        if !is_pdf {
            tracing::error!(pdf = %path.display(), "Input file is not a PDF");
            return Err(input_access("expected a .pdf file".to_string()));
        }

        if !path.is_file() {
            return Err(input_access("file does not exist".to_string()));
        }

        let document = Document::load(path).map_err(|e| {
            tracing::error!(pdf = %path.display(), error = %e, "Failed to open PDF");
            input_access(e.to_string())
        })?;

        let pages = document.get_pages();
        tracing::debug!(pdf = %path.display(), page_count = pages.len(), "PDF loaded");

        let mut texts = Vec::with_capacity(pages.len());
        for page_number in pages.keys() {
            let text = document.extract_text(&[*page_number]).map_err(|e| {
                tracing::error!(
                    pdf = %path.display(),
                    page = page_number,
                    error = %e,
                    "Failed to extract page text"
                );
                input_access(format!("page {}: {}", page_number, e))
            })?;
            texts.push(text.trim_end().to_string());
        }

        Ok(texts)
    }
}
