use super::corpus::SAMPLE_SENTENCES;
use super::error::{TtsError, TtsResult};
use crate::infrastructure::repositories::PdfRepository;
use rand::seq::IndexedRandom;
use rand::Rng;
use std::path::PathBuf;

/// Polly rejects requests above 3000 billable characters
pub const MAX_TEXT_LENGTH: usize = 3000;

/// Default number of corpus sentences drawn for the fallback text
pub const DEFAULT_FALLBACK_SENTENCES: usize = 2;

/// Where the text to convert comes from, in precedence order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSource {
    Pdf(PathBuf),
    Literal(String),
    Fallback,
}

impl TextSource {
    /// Pick the authoritative input. A PDF always wins over literal text;
    /// blank literal text counts as absent.
    pub fn select(pdf_path: Option<PathBuf>, literal: Option<String>) -> Self {
        let literal = literal.filter(|text| !text.trim().is_empty());

        match (pdf_path, literal) {
            (Some(path), literal) => {
                if literal.is_some() {
                    tracing::warn!(
                        pdf = %path.display(),
                        "Both PDF and string input supplied, the PDF takes precedence"
                    );
                }
                TextSource::Pdf(path)
            }
            (None, Some(text)) => TextSource::Literal(text),
            (None, None) => TextSource::Fallback,
        }
    }
}

/// Decides the text that will be converted to speech
pub struct TextResolver<'a> {
    pdf_repo: &'a dyn PdfRepository,
    fallback_sentences: usize,
}

impl<'a> TextResolver<'a> {
    pub fn new(pdf_repo: &'a dyn PdfRepository) -> Self {
        Self {
            pdf_repo,
            fallback_sentences: DEFAULT_FALLBACK_SENTENCES,
        }
    }

    /// Number of corpus sentences drawn when no input is supplied.
    /// Clamped to the corpus size, and to at least one sentence.
    pub fn with_fallback_sentences(mut self, count: usize) -> Self {
        self.fallback_sentences = count.clamp(1, SAMPLE_SENTENCES.len());
        self
    }

    pub fn resolve<R: Rng + ?Sized>(&self, source: &TextSource, rng: &mut R) -> TtsResult<String> {
        let text = match source {
            TextSource::Pdf(path) => {
                let pages = self.pdf_repo.extract_pages(path)?;
                let text = pages.join("\n");
                if text.trim().is_empty() {
                    return Err(TtsError::EmptyExtraction { path: path.clone() });
                }
                tracing::info!(
                    pdf = %path.display(),
                    page_count = pages.len(),
                    text_length = text.len(),
                    "PDF input file processed successfully"
                );
                text
            }
            TextSource::Literal(text) => {
                tracing::info!(text_length = text.len(), "Using string input");
                text.clone()
            }
            TextSource::Fallback => {
                let text = self.sample_text(rng);
                tracing::info!(text = %text, "Random text generated");
                text
            }
        };

        check_text_length(&text)?;
        Ok(text)
    }

    fn sample_text<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        SAMPLE_SENTENCES
            .choose_multiple(rng, self.fallback_sentences)
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Local guard for the provider's request limits
pub fn check_text_length(text: &str) -> TtsResult<()> {
    if text.trim().is_empty() {
        return Err(TtsError::TextLength("text to synthesize is empty".to_string()));
    }
    let char_count = text.chars().count();
    if char_count > MAX_TEXT_LENGTH {
        return Err(TtsError::TextLength(format!(
            "text has {} characters, the maximum per request is {}",
            char_count, MAX_TEXT_LENGTH
        )));
    }
    Ok(())
}
