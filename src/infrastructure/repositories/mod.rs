pub mod pdf_repository;
pub mod polly_tts_repository;
pub mod tts_repository;

pub use pdf_repository::{LopdfPdfRepository, PdfRepository};
pub use polly_tts_repository::{PollyTtsRepository, DEFAULT_REGION};
pub use tts_repository::TtsRepository;
