use async_trait::async_trait;
use pdf_tts::domain::synthesis::{
    Accent, OutputFormat, SampleRate, SynthesisRequest, TtsError, TtsResult, Voice,
};
use pdf_tts::infrastructure::repositories::{PdfRepository, TtsRepository};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// What the synthesizer was asked to do
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub text: String,
    pub voice: Voice,
    pub accent: Accent,
    pub output_format: OutputFormat,
    pub sample_rate: SampleRate,
}

/// Synthesizer that records each call and answers with fixed audio
pub struct RecordingTtsRepository {
    audio: Vec<u8>,
    calls: AtomicUsize,
    recorded: Mutex<Vec<RecordedCall>>,
}

impl RecordingTtsRepository {
    pub fn new(audio: Vec<u8>) -> Self {
        Self {
            audio,
            calls: AtomicUsize::new(0),
            recorded: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_call(&self) -> Option<RecordedCall> {
        self.recorded.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl TtsRepository for RecordingTtsRepository {
    async fn synthesize(&self, request: &SynthesisRequest) -> TtsResult<Vec<u8>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.recorded.lock().unwrap().push(RecordedCall {
            text: request.text().to_string(),
            voice: request.voice(),
            accent: request.accent(),
            output_format: request.output_format(),
            sample_rate: request.sample_rate(),
        });
        Ok(self.audio.clone())
    }
}

/// PDF source returning canned pages for any path
pub struct FakePdfRepository {
    pages: Vec<String>,
    calls: AtomicUsize,
}

impl FakePdfRepository {
    pub fn with_pages(pages: &[&str]) -> Self {
        Self {
            pages: pages.iter().map(|p| p.to_string()).collect(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl PdfRepository for FakePdfRepository {
    fn extract_pages(&self, path: &Path) -> TtsResult<Vec<String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if path.extension().and_then(|e| e.to_str()) != Some("pdf") {
            return Err(TtsError::InputAccess {
                path: path.to_path_buf(),
                reason: "not a PDF file".to_string(),
            });
        }
        Ok(self.pages.clone())
    }
}
