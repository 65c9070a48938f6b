use crate::domain::synthesis::{SynthesisRequest, TtsResult};
use async_trait::async_trait;

/// Repository for TTS synthesis operations.
/// Abstracts the underlying TTS provider (AWS Polly, or a fake in tests).
///
/// Implementations are responsible for:
/// - Signing the call with the request's credentials
/// - Mapping the voice, accent, format and sample rate onto provider parameters
/// - Reporting provider failures as `TtsError::Synthesis` with a category
#[async_trait]
pub trait TtsRepository: Send + Sync {
    /// Synthesize the request's text in a single round trip
    ///
    /// Returns the complete audio (or speech-mark JSON) payload
    ///
    /// # Errors
    /// Returns `TtsError::Synthesis` if the provider rejects the request or
    /// cannot be reached
    async fn synthesize(&self, request: &SynthesisRequest) -> TtsResult<Vec<u8>>;
}
