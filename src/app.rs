use crate::domain::synthesis::{SynthesisRequestBuilder, TextResolver, TtsService};
use crate::error::AppResult;
use crate::infrastructure::config::Config;
use crate::infrastructure::repositories::{PdfRepository, TtsRepository};
use rand::Rng;
use std::path::PathBuf;
use std::sync::Arc;

/// One full run: resolve text, apply configured choices, synthesize, write.
pub async fn run<R: Rng + ?Sized>(
    config: &Config,
    pdf_repo: &dyn PdfRepository,
    tts_repo: Arc<dyn TtsRepository>,
    rng: &mut R,
) -> AppResult<PathBuf> {
    let resolver =
        TextResolver::new(pdf_repo).with_fallback_sentences(config.fallback_sentences);
    let mut builder =
        SynthesisRequestBuilder::new(config.request_settings(), &resolver, &mut *rng)?;

    if let Some(voice) = &config.voice_id {
        builder.choose_voice(voice)?;
    }
    if let Some(accent) = &config.eng_accent {
        builder.choose_accent(accent)?;
    }
    if let Some(format) = &config.output_format {
        builder.choose_output_format(format)?;
    }
    if let Some(rate) = &config.sample_rate {
        builder.choose_sample_rate(rate)?;
    }
    if config.random_voice {
        builder.random_voice(&mut *rng);
    }
    if config.random_accent {
        builder.random_accent(&mut *rng);
    }

    let request = builder.build()?;
    let service = TtsService::new(tts_repo, config.output_dir.clone());
    let path = service.complete(request).await?;

    Ok(path)
}
