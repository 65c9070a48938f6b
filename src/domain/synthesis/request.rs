use super::credentials::Credentials;
use super::error::TtsResult;
use super::options::{Accent, OutputFormat, SampleRate, Voice};
use super::output::OutputDestination;
use super::text::{check_text_length, TextResolver, TextSource};
use rand::seq::IndexedRandom;
use rand::Rng;
use std::path::PathBuf;

/// Caller-supplied inputs for a single run
#[derive(Clone, Default)]
pub struct RequestSettings {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub pdf_path: Option<PathBuf>,
    pub text: Option<String>,
    pub use_temp_dir: bool,
    pub file_prefix: Option<String>,
}

/// Mutable configuration stage of a synthesis request.
///
/// Text is resolved once, at construction. The four choices start at their
/// defaults and can be overridden any number of times; a rejected value
/// leaves the previous one in place. [`build`](Self::build) freezes the
/// configuration into a [`SynthesisRequest`].
///
/// Format and sample rate are checked against each other on every change,
/// so the builder never holds an incompatible pair. Moving from a high rate
/// to `pcm` therefore means lowering the rate first: from `mp3` at 24000,
/// `choose_output_format("pcm")` is refused until `choose_sample_rate("8000")`
/// or `"16000"` has been applied.
#[derive(Debug)]
pub struct SynthesisRequestBuilder {
    credentials: Credentials,
    text: String,
    voice: Voice,
    accent: Accent,
    output_format: OutputFormat,
    sample_rate: SampleRate,
    destination: OutputDestination,
}

impl SynthesisRequestBuilder {
    pub fn new<R: Rng + ?Sized>(
        settings: RequestSettings,
        resolver: &TextResolver<'_>,
        rng: &mut R,
    ) -> TtsResult<Self> {
        let credentials = Credentials::new(&settings.access_key_id, &settings.secret_access_key)?;

        let source = TextSource::select(settings.pdf_path, settings.text);
        let text = resolver.resolve(&source, rng)?;

        let destination =
            OutputDestination::new(settings.use_temp_dir, settings.file_prefix.as_deref());

        Ok(Self {
            credentials,
            text,
            voice: Voice::default(),
            accent: Accent::default(),
            output_format: OutputFormat::default(),
            sample_rate: SampleRate::default(),
            destination,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn voice(&self) -> Voice {
        self.voice
    }

    pub fn accent(&self) -> Accent {
        self.accent
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output_format
    }

    pub fn sample_rate(&self) -> SampleRate {
        self.sample_rate
    }

    pub fn destination(&self) -> &OutputDestination {
        &self.destination
    }

    pub fn choose_voice(&mut self, voice: &str) -> TtsResult<&mut Self> {
        self.voice = voice.parse()?;
        tracing::info!(voice = %self.voice, "Setting voice");
        Ok(self)
    }

    pub fn choose_accent(&mut self, accent: &str) -> TtsResult<&mut Self> {
        self.accent = accent.parse()?;
        tracing::info!(
            accent = %self.accent,
            accent_name = self.accent.display_name(),
            "Setting accent"
        );
        Ok(self)
    }

    /// Switching format is refused when the current sample rate is not
    /// supported by the new format.
    pub fn choose_output_format(&mut self, format: &str) -> TtsResult<&mut Self> {
        let format: OutputFormat = format.parse()?;
        format.check_sample_rate(self.sample_rate)?;
        self.output_format = format;
        tracing::info!(output_format = %self.output_format, "Setting output format");
        Ok(self)
    }

    pub fn choose_sample_rate(&mut self, rate: &str) -> TtsResult<&mut Self> {
        let rate: SampleRate = rate.parse()?;
        self.output_format.check_sample_rate(rate)?;
        self.sample_rate = rate;
        tracing::info!(sample_rate = %self.sample_rate, "Setting sample rate");
        Ok(self)
    }

    /// Overrides any previous voice choice
    pub fn random_voice<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &mut Self {
        self.voice = Voice::ALL.choose(rng).copied().unwrap_or_default();
        tracing::info!(voice = %self.voice, "Using random voice");
        self
    }

    /// Overrides any previous accent choice
    pub fn random_accent<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &mut Self {
        self.accent = Accent::ALL.choose(rng).copied().unwrap_or_default();
        tracing::info!(
            accent = %self.accent,
            accent_name = self.accent.display_name(),
            "Using random accent"
        );
        self
    }

    /// Freeze the configuration. Nothing on the returned request can change.
    pub fn build(self) -> TtsResult<SynthesisRequest> {
        check_text_length(&self.text)?;
        self.output_format.check_sample_rate(self.sample_rate)?;

        tracing::debug!(
            voice = %self.voice,
            accent = %self.accent,
            output_format = %self.output_format,
            sample_rate = %self.sample_rate,
            text_length = self.text.len(),
            "Synthesis request configured"
        );

        Ok(SynthesisRequest {
            credentials: self.credentials,
            text: self.text,
            voice: self.voice,
            accent: self.accent,
            output_format: self.output_format,
            sample_rate: self.sample_rate,
            destination: self.destination,
        })
    }
}

/// A validated, immutable synthesis request
#[derive(Debug)]
pub struct SynthesisRequest {
    credentials: Credentials,
    text: String,
    voice: Voice,
    accent: Accent,
    output_format: OutputFormat,
    sample_rate: SampleRate,
    destination: OutputDestination,
}

impl SynthesisRequest {
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn voice(&self) -> Voice {
        self.voice
    }

    pub fn accent(&self) -> Accent {
        self.accent
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output_format
    }

    pub fn sample_rate(&self) -> SampleRate {
        self.sample_rate
    }

    pub fn destination(&self) -> &OutputDestination {
        &self.destination
    }
}
