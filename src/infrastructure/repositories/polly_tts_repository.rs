use super::tts_repository::TtsRepository;
use crate::domain::synthesis::{
    OutputFormat as RequestFormat, SynthesisFailureKind, SynthesisRequest, TtsError, TtsResult,
};
use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_credential_types::Credentials as AwsCredentials;
use aws_sdk_polly::{
    error::{DisplayErrorContext, ProvideErrorMetadata, SdkError},
    types::{LanguageCode, OutputFormat, SpeechMarkType, VoiceId},
    Client as PollyClient,
};

/// Default region, as the free-tier voices are all available there
pub const DEFAULT_REGION: &str = "us-east-1";

const CREDENTIALS_PROVIDER_NAME: &str = "pdf-tts";

/// AWS Polly implementation of TTS repository
pub struct PollyTtsRepository {
    region: String,
    endpoint_url: Option<String>,
}

impl PollyTtsRepository {
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            endpoint_url: None,
        }
    }

    /// Send requests to a custom endpoint instead of the regional one
    pub fn with_endpoint_url(mut self, endpoint_url: impl Into<String>) -> Self {
        self.endpoint_url = Some(endpoint_url.into());
        self
    }

    /// Build a client signed with the request's static credentials.
    /// The default credential chain is never consulted.
    async fn client(&self, request: &SynthesisRequest) -> PollyClient {
        let credentials = request.credentials();
        let aws_credentials = AwsCredentials::new(
            credentials.access_key_id(),
            credentials.secret_access_key(),
            None,
            None,
            CREDENTIALS_PROVIDER_NAME,
        );

        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(self.region.clone()))
            .credentials_provider(aws_credentials)
            .load()
            .await;

        let mut builder = aws_sdk_polly::config::Builder::from(&sdk_config);
        if let Some(endpoint_url) = &self.endpoint_url {
            builder = builder.endpoint_url(endpoint_url);
        }

        tracing::info!(region = %self.region, "AWS Polly client initialized");
        PollyClient::from_conf(builder.build())
    }
}

fn output_format_to_sdk(format: RequestFormat) -> OutputFormat {
    match format {
        RequestFormat::Json => OutputFormat::Json,
        RequestFormat::Mp3 => OutputFormat::Mp3,
        RequestFormat::OggVorbis => OutputFormat::OggVorbis,
        RequestFormat::Pcm => OutputFormat::Pcm,
    }
}

/// Map an AWS error code onto a failure category
fn classify_error_code(code: Option<&str>) -> SynthesisFailureKind {
    match code {
        Some(
            "UnrecognizedClientException"
            | "InvalidClientTokenId"
            | "InvalidSignatureException"
            | "SignatureDoesNotMatch"
            | "AccessDeniedException"
            | "ExpiredTokenException"
            | "MissingAuthenticationToken",
        ) => SynthesisFailureKind::Authentication,
        Some("ThrottlingException" | "TooManyRequestsException" | "Throttling") => {
            SynthesisFailureKind::Throttling
        }
        Some(
            "TextLengthExceededException"
            | "InvalidSampleRateException"
            | "LanguageNotSupportedException"
            | "MarksNotSupportedForFormatException"
            | "SsmlMarksNotSupportedForTextTypeException"
            | "EngineNotSupportedException"
            | "InvalidSsmlException"
            | "LexiconNotFoundException"
            | "ValidationException",
        ) => SynthesisFailureKind::InvalidParameter,
        _ => SynthesisFailureKind::Service,
    }
}

fn classify_sdk_error<E, R>(err: &SdkError<E, R>) -> SynthesisFailureKind
where
    E: ProvideErrorMetadata,
{
    match err {
        SdkError::DispatchFailure(_) | SdkError::TimeoutError(_) => SynthesisFailureKind::Network,
        _ => classify_error_code(err.code()),
    }
}

#[async_trait]
impl TtsRepository for PollyTtsRepository {
    async fn synthesize(&self, request: &SynthesisRequest) -> TtsResult<Vec<u8>> {
        let client = self.client(request).await;

        let voice_id = VoiceId::from(request.voice().as_str());
        let language_code = LanguageCode::from(request.accent().as_str());
        let output_format = output_format_to_sdk(request.output_format());

        tracing::info!(
            voice_id = ?voice_id,
            language_code = ?language_code,
            output_format = ?output_format,
            sample_rate = %request.sample_rate(),
            text_length = request.text().len(),
            text_preview = %request.text().chars().take(200).collect::<String>(),
            "Calling AWS Polly synthesize_speech"
        );

        let mut call = client
            .synthesize_speech()
            .text(request.text())
            .voice_id(voice_id)
            .language_code(language_code)
            .output_format(output_format);

        // Speech marks need explicit mark types and take no sample rate
        call = match request.output_format() {
            RequestFormat::Json => call
                .speech_mark_types(SpeechMarkType::Sentence)
                .speech_mark_types(SpeechMarkType::Word),
            _ => call.sample_rate(request.sample_rate().as_str()),
        };

        let result = call.send().await.map_err(|e| {
            let kind = classify_sdk_error(&e);
            let message = e
                .message()
                .map(str::to_string)
                .unwrap_or_else(|| DisplayErrorContext(&e).to_string());
            tracing::error!(
                error = %DisplayErrorContext(&e),
                error_code = e.code().unwrap_or("unknown"),
                category = %kind,
                "AWS Polly synthesize_speech failed"
            );
            TtsError::Synthesis { kind, message }
        })?;

        tracing::debug!(
            content_type = result.content_type().unwrap_or("unknown"),
            request_characters = result.request_characters(),
            "AWS Polly synthesize_speech successful, reading audio stream"
        );

        let audio_stream = result.audio_stream.collect().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to collect audio stream from Polly response");
            TtsError::Synthesis {
                kind: SynthesisFailureKind::Network,
                message: format!("Failed to read audio stream: {}", e),
            }
        })?;

        let audio_bytes = audio_stream.into_bytes().to_vec();
        tracing::debug!(
            audio_size = audio_bytes.len(),
            "Audio stream collected successfully"
        );

        Ok(audio_bytes)
    }
}
