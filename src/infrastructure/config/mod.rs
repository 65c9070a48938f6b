use crate::domain::synthesis::text::DEFAULT_FALLBACK_SENTENCES;
use crate::domain::synthesis::RequestSettings;
use crate::infrastructure::repositories::DEFAULT_REGION;
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
    #[error("invalid value '{value}' for {var}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Clone, Deserialize)]
pub struct Config {
    // AWS
    pub aws_access_key: String,
    pub aws_secret_access_key: String,
    pub aws_region: String,
    pub polly_endpoint_url: Option<String>,
    // Input
    pub pdf_input_path: Option<PathBuf>,
    pub text_input: Option<String>,
    pub fallback_sentences: usize,
    // Output
    pub use_temp_dir: bool,
    pub output_dir: PathBuf,
    pub output_prefix: Option<String>,
    // Voice choices
    pub voice_id: Option<String>,
    pub eng_accent: Option<String>,
    pub output_format: Option<String>,
    pub sample_rate: Option<String>,
    pub random_voice: bool,
    pub random_accent: bool,
    pub log_format: LogFormat,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("aws_access_key", &self.aws_access_key)
            .field("aws_secret_access_key", &"[REDACTED]")
            .field("aws_region", &self.aws_region)
            .field("polly_endpoint_url", &self.polly_endpoint_url)
            .field("pdf_input_path", &self.pdf_input_path)
            .field("text_input", &self.text_input)
            .field("fallback_sentences", &self.fallback_sentences)
            .field("use_temp_dir", &self.use_temp_dir)
            .field("output_dir", &self.output_dir)
            .field("output_prefix", &self.output_prefix)
            .field("voice_id", &self.voice_id)
            .field("eng_accent", &self.eng_accent)
            .field("output_format", &self.output_format)
            .field("sample_rate", &self.sample_rate)
            .field("random_voice", &self.random_voice)
            .field("random_accent", &self.random_accent)
            .field("log_format", &self.log_format)
            .finish()
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key/value source. Blank values
    /// count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let required = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));
        let flag = |key: &str| {
            get(key)
                .map(|v| matches!(v.trim().to_lowercase().as_str(), "true" | "1" | "yes"))
                .unwrap_or(false)
        };

        let fallback_sentences = match get("FALLBACK_SENTENCES") {
            Some(value) => value.trim().parse::<usize>().map_err(|_| ConfigError::Invalid {
                var: "FALLBACK_SENTENCES",
                value,
            })?,
            None => DEFAULT_FALLBACK_SENTENCES,
        };

        let config = Config {
            aws_access_key: required("AWS_ACCESS_KEY")?,
            aws_secret_access_key: required("AWS_SECRET_ACCESS_KEY")?,
            aws_region: get("AWS_REGION").unwrap_or_else(|| DEFAULT_REGION.to_string()),
            polly_endpoint_url: get("POLLY_ENDPOINT_URL"),
            pdf_input_path: get("PDF_INPUT_PATH").map(PathBuf::from),
            text_input: get("TEXT_INPUT"),
            fallback_sentences,
            use_temp_dir: flag("USE_TEMP_DIR"),
            output_dir: get("OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".")),
            output_prefix: get("OUTPUT_PREFIX"),
            voice_id: get("VOICE_ID"),
            eng_accent: get("ENG_ACCENT"),
            output_format: get("OUTPUT_FORMAT"),
            sample_rate: get("SAMPLE_RATE"),
            random_voice: flag("RANDOM_VOICE"),
            random_accent: flag("RANDOM_ACCENT"),
            log_format: get("LOG_FORMAT")
                .map(|s| match s.to_lowercase().as_str() {
                    "json" => LogFormat::Json,
                    _ => LogFormat::Pretty,
                })
                .unwrap_or(LogFormat::Pretty),
        };

        Ok(config)
    }

    pub fn request_settings(&self) -> RequestSettings {
        RequestSettings {
            access_key_id: self.aws_access_key.clone(),
            secret_access_key: self.aws_secret_access_key.clone(),
            pdf_path: self.pdf_input_path.clone(),
            text: self.text_input.clone(),
            use_temp_dir: self.use_temp_dir,
            file_prefix: self.output_prefix.clone(),
        }
    }
}
