use std::path::PathBuf;

/// A value that is not on one of the fixed allow-lists
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidChoiceError {
    #[error("invalid {field}: '{value}' is not available. Valid values: {}", valid.join(", "))]
    NotAllowed {
        field: &'static str,
        value: String,
        valid: Vec<String>,
    },
    #[error(
        "sample rate {rate} is not supported by output format '{format}'. Valid rates for '{format}': {}",
        valid.join(", ")
    )]
    FormatRateMismatch {
        format: String,
        rate: String,
        valid: Vec<String>,
    },
}

impl InvalidChoiceError {
    pub fn not_allowed<I, S>(field: &'static str, value: &str, valid: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        Self::NotAllowed {
            field,
            value: value.to_string(),
            valid: valid.into_iter().map(|v| v.to_string()).collect(),
        }
    }
}

/// Category of a failed synthesis call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SynthesisFailureKind {
    Authentication,
    Throttling,
    InvalidParameter,
    Network,
    Service,
    EmptyAudio,
}

impl std::fmt::Display for SynthesisFailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SynthesisFailureKind::Authentication => "authentication",
            SynthesisFailureKind::Throttling => "throttling",
            SynthesisFailureKind::InvalidParameter => "invalid parameter",
            SynthesisFailureKind::Network => "network",
            SynthesisFailureKind::Service => "service",
            SynthesisFailureKind::EmptyAudio => "empty audio",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TtsError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error(transparent)]
    InvalidChoice(#[from] InvalidChoiceError),
    #[error("cannot read PDF '{}': {reason}", path.display())]
    InputAccess { path: PathBuf, reason: String },
    #[error("PDF '{}' contains no extractable text", path.display())]
    EmptyExtraction { path: PathBuf },
    #[error("invalid text length: {0}")]
    TextLength(String),
    #[error("synthesis failed ({kind}): {message}")]
    Synthesis {
        kind: SynthesisFailureKind,
        message: String,
    },
    #[error("cannot write audio file '{}': {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type TtsResult<T> = Result<T, TtsError>;
