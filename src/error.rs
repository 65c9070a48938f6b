use crate::domain::synthesis::{InvalidChoiceError, TtsError};
use crate::infrastructure::config::ConfigError;

/// Main application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Tts(#[from] TtsError),
}

impl From<InvalidChoiceError> for AppError {
    fn from(err: InvalidChoiceError) -> Self {
        AppError::Tts(TtsError::from(err))
    }
}

impl AppError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => 2,
            Self::Tts(err) => match err {
                TtsError::Configuration(_) => 2,
                TtsError::InvalidChoice(_) => 3,
                TtsError::InputAccess { .. }
                | TtsError::EmptyExtraction { .. }
                | TtsError::TextLength(_) => 4,
                TtsError::Synthesis { .. } => 5,
                TtsError::Output { .. } => 6,
            },
        }
    }

    /// Log the error loudly before the process exits
    pub fn report(&self) {
        tracing::error!(
            error = %self,
            exit_code = self.exit_code(),
            "Run failed"
        );
    }
}

/// Custom result type for the application
pub type AppResult<T> = Result<T, AppError>;
