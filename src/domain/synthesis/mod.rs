pub mod corpus;
pub mod credentials;
pub mod error;
pub mod options;
pub mod output;
pub mod request;
pub mod service;
pub mod text;

pub use credentials::Credentials;
pub use error::{InvalidChoiceError, SynthesisFailureKind, TtsError, TtsResult};
pub use options::{Accent, OutputFormat, SampleRate, Voice};
pub use output::OutputDestination;
pub use request::{RequestSettings, SynthesisRequest, SynthesisRequestBuilder};
pub use service::TtsService;
pub use text::{TextResolver, TextSource, MAX_TEXT_LENGTH};
