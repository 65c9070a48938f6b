use super::error::{SynthesisFailureKind, TtsError, TtsResult};
use super::request::SynthesisRequest;
use super::text::check_text_length;
use crate::infrastructure::repositories::TtsRepository;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs::{File, OpenOptions};
use tokio::io::{AsyncWrite, AsyncWriteExt};

/// Upper bound on `_N` suffixes tried before giving up on a free filename
const MAX_NAME_ATTEMPTS: u32 = 10_000;

/// Terminal step of a run: submit the frozen request, persist the audio
pub struct TtsService {
    tts_repo: Arc<dyn TtsRepository>,
    working_dir: PathBuf,
}

impl TtsService {
    pub fn new(tts_repo: Arc<dyn TtsRepository>, working_dir: PathBuf) -> Self {
        Self {
            tts_repo,
            working_dir,
        }
    }

    /// Synthesize the request and write the audio artifact.
    ///
    /// The request is consumed; it cannot be reconfigured or submitted twice.
    /// Returns the path written. On failure nothing is left on disk.
    pub async fn complete(&self, request: SynthesisRequest) -> TtsResult<PathBuf> {
        check_text_length(request.text())?;
        request
            .output_format()
            .check_sample_rate(request.sample_rate())?;

        let directory = request.destination().directory(&self.working_dir);
        tracing::info!(
            voice = %request.voice(),
            accent = %request.accent(),
            output_format = %request.output_format(),
            sample_rate = %request.sample_rate(),
            text_length = request.text().len(),
            use_temp_dir = request.destination().use_temp_dir(),
            directory = %directory.display(),
            "Submitting synthesis request"
        );

        let start_time = std::time::Instant::now();
        let audio = self.tts_repo.synthesize(&request).await?;
        if audio.is_empty() {
            return Err(TtsError::Synthesis {
                kind: SynthesisFailureKind::EmptyAudio,
                message: "provider returned no audio data".to_string(),
            });
        }

        tracing::info!(
            latency_ms = start_time.elapsed().as_millis(),
            audio_size_bytes = audio.len(),
            "Speech successfully synthesized"
        );

        let path = write_audio(&request, &directory, &audio).await?;
        tracing::info!(path = %path.display(), "Audio file successfully written");

        Ok(path)
    }
}

/// Write to the first free candidate path. `create_new` makes the
/// existence check and the creation a single step, so an existing file is
/// never overwritten.
async fn write_audio(
    request: &SynthesisRequest,
    directory: &Path,
    audio: &[u8],
) -> TtsResult<PathBuf> {
    tokio::fs::create_dir_all(directory)
        .await
        .map_err(|source| TtsError::Output {
            path: directory.to_path_buf(),
            source,
        })?;

    let extension = request.output_format().extension();

    for attempt in 0..MAX_NAME_ATTEMPTS {
        let path = request
            .destination()
            .candidate_path(directory, extension, attempt);

        match OpenOptions::new().write(true).create_new(true).open(&path).await {
            Ok(file) => {
                write_file(file, &path, audio).await?;
                return Ok(path);
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                tracing::debug!(path = %path.display(), "Output file exists, trying next name");
            }
            Err(source) => return Err(TtsError::Output { path, source }),
        }
    }

    Err(TtsError::Output {
        path: request
            .destination()
            .candidate_path(directory, extension, 0),
        source: std::io::Error::new(
            ErrorKind::AlreadyExists,
            format!("no free file name after {} attempts", MAX_NAME_ATTEMPTS),
        ),
    })
}

async fn write_file(mut file: File, path: &Path, audio: &[u8]) -> TtsResult<()> {
    let result = match write_contents(&mut file, audio).await {
        Ok(()) => file.sync_all().await,
        Err(e) => Err(e),
    };
    drop(file);

    match result {
        Ok(()) => Ok(()),
        Err(source) => Err(discard_partial(path, source).await),
    }
}

async fn write_contents<W>(writer: &mut W, audio: &[u8]) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    writer.write_all(audio).await?;
    writer.flush().await
}

/// Remove a half-written artifact and report the write failure
async fn discard_partial(path: &Path, source: std::io::Error) -> TtsError {
    tracing::error!(path = %path.display(), error = %source, "Failed to write audio file");
    if let Err(e) = tokio::fs::remove_file(path).await {
        tracing::warn!(path = %path.display(), error = %e, "Failed to remove partial audio file");
    }
    TtsError::Output {
        path: path.to_path_buf(),
        source,
    }
}
