use chrono::Utc;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use uuid::Uuid;

const GENERATED_PREFIX: &str = "pdf_tts";

static UNSAFE_FILENAME_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9._-]+").expect("filename pattern is valid"));

/// Where the audio artifact will be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputDestination {
    use_temp_dir: bool,
    file_stem: String,
}

impl OutputDestination {
    /// Use the supplied prefix as the file stem, or generate one when the
    /// prefix is absent or has no filename-safe characters.
    pub fn new(use_temp_dir: bool, prefix: Option<&str>) -> Self {
        let file_stem = match prefix.and_then(sanitize_prefix) {
            Some(stem) => stem,
            None => {
                let stem = generate_file_stem();
                tracing::info!(file_stem = %stem, "Generated random file name");
                stem
            }
        };

        Self {
            use_temp_dir,
            file_stem,
        }
    }

    pub fn use_temp_dir(&self) -> bool {
        self.use_temp_dir
    }

    pub fn file_stem(&self) -> &str {
        &self.file_stem
    }

    /// Directory the file lands in: the system temp dir or the working dir
    pub fn directory(&self, working_dir: &Path) -> PathBuf {
        if self.use_temp_dir {
            std::env::temp_dir()
        } else {
            working_dir.to_path_buf()
        }
    }

    /// Candidate path for a write attempt. Attempt 0 is the plain name,
    /// later attempts append `_1`, `_2`, ... before the extension.
    pub fn candidate_path(&self, directory: &Path, extension: &str, attempt: u32) -> PathBuf {
        let file_name = if attempt == 0 {
            format!("{}.{}", self.file_stem, extension)
        } else {
            format!("{}_{}.{}", self.file_stem, attempt, extension)
        };
        directory.join(file_name)
    }
}

/// `pdf_tts_<UTC timestamp>_<random token>`
pub fn generate_file_stem() -> String {
    let token = Uuid::new_v4().simple().to_string();
    format!(
        "{}_{}_{}",
        GENERATED_PREFIX,
        Utc::now().format("%Y%m%dT%H%M%S"),
        &token[..8]
    )
}

fn sanitize_prefix(prefix: &str) -> Option<String> {
    let cleaned = UNSAFE_FILENAME_CHARS.replace_all(prefix.trim(), "_");
    let cleaned = cleaned.trim_matches(|c| c == '_' || c == '.');
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned.to_string())
    }
}
