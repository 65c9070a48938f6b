use std::path::Path;

pub fn assert_audio_file(path: &Path, expected_extension: &str, expected_bytes: &[u8]) {
    assert_eq!(
        path.extension().and_then(|e| e.to_str()),
        Some(expected_extension),
        "unexpected extension for {}",
        path.display()
    );
    let written = std::fs::read(path).expect("audio file should exist");
    assert!(!written.is_empty(), "audio file {} is empty", path.display());
    assert_eq!(written, expected_bytes);
}

pub fn assert_no_files(dir: &Path) {
    let entries: Vec<_> = std::fs::read_dir(dir)
        .expect("output dir should exist")
        .collect();
    assert!(
        entries.is_empty(),
        "expected no files in {}, found {}",
        dir.display(),
        entries.len()
    );
}
