use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use futures::stream::{self, StreamExt};
use ude_core::{DetectionResult, DetectorConfig, UdeError};
use ude_detector::CharsetDetector;

pub type FileOutcome = (PathBuf, Result<DetectionResult, UdeError>);

/// Detects one file with a fresh detector. Blocking.
pub fn detect_file(
    path: &Path,
    config: DetectorConfig,
    max_bytes: Option<u64>,
) -> Result<DetectionResult, UdeError> {
    let mut detector = CharsetDetector::with_config(config)?;
    let file = File::open(path)?;
    let read = match max_bytes {
        Some(limit) => detector.feed_reader(file.take(limit))?,
        None => detector.feed_reader(file)?,
    };
    detector.finalize();
    tracing::debug!("{}: read {} bytes", path.display(), read);
    Ok(detector.result())
}

/// Detects every path with at most `workers` files in flight.
/// Outcomes come back in input order.
pub async fn scan(
    paths: Vec<PathBuf>,
    config: DetectorConfig,
    max_bytes: Option<u64>,
    workers: usize,
) -> Vec<FileOutcome> {
    let mut outcomes: Vec<(usize, FileOutcome)> = stream::iter(paths.into_iter().enumerate())
        .map(|(index, path)| async move {
            let task_path = path.clone();
            let outcome = tokio::task::spawn_blocking(move || detect_file(&task_path, config, max_bytes))
                .await
                .unwrap_or_else(|e| Err(UdeError::Io(io::Error::new(io::ErrorKind::Other, e.to_string()))));
            (index, (path, outcome))
        })
        .buffer_unordered(workers.max(1))
        .collect()
        .await;
    outcomes.sort_by_key(|(index, _)| *index);
    outcomes.into_iter().map(|(_, outcome)| outcome).collect()
}

pub fn render(path: &Path, outcome: &Result<DetectionResult, UdeError>) -> String {
    match outcome {
        Ok(result) => format!("{}: {}", path.display(), result),
        Err(e) => format!("{}: error: {}", path.display(), e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use ude_core::Charset;

    fn fixture(bytes: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(bytes).unwrap();
        file
    }

    #[test]
    fn utf8_file_is_detected() {
        let file = fixture("Москва является столицей России. ".repeat(20).as_bytes());
        let result = detect_file(file.path(), DetectorConfig::default(), None).unwrap();
        assert_eq!(result.charset, Some(Charset::Utf8));
        assert_eq!(
            render(file.path(), &Ok(result)),
            format!("{}: Charset: UTF-8, confidence: 1.00", file.path().display())
        );
    }

    #[test]
    fn max_bytes_limits_the_read() {
        let mut bytes = b"plain ascii header ".to_vec();
        bytes.extend_from_slice("Москва".as_bytes());
        let file = fixture(&bytes);
        let result = detect_file(file.path(), DetectorConfig::default(), Some(10)).unwrap();
        assert_eq!(result.charset, Some(Charset::Ascii));
    }

    #[test]
    fn empty_file_fails_detection() {
        let file = fixture(b"");
        let result = detect_file(file.path(), DetectorConfig::default(), None).unwrap();
        assert_eq!(
            render(file.path(), &Ok(result)),
            format!("{}: Detection failed.", file.path().display())
        );
    }

    #[tokio::test]
    async fn scan_keeps_input_order_and_reports_errors() {
        let bom = fixture(&[0xFF, 0xFE, b'h', 0x00]);
        let ascii = fixture(b"hello");
        let missing = PathBuf::from("/nonexistent/udetect-input.txt");
        let paths = vec![bom.path().to_path_buf(), missing.clone(), ascii.path().to_path_buf()];

        let outcomes = scan(paths, DetectorConfig::default(), None, 2).await;

        assert_eq!(outcomes.len(), 3);
        let result = outcomes[0].1.as_ref().unwrap();
        assert_eq!(result.charset, Some(Charset::Utf16Le));
        assert!(result.bom_detected);
        assert_eq!(outcomes[1].0, missing);
        assert!(matches!(outcomes[1].1, Err(UdeError::Io(_))));
        assert_eq!(outcomes[2].1.as_ref().unwrap().charset, Some(Charset::Ascii));
    }
}
