use std::path::Path;

use serde::Deserialize;
use ude_core::{DetectorConfig, UdeError};

/// Contents of `udetect.toml`. Every section and key is optional.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct CliConfig {
    pub detector: DetectorConfig,
    pub scan: ScanConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ScanConfig {
    /// Read at most this many bytes of each file. `None` reads it whole.
    pub max_bytes: Option<u64>,
    /// Files in flight at once.
    pub workers: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            max_bytes: None,
            workers: num_cpus::get(),
        }
    }
}

impl CliConfig {
    pub fn parse(text: &str, origin: &str) -> Result<Self, UdeError> {
        toml::from_str(text).map_err(|e| UdeError::ConfigParse {
            path: origin.to_string(),
            message: e.to_string(),
        })
    }

    pub fn load(path: &Path) -> Result<Self, UdeError> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text, &path.display().to_string())
    }

    pub fn validate(&self) -> Result<(), UdeError> {
        self.detector.validate()?;
        if self.scan.workers == 0 {
            return Err(UdeError::Config("scan.workers must be greater than zero".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_file_gives_defaults() {
        let cfg = CliConfig::parse("", "inline").unwrap();
        assert_eq!(cfg.scan, ScanConfig::default());
        assert_eq!(cfg.detector, DetectorConfig::default());
        assert!(cfg.scan.workers >= 1);
    }

    #[test]
    fn sections_are_read() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[detector]\npublish_threshold = 0.4\n[detector.multi_byte]\nmin_chars = 10\n\n[scan]\nmax_bytes = 4096\nworkers = 3"
        )
        .unwrap();
        let cfg = CliConfig::load(file.path()).unwrap();
        assert_eq!(cfg.detector.publish_threshold, 0.4);
        assert_eq!(cfg.detector.multi_byte.min_chars, 10);
        assert_eq!(cfg.scan.max_bytes, Some(4096));
        assert_eq!(cfg.scan.workers, 3);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn malformed_toml_names_the_origin() {
        let err = CliConfig::parse("[scan\nworkers = 2", "broken.toml").unwrap_err();
        match err {
            UdeError::ConfigParse { path, .. } => assert_eq!(path, "broken.toml"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn zero_workers_is_rejected() {
        let cfg = CliConfig::parse("[scan]\nworkers = 0", "inline").unwrap();
        assert!(matches!(cfg.validate(), Err(UdeError::Config(_))));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = CliConfig::load(Path::new("/nonexistent/udetect.toml")).unwrap_err();
        assert!(matches!(err, UdeError::Io(_)));
    }
}
