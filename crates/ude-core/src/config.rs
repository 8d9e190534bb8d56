use serde::Deserialize;

use crate::error::UdeError;

/// Calibration of the statistical probers and the publish decision.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct DetectorConfig {
    /// Best hypothesis must exceed this to be published at finalize.
    pub publish_threshold: f32,
    pub multi_byte: MultiByteConfig,
    pub single_byte: SingleByteConfig,
    /// Scale applied to the Latin-1 class-pair score.
    pub latin1_scale: f32,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct MultiByteConfig {
    /// Tracked characters needed before the frequency ratio is trusted.
    pub min_chars: u32,
    /// Share of non-frequent characters above which confidence collapses.
    pub unrecognized_cutoff: f32,
    /// Tracked characters before a sure confidence may end detection.
    pub enough_chars: u32,
    pub sure_threshold: f32,
    /// UTF-8 confidence that ends detection.
    pub utf8_shortcut: f32,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct SingleByteConfig {
    /// Ranked pairs needed before the positive ratio is trusted.
    pub min_sequences: u32,
    pub negative_cutoff: f32,
    /// Observations needed before the negative ratio can retire a model.
    pub negative_min_sample: u32,
    /// Ranked pairs after which the shortcuts below apply.
    pub enough_sequences: u32,
    pub positive_shortcut: f32,
    pub negative_shortcut: f32,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            publish_threshold: 0.20,
            multi_byte: MultiByteConfig::default(),
            single_byte: SingleByteConfig::default(),
            latin1_scale: 0.5,
        }
    }
}

impl Default for MultiByteConfig {
    fn default() -> Self {
        Self {
            min_chars: 6,
            unrecognized_cutoff: 0.95,
            enough_chars: 1024,
            sure_threshold: 0.95,
            utf8_shortcut: 0.95,
        }
    }
}

impl Default for SingleByteConfig {
    fn default() -> Self {
        Self {
            min_sequences: 16,
            negative_cutoff: 0.35,
            negative_min_sample: 64,
            enough_sequences: 1024,
            positive_shortcut: 0.95,
            negative_shortcut: 0.05,
        }
    }
}

fn unit(name: &str, value: f32) -> Result<(), UdeError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(UdeError::Config(format!("{} must be within [0, 1], got {}", name, value)))
    }
}

fn positive(name: &str, value: u32) -> Result<(), UdeError> {
    if value > 0 {
        Ok(())
    } else {
        Err(UdeError::Config(format!("{} must be greater than zero", name)))
    }
}

impl DetectorConfig {
    /// Rejects calibrations the probers cannot run with. NaN fails the
    /// range checks.
    pub fn validate(&self) -> Result<(), UdeError> {
        unit("publish_threshold", self.publish_threshold)?;
        unit("latin1_scale", self.latin1_scale)?;

        let mb = &self.multi_byte;
        positive("multi_byte.min_chars", mb.min_chars)?;
        positive("multi_byte.enough_chars", mb.enough_chars)?;
        unit("multi_byte.unrecognized_cutoff", mb.unrecognized_cutoff)?;
        unit("multi_byte.sure_threshold", mb.sure_threshold)?;
        unit("multi_byte.utf8_shortcut", mb.utf8_shortcut)?;

        let sb = &self.single_byte;
        positive("single_byte.min_sequences", sb.min_sequences)?;
        positive("single_byte.negative_min_sample", sb.negative_min_sample)?;
        positive("single_byte.enough_sequences", sb.enough_sequences)?;
        unit("single_byte.negative_cutoff", sb.negative_cutoff)?;
        unit("single_byte.positive_shortcut", sb.positive_shortcut)?;
        unit("single_byte.negative_shortcut", sb.negative_shortcut)?;
        if sb.negative_shortcut >= sb.positive_shortcut {
            return Err(UdeError::Config(
                "single_byte.negative_shortcut must be below positive_shortcut".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(DetectorConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let cfg: DetectorConfig = toml::from_str(
            "publish_threshold = 0.3\n[single_byte]\nnegative_cutoff = 0.5\n",
        )
        .unwrap();
        assert_eq!(cfg.publish_threshold, 0.3);
        assert_eq!(cfg.single_byte.negative_cutoff, 0.5);
        assert_eq!(cfg.single_byte.min_sequences, 16);
        assert_eq!(cfg.multi_byte, MultiByteConfig::default());
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let mut cfg = DetectorConfig::default();
        cfg.multi_byte.sure_threshold = 1.5;
        assert!(matches!(cfg.validate(), Err(UdeError::Config(_))));

        let mut cfg = DetectorConfig::default();
        cfg.single_byte.min_sequences = 0;
        assert!(cfg.validate().is_err());

        let mut cfg = DetectorConfig::default();
        cfg.publish_threshold = f32::NAN;
        assert!(cfg.validate().is_err());

        let mut cfg = DetectorConfig::default();
        cfg.single_byte.negative_shortcut = 0.99;
        assert!(cfg.validate().is_err());
    }
}
