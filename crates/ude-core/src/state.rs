use core::fmt;

use crate::registry::Charset;

/// Verdict of a single prober.
///
/// `FoundIt` and `NotMe` are terminal until the prober is reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbingState {
    Detecting,
    FoundIt,
    NotMe,
}

impl ProbingState {
    pub fn is_terminal(self) -> bool {
        !matches!(self, ProbingState::Detecting)
    }
}

/// Outcome of a detection session.
///
/// `confidence` is only meaningful when `charset` is present; an absent
/// charset means the stream stayed unresolved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectionResult {
    pub charset: Option<Charset>,
    pub confidence: f32,
    pub bom_detected: bool,
}

impl DetectionResult {
    pub const fn unresolved() -> Self {
        Self {
            charset: None,
            confidence: 0.0,
            bom_detected: false,
        }
    }

    pub const fn resolved(charset: Charset, confidence: f32) -> Self {
        Self {
            charset: Some(charset),
            confidence,
            bom_detected: false,
        }
    }

    pub const fn from_bom(charset: Charset) -> Self {
        Self {
            charset: Some(charset),
            confidence: crate::SURE_CONFIDENCE,
            bom_detected: true,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.charset.is_some()
    }

    pub fn charset_name(&self) -> Option<&'static str> {
        self.charset.map(Charset::name)
    }
}

impl Default for DetectionResult {
    fn default() -> Self {
        Self::unresolved()
    }
}

impl fmt::Display for DetectionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.charset {
            Some(charset) => {
                write!(f, "Charset: {}, confidence: {:.2}", charset, self.confidence)?;
                if self.bom_detected {
                    f.write_str(", BOM")?;
                }
                Ok(())
            }
            None => f.write_str("Detection failed."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_report_format() {
        let r = DetectionResult::resolved(Charset::Koi8R, 0.742);
        assert_eq!(r.to_string(), "Charset: KOI8-R, confidence: 0.74");
        assert_eq!(DetectionResult::from_bom(Charset::Utf8).to_string(), "Charset: UTF-8, confidence: 1.00, BOM");
        assert_eq!(DetectionResult::unresolved().to_string(), "Detection failed.");
    }
}
