//! Streaming charset detection.
//!
//! ```
//! use ude_detector::CharsetDetector;
//!
//! let mut detector = CharsetDetector::new();
//! detector.feed(b"plain ");
//! detector.feed(b"text");
//! detector.finalize();
//! assert_eq!(detector.charset_name(), Some("ASCII"));
//! ```

pub mod detector;

pub use detector::{detect, CharsetDetector, InputMode, Phase};
pub use ude_core::{Charset, DetectionResult, DetectorConfig, ProbingState, UdeError};
