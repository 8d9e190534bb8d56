//! # UDE: Universal Charset Detection Engine
//!
//! Guesses the character encoding of an unlabeled byte stream.
//!
//! ```
//! let result = ude::detect("Москва является столицей России.".as_bytes());
//! assert_eq!(result.charset, Some(ude::Charset::Utf8));
//! ```
//!
//! Layers, bottom up:
//! - `ude_dsa`: bit-packed lookup tables.
//! - `ude_core`: charset registry, results, calibration, errors.
//! - `ude_codec`: state machines, language models and probers.
//! - `ude_detector`: the streaming orchestrator.

pub use ude_codec as codec;
pub use ude_dsa as dsa;

pub use ude_detector::{
    detect, Charset, CharsetDetector, DetectionResult, DetectorConfig, InputMode, Phase,
    ProbingState, UdeError,
};
pub use ude_core::{MultiByteConfig, SingleByteConfig, LOW_CONFIDENCE, SURE_CONFIDENCE};
