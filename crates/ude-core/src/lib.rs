pub mod config;
pub mod error;
pub mod registry;
pub mod state;

pub use config::{DetectorConfig, MultiByteConfig, SingleByteConfig};
pub use error::UdeError;
pub use registry::Charset;
pub use state::{DetectionResult, ProbingState};

/// Flat confidence reported by statistical probers without enough evidence.
pub const LOW_CONFIDENCE: f32 = 0.01;

/// Confidence of a conclusive structural match.
pub const SURE_CONFIDENCE: f32 = 1.0;
