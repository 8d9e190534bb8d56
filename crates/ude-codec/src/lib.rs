//! Probers for the universal charset detector.
//!
//! Every prober consumes bytes one at a time and never fails: input a
//! hypothesis cannot explain retires it with `ProbingState::NotMe`.

pub mod bom;
pub mod escape;
pub mod hebrew;
pub mod latin1;
pub mod models;
pub mod multibyte;
pub mod prober;
pub mod single_byte;
pub mod state_machine;
pub mod tables;

pub use bom::BomProber;
pub use escape::EscapeProber;
pub use hebrew::HebrewProber;
pub use latin1::Latin1Prober;
pub use multibyte::{MultiByteGroup, MultiByteKind, MultiByteProber};
pub use prober::{feed_until_found, HighByteFilter, LatinFilter, Prober};
pub use single_byte::{SequenceModel, SingleByteGroup, SingleByteProber};
pub use state_machine::{CodingModel, CodingStateMachine, Step};
pub use tables::validate_tables;
