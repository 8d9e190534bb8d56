//! Embedded detection tables.
//!
//! Everything here is `static` data evaluated at compile time; the probers
//! only hold references into it.

pub mod esc_sm;
pub mod freq;
pub mod lang;
pub mod mbcs_sm;
