//! Data models for chord sheets
//!
//! Song configuration, sections and chord entries as they look after the
//! one-time configuration resolution step.

pub mod song;

pub use song::*;
