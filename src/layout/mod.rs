//! Bar layout
//!
//! Turns a section's chord events into lines of fixed-width bar slots.
//! Markup generation lives in [`crate::renderers::html`]; this module only
//! decides which slots end up on which line and how each line is tagged.

pub mod bar;
pub mod engine;
pub mod group;

pub use bar::{Bar, Slot};
pub use engine::{LaidOutSection, SectionLayout};
pub use group::{BarGroup, Boundary, GroupMarks};
