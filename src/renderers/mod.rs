//! Renderers for chord sheets
//!
//! Converts laid-out sections into output markup.

pub mod html;

pub use html::assemble_body;
