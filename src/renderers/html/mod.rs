//! HTML rendering of laid-out chord sheets
//!
//! - `cells`: individual `<td>` cells and chord-name normalization
//! - `group`: one `<table>` per flushed line
//! - `title`: section headings
//! - `document`: walks the song and builds the document body

pub mod cells;
pub mod document;
pub mod group;
pub mod title;

pub use cells::{escape_html, normalize_chord, REPEAT_GLYPH};
pub use document::{apply_entry, assemble_body, layout_section, render_section};
pub use group::{render_group, render_section_lines};
pub use title::render_section_title;
