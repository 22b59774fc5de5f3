//! Bar group markup
//!
//! Each flushed group becomes its own `<table>` with two rows. A row reads:
//! leading boundary, time signature half, slots separated by plain dividers,
//! trailing boundary.

use super::cells::{boundary_cell, signature_cell, slot_cell, Row};
use crate::layout::{BarGroup, Boundary, LaidOutSection, Slot};
use crate::models::TimeSignature;

pub fn render_group(group: &BarGroup, time_signature: &TimeSignature) -> String {
    format!(
        "<table>\n{}{}</table>",
        render_row(group, Row::Upper, &time_signature.upper, group.bar().upper()),
        render_row(group, Row::Lower, &time_signature.lower, group.bar().lower()),
    )
}

/// Markup for every group of a section, one table per line
pub fn render_section_lines(section: &LaidOutSection) -> String {
    section
        .groups
        .iter()
        .map(|group| render_group(group, &section.time_signature))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_row(group: &BarGroup, row: Row, half: &str, slots: &[Slot]) -> String {
    let divider = format!("\n{}\n", boundary_cell(Boundary::Limiter, row));
    let cells = slots.iter().map(slot_cell).collect::<Vec<_>>().join(divider.as_str());

    format!(
        "<tr>\n{}\n{}\n{}\n{}\n</tr>\n",
        boundary_cell(group.leading_boundary(), row),
        signature_cell(half),
        cells,
        boundary_cell(group.trailing_boundary(), row),
    )
}
