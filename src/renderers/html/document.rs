//! Document assembly
//!
//! Walks the song's sections in declaration order, drives a fresh
//! [`SectionLayout`] for each one, and joins every section heading and its
//! lines into the document body.

use super::group::render_section_lines;
use super::title::render_section_title;
use crate::layout::{LaidOutSection, SectionLayout};
use crate::models::{ChordEntry, LayoutSettings, Section, SongConfig};

/// Body markup for the whole song
pub fn assemble_body(song: &SongConfig) -> String {
    let last_index = song.sections.len().saturating_sub(1);

    song.sections
        .iter()
        .enumerate()
        .map(|(index, section)| render_section(section, &song.settings, index == last_index))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Heading followed by the section's lines
pub fn render_section(section: &Section, settings: &LayoutSettings, is_last_section: bool) -> String {
    let laid_out = layout_section(section, settings, is_last_section);
    log::debug!(
        "Section {:?}: {} line(s), {} slot(s)",
        section.title,
        laid_out.groups.len(),
        laid_out.slot_count()
    );
    format!(
        "{}\n{}",
        render_section_title(&section.title),
        render_section_lines(&laid_out)
    )
}

/// Run every entry of `section` through a fresh layout
pub fn layout_section(
    section: &Section,
    settings: &LayoutSettings,
    is_last_section: bool,
) -> LaidOutSection {
    section
        .entries
        .iter()
        .fold(SectionLayout::from_settings(settings), apply_entry)
        .finalize(is_last_section)
}

/// Apply one chord entry. A group places all of its items, then breaks the line.
pub fn apply_entry(layout: SectionLayout, entry: &ChordEntry) -> SectionLayout {
    match entry {
        ChordEntry::Chord(chord) => layout.add_chord(&chord.name, chord.duration),
        ChordEntry::Repeat { count } => layout.end_line_with_repetition(*count),
        ChordEntry::Group(items) => items.iter().fold(layout, apply_entry).request_linebreak(),
    }
}
