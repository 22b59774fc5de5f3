//! Section layout engine
//!
//! Packs chord events into fixed-capacity bars and flushes full (or forcibly
//! ended) bars into [`BarGroup`]s. The engine is a plain value: every operation
//! takes it by value and hands back the next state, so a section's layout is a
//! fold over its entries.
//!
//! A bar is flushed when:
//! - it is full and another slot needs to be added,
//! - a line break was requested and the next chord arrives,
//! - a repeat marker ends the line,
//! - the section ends.

use super::bar::{Bar, Slot};
use super::group::{BarGroup, GroupMarks};
use crate::models::{LayoutSettings, TimeSignature};

/// Layout state for one section
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionLayout {
    capacity: usize,
    time_signature: TimeSignature,
    bar: Bar,
    pending_linebreak: bool,
    groups: Vec<BarGroup>,
}

/// Result of laying out a whole section
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LaidOutSection {
    pub time_signature: TimeSignature,
    pub groups: Vec<BarGroup>,
}

impl LaidOutSection {
    /// Total slot pairs across all groups
    pub fn slot_count(&self) -> usize {
        self.groups.iter().map(BarGroup::len).sum()
    }
}

impl SectionLayout {
    /// Fresh state; a capacity of zero is treated as one
    pub fn new(capacity: usize, time_signature: TimeSignature) -> Self {
        Self {
            capacity: capacity.max(1),
            time_signature,
            bar: Bar::new(),
            pending_linebreak: false,
            groups: Vec::new(),
        }
    }

    pub fn from_settings(settings: &LayoutSettings) -> Self {
        Self::new(settings.line_length, settings.time_signature.clone())
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Slots accumulated since the last flush
    pub fn bar(&self) -> &Bar {
        &self.bar
    }

    pub fn groups(&self) -> &[BarGroup] {
        &self.groups
    }

    pub fn pending_linebreak(&self) -> bool {
        self.pending_linebreak
    }

    /// Place a chord (or a rest, when `name` is empty) lasting `duration` slots.
    ///
    /// The chord always takes at least one slot. Remaining duration spills
    /// into blank slots, flushing whenever the bar fills up.
    pub fn add_chord(mut self, name: &str, duration: u32) -> Self {
        let break_now = self.pending_linebreak && !self.bar.is_empty();
        if break_now || self.is_full() {
            self.flush_open();
        }
        self.pending_linebreak = false;

        self.bar.push(Slot::for_name(name));
        for _ in 1..duration {
            if self.is_full() {
                self.flush_open();
            }
            self.bar.push_spacer();
        }
        self
    }

    /// End the current line right away, tagging it with a repeat glyph
    pub fn end_line_with_repetition(mut self, count: u32) -> Self {
        let marks = GroupMarks {
            repeat: Some(count),
            ..GroupMarks::first(self.groups.is_empty())
        };
        self.flush(marks);
        self.pending_linebreak = false;
        self
    }

    /// Make the next chord start on a new line
    pub fn request_linebreak(mut self) -> Self {
        self.pending_linebreak = true;
        self
    }

    /// Flush whatever is left and hand back the section's groups.
    ///
    /// A section that never flushed still yields one (possibly empty) group
    /// tagged first and last. `is_last_section` swaps the close bracket for the
    /// finish bracket.
    pub fn finalize(mut self, is_last_section: bool) -> LaidOutSection {
        if self.groups.is_empty() {
            self.flush(GroupMarks {
                first: true,
                last: true,
                finish: is_last_section,
                repeat: None,
            });
        } else if !self.bar.is_empty() {
            self.flush(GroupMarks {
                last: true,
                finish: is_last_section,
                ..GroupMarks::default()
            });
        }

        LaidOutSection {
            time_signature: self.time_signature,
            groups: self.groups,
        }
    }

    fn is_full(&self) -> bool {
        self.bar.len() >= self.capacity
    }

    /// Flush a line that neither ends the section nor repeats
    fn flush_open(&mut self) {
        let marks = GroupMarks::first(self.groups.is_empty());
        self.flush(marks);
    }

    fn flush(&mut self, marks: GroupMarks) {
        let bar = std::mem::take(&mut self.bar);
        log::debug!(
            "Flushing group {} with {} slot(s) {:?}",
            self.groups.len(),
            bar.len(),
            marks
        );
        self.groups.push(BarGroup::new(bar, marks));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::group::Boundary;

    fn layout(capacity: usize) -> SectionLayout {
        SectionLayout::new(capacity, TimeSignature::default())
    }

    fn lengths(section: &LaidOutSection) -> Vec<usize> {
        section.groups.iter().map(BarGroup::len).collect()
    }

    #[test]
    fn test_five_chords_on_four_slot_line() {
        let section = ["C", "G", "Am", "F", "C"]
            .iter()
            .fold(layout(4), |l, name| l.add_chord(name, 1))
            .finalize(false);

        assert_eq!(lengths(&section), vec![4, 1]);
        assert!(section.groups[0].marks().first);
        assert!(!section.groups[0].marks().last);
        assert!(section.groups[1].marks().last);
        assert!(!section.groups[1].marks().first);
    }

    #[test]
    fn test_full_bar_is_not_flushed_until_needed() {
        let state = layout(2).add_chord("C", 1).add_chord("G", 1);
        assert!(state.groups().is_empty());
        assert_eq!(state.bar().len(), 2);

        let state = state.add_chord("D", 1);
        assert_eq!(state.groups().len(), 1);
        assert_eq!(state.bar().chord_labels(), vec!["D"]);
    }

    #[test]
    fn test_long_duration_wraps_across_lines() {
        let section = layout(4).add_chord("C", 3).add_chord("G", 6).finalize(false);
        assert_eq!(lengths(&section), vec![4, 4, 1]);
        assert_eq!(section.slot_count(), 9);
        assert_eq!(section.groups[0].bar().chord_labels(), vec!["C", "G"]);
        assert!(section.groups[1].bar().chord_labels().is_empty());
        assert!(section.groups[1].marks() == GroupMarks::first(false));
    }

    #[test]
    fn test_no_group_exceeds_capacity() {
        let mut state = layout(3);
        for duration in [1, 5, 2, 7, 1, 1, 4] {
            state = state.add_chord("X", duration);
        }
        let section = state.finalize(true);
        assert!(section.groups.iter().all(|g| g.len() <= 3));
        assert_eq!(section.slot_count(), 21);
    }

    #[test]
    fn test_linebreak_forces_new_line() {
        let section = layout(12)
            .add_chord("C", 1)
            .add_chord("G", 1)
            .request_linebreak()
            .add_chord("Am", 1)
            .finalize(false);

        assert_eq!(lengths(&section), vec![2, 1]);
        assert_eq!(section.groups[1].bar().chord_labels(), vec!["Am"]);
    }

    #[test]
    fn test_linebreak_flag_cleared_after_use() {
        let state = layout(12)
            .add_chord("C", 1)
            .request_linebreak()
            .add_chord("G", 1);
        assert!(!state.pending_linebreak());
        let section = state.add_chord("D", 1).finalize(false);
        assert_eq!(lengths(&section), vec![1, 2]);
    }

    #[test]
    fn test_repetition_flushes_partial_bar() {
        let section = layout(12)
            .add_chord("C", 2)
            .end_line_with_repetition(2)
            .add_chord("F", 1)
            .finalize(false);

        assert_eq!(lengths(&section), vec![2, 1]);
        assert_eq!(section.groups[0].marks().repeat, Some(2));
        assert_eq!(section.groups[0].trailing_boundary(), Boundary::Repeat(2));
        assert_eq!(section.groups[0].leading_boundary(), Boundary::Begin);
        assert_eq!(section.groups[1].leading_boundary(), Boundary::Start);
    }

    #[test]
    fn test_repetition_after_linebreak_does_not_emit_empty_line() {
        let section = layout(12)
            .add_chord("C", 1)
            .request_linebreak()
            .end_line_with_repetition(1)
            .add_chord("G", 1)
            .finalize(false);

        assert_eq!(lengths(&section), vec![1, 1]);
    }

    #[test]
    fn test_section_ending_on_repeat_adds_no_trailing_group() {
        let section = layout(4)
            .add_chord("C", 4)
            .end_line_with_repetition(3)
            .finalize(true);

        assert_eq!(section.groups.len(), 1);
        assert_eq!(section.groups[0].trailing_boundary(), Boundary::Repeat(3));
    }

    #[test]
    fn test_empty_section_yields_single_group() {
        let section = layout(4).finalize(false);
        assert_eq!(section.groups.len(), 1);
        assert!(section.groups[0].is_empty());
        let marks = section.groups[0].marks();
        assert!(marks.first && marks.last && !marks.finish);
    }

    #[test]
    fn test_last_section_gets_finish_bracket() {
        let section = layout(4).add_chord("C", 1).finalize(true);
        assert_eq!(section.groups[0].trailing_boundary(), Boundary::Finish);
        assert_eq!(section.groups[0].leading_boundary(), Boundary::Begin);

        let section = layout(1)
            .add_chord("C", 1)
            .add_chord("G", 1)
            .finalize(true);
        assert_eq!(section.groups[0].trailing_boundary(), Boundary::Limiter);
        assert_eq!(section.groups[1].trailing_boundary(), Boundary::Finish);
    }

    #[test]
    fn test_rest_consumes_slots() {
        let section = layout(4).add_chord("", 2).add_chord("C", 1).finalize(false);
        assert_eq!(section.slot_count(), 3);
        assert_eq!(section.groups[0].bar().chord_labels(), vec!["C"]);
    }

    #[test]
    fn test_zero_duration_takes_one_slot() {
        let section = layout(4).add_chord("C", 0).finalize(false);
        assert_eq!(section.slot_count(), 1);
    }

    #[test]
    fn test_zero_capacity_clamped() {
        assert_eq!(layout(0).capacity(), 1);
    }
}
