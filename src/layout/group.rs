//! Flushed bar groups
//!
//! A [`BarGroup`] is one rendered line: the slots that were in the bar when it
//! was flushed plus the marks describing where it sits in its section.
//! Groups are immutable once built.

use super::bar::Bar;

/// Position tags recorded at flush time
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GroupMarks {
    /// First group of the section
    pub first: bool,
    /// Last group of the section
    pub last: bool,
    /// Last group of the last section
    pub finish: bool,
    /// Line ended by a repeat marker with this count
    pub repeat: Option<u32>,
}

impl GroupMarks {
    pub fn first(first: bool) -> Self {
        Self {
            first,
            ..Self::default()
        }
    }
}

/// Style of the cell at either end of a row
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Boundary {
    /// Open bracket starting a section
    Begin,
    /// Leading cell of a continuation line
    Start,
    /// Plain divider; also used between interior slots
    Limiter,
    /// Close bracket ending a section
    End,
    /// Repeat glyph, with the count to annotate
    Repeat(u32),
    /// Heavy bracket ending the song
    Finish,
}

/// One flushed line of a section
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BarGroup {
    bar: Bar,
    marks: GroupMarks,
}

impl BarGroup {
    pub fn new(bar: Bar, marks: GroupMarks) -> Self {
        Self { bar, marks }
    }

    pub fn bar(&self) -> &Bar {
        &self.bar
    }

    pub fn marks(&self) -> GroupMarks {
        self.marks
    }

    /// Number of slot pairs in this line
    pub fn len(&self) -> usize {
        self.bar.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bar.is_empty()
    }

    pub fn leading_boundary(&self) -> Boundary {
        if self.marks.first {
            Boundary::Begin
        } else {
            Boundary::Start
        }
    }

    /// Finish beats close bracket, close bracket beats repeat, anything else is a plain divider
    pub fn trailing_boundary(&self) -> Boundary {
        match self.marks {
            GroupMarks { finish: true, .. } => Boundary::Finish,
            GroupMarks { last: true, .. } => Boundary::End,
            GroupMarks {
                repeat: Some(count),
                ..
            } => Boundary::Repeat(count),
            _ => Boundary::Limiter,
        }
    }
}
