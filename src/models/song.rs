//! Song model
//!
//! A song is a title, fully resolved layout settings and an ordered list of
//! sections. Values here are produced once by [`crate::parse`] and are never
//! mutated afterwards.

use std::fmt;

/// Bars-worth of duration units per rendered line when `config.line_length` is absent
pub const DEFAULT_LINE_LENGTH: usize = 12;

/// Cell width in pixels when `config.bar_width` is absent
pub const DEFAULT_BAR_WIDTH: u32 = 40;

/// Time signature used when `config.time_signature` is absent
pub const DEFAULT_TIME_SIGNATURE: &str = "4/4";

/// Fully resolved song description
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SongConfig {
    /// Document title (empty when not given)
    pub title: String,

    /// Layout settings with every default already applied
    pub settings: LayoutSettings,

    /// Sections in declaration order
    pub sections: Vec<Section>,
}

/// Resolved `config` block
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayoutSettings {
    /// Slot capacity of one rendered line
    pub line_length: usize,

    /// Width of a single slot in pixels
    pub bar_width: u32,

    pub time_signature: TimeSignature,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            line_length: DEFAULT_LINE_LENGTH,
            bar_width: DEFAULT_BAR_WIDTH,
            time_signature: TimeSignature::default(),
        }
    }
}

/// Time signature split into the halves shown in the leading cells of each row
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimeSignature {
    /// Numerator, shown on the chord row
    pub upper: String,

    /// Denominator, shown on the reserved row
    pub lower: String,
}

impl TimeSignature {
    pub fn new(upper: impl Into<String>, lower: impl Into<String>) -> Self {
        Self {
            upper: upper.into(),
            lower: lower.into(),
        }
    }

    /// Parse `"N/M"`. Both halves must be non-empty; they are kept as text.
    pub fn parse(text: &str) -> Option<Self> {
        let (upper, lower) = text.split_once('/')?;
        let (upper, lower) = (upper.trim(), lower.trim());
        if upper.is_empty() || lower.is_empty() || lower.contains('/') {
            return None;
        }
        Some(Self::new(upper, lower))
    }
}

impl Default for TimeSignature {
    fn default() -> Self {
        Self::new("4", "4")
    }
}

impl fmt::Display for TimeSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.upper, self.lower)
    }
}

/// Named part of the song (verse, chorus, ...)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    /// Title as written; may contain literal `\n` sequences
    pub title: String,
    pub entries: Vec<ChordEntry>,
}

impl Section {
    pub fn new(title: impl Into<String>, entries: Vec<ChordEntry>) -> Self {
        Self {
            title: title.into(),
            entries,
        }
    }
}

/// A chord symbol held for a number of slots. An empty name is a rest.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chord {
    pub name: String,
    pub duration: u32,
}

impl Chord {
    pub fn new(name: impl Into<String>, duration: u32) -> Self {
        Self {
            name: name.into(),
            duration,
        }
    }

    pub fn rest(duration: u32) -> Self {
        Self::new("", duration)
    }

    pub fn is_rest(&self) -> bool {
        self.name.is_empty()
    }
}

/// One item of a section's chord list
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChordEntry {
    /// `{C: 2}`
    Chord(Chord),

    /// `{':': 2}` - ends the current line with a repeat glyph
    Repeat { count: u32 },

    /// `[{C: 1}, {G: 1}]` - placed on the current bar, then the line breaks
    Group(Vec<ChordEntry>),
}

impl ChordEntry {
    pub fn chord(name: impl Into<String>, duration: u32) -> Self {
        ChordEntry::Chord(Chord::new(name, duration))
    }

    pub fn repeat(count: u32) -> Self {
        ChordEntry::Repeat { count }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_signature_parse() {
        assert_eq!(TimeSignature::parse("3/4"), Some(TimeSignature::new("3", "4")));
        assert_eq!(TimeSignature::parse(" 6 / 8 "), Some(TimeSignature::new("6", "8")));
        assert_eq!(TimeSignature::parse("4"), None);
        assert_eq!(TimeSignature::parse("/4"), None);
        assert_eq!(TimeSignature::parse("4/"), None);
        assert_eq!(TimeSignature::parse("4/4/4"), None);
    }

    #[test]
    fn test_time_signature_display_round_trips_default() {
        assert_eq!(TimeSignature::default().to_string(), DEFAULT_TIME_SIGNATURE);
    }

    #[test]
    fn test_layout_settings_default() {
        let settings = LayoutSettings::default();
        assert_eq!(settings.line_length, 12);
        assert_eq!(settings.bar_width, 40);
        assert_eq!(settings.time_signature, TimeSignature::new("4", "4"));
    }

    #[test]
    fn test_rest_has_empty_name() {
        assert!(Chord::rest(2).is_rest());
        assert!(!Chord::new("Am", 1).is_rest());
    }
}
