//! Bar accumulator
//!
//! A bar is two parallel slot tracks: the upper track carries chord labels,
//! the lower track is reserved (always spacers for now). Both tracks grow in
//! lockstep so they always have the same length.

/// Contents of a single grid cell
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Slot {
    /// Cell showing a chord label
    Chord(String),
    /// Blank cell (held duration, rest, or reserved track)
    Empty,
}

impl Slot {
    /// Chord slot for a non-empty name, blank slot otherwise
    pub fn for_name(name: &str) -> Self {
        if name.is_empty() {
            Slot::Empty
        } else {
            Slot::Chord(name.to_string())
        }
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            Slot::Chord(name) => Some(name),
            Slot::Empty => None,
        }
    }
}

/// Slots accumulated since the last flush
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Bar {
    upper: Vec<Slot>,
    lower: Vec<Slot>,
}

impl Bar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of slot pairs
    pub fn len(&self) -> usize {
        self.upper.len()
    }

    pub fn is_empty(&self) -> bool {
        self.upper.is_empty()
    }

    /// Append a slot pair whose upper cell is `upper`
    pub fn push(&mut self, upper: Slot) {
        self.upper.push(upper);
        self.lower.push(Slot::Empty);
        debug_assert_eq!(self.upper.len(), self.lower.len());
    }

    /// Append a blank slot pair
    pub fn push_spacer(&mut self) {
        self.push(Slot::Empty);
    }

    pub fn upper(&self) -> &[Slot] {
        &self.upper
    }

    pub fn lower(&self) -> &[Slot] {
        &self.lower
    }

    /// Labels of the chord slots in order
    pub fn chord_labels(&self) -> Vec<&str> {
        self.upper.iter().filter_map(Slot::label).collect()
    }
}
