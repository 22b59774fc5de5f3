//! Song file parsing and configuration resolution

pub mod song;

pub use song::{load_song, parse_song, REPEAT_KEY};
