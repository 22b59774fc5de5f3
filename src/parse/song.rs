//! Song file loader
//!
//! Reads the YAML song description and resolves it into a [`SongConfig`].
//! Defaults are applied here, once; nothing downstream looks at optional values.
//!
//! ```yaml
//! title: Example
//! config:
//!   line_length: 8
//!   bar_width: 40
//!   time_signature: 3/4
//! song:
//!   Intro:
//!     - C: 2
//!     - ':': 2
//!   Verse\nfirst time:
//!     - [{Am: 1}, {G: 1}]
//!     - F: 4
//! ```

use crate::errors::ConfigError;
use crate::models::{
    ChordEntry, LayoutSettings, Section, SongConfig, TimeSignature, DEFAULT_BAR_WIDTH,
    DEFAULT_LINE_LENGTH, DEFAULT_TIME_SIGNATURE,
};
use serde::Deserialize;
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Key that turns a pair into a repeat marker
pub const REPEAT_KEY: &str = ":";

/// Top-level document as written
#[derive(Debug, Deserialize)]
struct RawSong {
    title: Option<String>,
    config: Option<RawConfig>,
    song: Option<Mapping>,
}

/// `config` block as written; every field optional
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    line_length: Option<i64>,
    bar_width: Option<i64>,
    time_signature: Option<String>,
}

/// Read and resolve a song file
pub fn load_song(path: &Path) -> Result<SongConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("Loaded song file {}", path.display());
    parse_song(&content)
}

/// Resolve a song from YAML text
pub fn parse_song(yaml: &str) -> Result<SongConfig, ConfigError> {
    let raw: RawSong = serde_yaml::from_str(yaml)?;

    let settings = resolve_settings(raw.config.unwrap_or_default())?;
    let song = raw.song.ok_or(ConfigError::MissingSong)?;

    let sections = song
        .iter()
        .map(|(key, body)| parse_section(key, body))
        .collect::<Result<Vec<_>, _>>()?;

    log::debug!(
        "Resolved song: {} section(s), line_length={}, bar_width={}, time_signature={}",
        sections.len(),
        settings.line_length,
        settings.bar_width,
        settings.time_signature
    );

    Ok(SongConfig {
        title: raw.title.unwrap_or_default(),
        settings,
        sections,
    })
}

fn resolve_settings(raw: RawConfig) -> Result<LayoutSettings, ConfigError> {
    let line_length = match raw.line_length {
        None => DEFAULT_LINE_LENGTH,
        Some(n) if n >= 1 => n as usize,
        Some(n) => {
            return Err(ConfigError::InvalidSetting {
                field: "line_length",
                reason: format!("must be at least 1, got {}", n),
            })
        }
    };

    let bar_width = match raw.bar_width {
        None => DEFAULT_BAR_WIDTH,
        Some(n) => u32::try_from(n)
            .ok()
            .filter(|w| *w > 0)
            .ok_or_else(|| ConfigError::InvalidSetting {
                field: "bar_width",
                reason: format!("must be a positive pixel width, got {}", n),
            })?,
    };

    let signature_text = raw
        .time_signature
        .unwrap_or_else(|| DEFAULT_TIME_SIGNATURE.to_string());
    let time_signature =
        TimeSignature::parse(&signature_text).ok_or_else(|| ConfigError::InvalidSetting {
            field: "time_signature",
            reason: format!("expected N/M, got {:?}", signature_text),
        })?;

    Ok(LayoutSettings {
        line_length,
        bar_width,
        time_signature,
    })
}

fn parse_section(key: &Value, body: &Value) -> Result<Section, ConfigError> {
    let title = scalar_to_string(key).ok_or_else(|| ConfigError::InvalidSection {
        section: format!("{:?}", key),
        reason: "section titles must be strings".to_string(),
    })?;

    let entries = match body {
        Value::Null => Vec::new(),
        Value::Sequence(items) => items
            .iter()
            .enumerate()
            .map(|(index, item)| parse_entry(&title, index, item))
            .collect::<Result<Vec<_>, _>>()?,
        other => {
            return Err(ConfigError::InvalidSection {
                section: title,
                reason: format!("expected a list of chord entries, got {}", describe(other)),
            })
        }
    };

    Ok(Section { title, entries })
}

/// Parse one list item. Nested lists become groups; inner items use the same rules.
fn parse_entry(section: &str, index: usize, value: &Value) -> Result<ChordEntry, ConfigError> {
    match value {
        Value::Sequence(items) => items
            .iter()
            .map(|item| parse_entry(section, index, item))
            .collect::<Result<Vec<_>, _>>()
            .map(ChordEntry::Group),
        Value::Mapping(pair) => parse_pair(section, index, pair),
        other => Err(invalid_entry(
            section,
            index,
            format!("expected `chord: duration` or a list of them, got {}", describe(other)),
        )),
    }
}

fn parse_pair(section: &str, index: usize, pair: &Mapping) -> Result<ChordEntry, ConfigError> {
    let mut iter = pair.iter();
    let (key, value) = match (iter.next(), iter.next()) {
        (Some(kv), None) => kv,
        _ => {
            return Err(invalid_entry(
                section,
                index,
                format!("expected exactly one `chord: duration` pair, got {}", pair.len()),
            ))
        }
    };

    let name = scalar_to_string(key)
        .ok_or_else(|| invalid_entry(section, index, "chord names must be scalars".to_string()))?;
    let amount = parse_count(value).ok_or_else(|| {
        invalid_entry(
            section,
            index,
            format!("`{}` needs a non-negative integer, got {}", name, describe(value)),
        )
    })?;

    if name == REPEAT_KEY {
        return Ok(ChordEntry::repeat(amount));
    }
    if amount == 0 {
        log::warn!(
            "Section {:?}, entry {}: chord {:?} has duration 0; it still takes one slot",
            section,
            index,
            name
        );
    }
    Ok(ChordEntry::chord(name, amount))
}

/// Null means 1, matching a bare `C:` in the song file
fn parse_count(value: &Value) -> Option<u32> {
    match value {
        Value::Null => Some(1),
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        _ => None,
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Null => Some(String::new()),
        _ => None,
    }
}

fn invalid_entry(section: &str, index: usize, reason: String) -> ConfigError {
    ConfigError::InvalidEntry {
        section: section.to_string(),
        index,
        reason,
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a list",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
