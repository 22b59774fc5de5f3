//! Error types for chord sheet rendering
//!
//! Every failure is fatal: configuration errors abort before any layout runs,
//! template errors indicate a broken skeleton, and export errors come straight
//! from the PDF backend. Nothing is retried.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level error returned by the [`crate::ChordSheet`] facade
#[derive(Debug, Error)]
pub enum ChordSheetError {
    /// Song file could not be read or has an invalid structure
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Document skeleton is unusable
    #[error("template error: {0}")]
    Template(#[from] TemplateError),

    /// The rendering backend failed to produce a document
    #[error("export error: {0}")]
    Export(#[from] ExportError),
}

/// Problems with the song file
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Input file is missing or unreadable
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Input is not valid YAML or has the wrong top-level shape
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The `song` mapping is absent
    #[error("missing required `song` mapping")]
    MissingSong,

    /// A section key or section body has the wrong shape
    #[error("section {section:?}: {reason}")]
    InvalidSection { section: String, reason: String },

    /// A chord entry inside a section is malformed
    #[error("section {section:?}, entry {index}: {reason}")]
    InvalidEntry {
        section: String,
        index: usize,
        reason: String,
    },

    /// A `config` value is out of range or malformed
    #[error("invalid config.{field}: {reason}")]
    InvalidSetting { field: &'static str, reason: String },
}

/// Problems with the document skeleton
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Skeleton lacks one of the placeholders the renderer fills in
    #[error("template is missing the {0} placeholder")]
    MissingPlaceholder(&'static str),

    /// Mustache failed to compile or render the skeleton
    #[error("mustache failure: {0}")]
    Mustache(#[from] mustache::Error),
}

/// Problems reported by (or while talking to) the rendering backend
#[derive(Debug, Error)]
pub enum ExportError {
    /// Backend program could not be started
    #[error("failed to spawn {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    /// Piping markup in or reading the document out failed
    #[error("backend I/O failed: {0}")]
    Io(#[from] io::Error),

    /// Backend exited unsuccessfully
    #[error("{program} exited with {status}: {stderr}")]
    Failed {
        program: String,
        status: String,
        stderr: String,
    },

    /// Backend exited cleanly but wrote nothing
    #[error("{0} produced no output")]
    EmptyOutput(String),
}
