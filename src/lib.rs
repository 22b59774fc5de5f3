//! Chord sheet renderer
//!
//! Reads a YAML song layout, packs its chords into fixed-width bars, and
//! produces a styled HTML document which a PDF backend turns into a page.
//!
//! ```text
//! YAML ─► parse ─► SongConfig ─► layout (per section) ─► html body ─► template ─► export
//! ```

pub mod errors;
pub mod export;
pub mod layout;
pub mod models;
pub mod parse;
pub mod renderers;
pub mod templates;

pub use errors::{ChordSheetError, ConfigError, ExportError, TemplateError};
pub use export::{PageSize, PdfBackend, Wkhtmltopdf};
pub use models::{ChordEntry, LayoutSettings, Section, SongConfig, TimeSignature};

use std::borrow::Cow;
use std::path::Path;
use templates::{render_document, TemplateContext, DEFAULT_TEMPLATE};

/// A loaded song plus the skeleton it will be rendered into
#[derive(Debug, Clone)]
pub struct ChordSheet {
    song: SongConfig,
    template: Cow<'static, str>,
}

impl ChordSheet {
    pub fn new(song: SongConfig) -> Self {
        Self {
            song,
            template: Cow::Borrowed(DEFAULT_TEMPLATE),
        }
    }

    /// Load and resolve a song file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ChordSheetError> {
        Ok(Self::new(parse::load_song(path.as_ref())?))
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, ChordSheetError> {
        Ok(Self::new(parse::parse_song(yaml)?))
    }

    /// Use a custom Mustache skeleton instead of the built-in one
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Cow::Owned(template.into());
        self
    }

    pub fn song(&self) -> &SongConfig {
        &self.song
    }

    /// Document body: section headings and their bar tables
    pub fn body(&self) -> String {
        renderers::html::assemble_body(&self.song)
    }

    /// Complete HTML document
    pub fn to_html(&self) -> Result<String, ChordSheetError> {
        let context = TemplateContext::new(
            self.song.title.clone(),
            self.song.settings.bar_width,
            self.body(),
        );
        let html = render_document(&self.template, &context)?;
        log::info!(
            "Rendered {:?}: {} section(s), {} bytes of HTML",
            self.song.title,
            self.song.sections.len(),
            html.len()
        );
        Ok(html)
    }

    /// Complete document rendered to PDF by `backend`
    pub fn to_pdf(&self, backend: &dyn PdfBackend) -> Result<Vec<u8>, ChordSheetError> {
        let html = self.to_html()?;
        Ok(export::export_pdf(&html, backend)?)
    }
}
