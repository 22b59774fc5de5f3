//! PDF export
//!
//! Markup in, bytes out. Layout fidelity (fonts, margins, pagination) belongs
//! to the backend; this module only fixes the page size and moves bytes.
//!
//! The shipped backend pipes the markup into `wkhtmltopdf` on stdin and reads
//! the PDF back from stdout, so nothing touches the disk.

use crate::errors::ExportError;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Default backend program, looked up on `PATH`
pub const DEFAULT_WKHTMLTOPDF: &str = "wkhtmltopdf";

/// Physical page format of the output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PageSize {
    #[default]
    A4,
}

impl PageSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageSize::A4 => "A4",
        }
    }
}

/// Something that turns markup into a paginated binary document
pub trait PdfBackend {
    fn render(&self, markup: &str, page_size: PageSize) -> Result<Vec<u8>, ExportError>;
}

/// `wkhtmltopdf` driven over stdin/stdout
#[derive(Debug, Clone)]
pub struct Wkhtmltopdf {
    program: PathBuf,
}

impl Wkhtmltopdf {
    pub fn new() -> Self {
        Self::with_program(DEFAULT_WKHTMLTOPDF)
    }

    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn program_name(&self) -> String {
        self.program.display().to_string()
    }

    /// Arguments for a stdin-to-stdout conversion
    fn args(page_size: PageSize) -> Vec<&'static str> {
        vec![
            "--quiet",
            "--encoding",
            "UTF-8",
            "--page-size",
            page_size.as_str(),
            "-",
            "-",
        ]
    }
}

impl Default for Wkhtmltopdf {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfBackend for Wkhtmltopdf {
    fn render(&self, markup: &str, page_size: PageSize) -> Result<Vec<u8>, ExportError> {
        log::info!(
            "Rendering {} bytes of markup with {} ({})",
            markup.len(),
            self.program_name(),
            page_size.as_str()
        );

        let mut child = Command::new(&self.program)
            .args(Self::args(page_size))
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| ExportError::Spawn {
                program: self.program_name(),
                source,
            })?;

        // stdin is closed when the handle drops at the end of this block
        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(markup.as_bytes())?;
        }

        let output = child.wait_with_output()?;

        if !output.status.success() {
            return Err(ExportError::Failed {
                program: self.program_name(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        if output.stdout.is_empty() {
            return Err(ExportError::EmptyOutput(self.program_name()));
        }

        log::debug!("{} produced {} bytes", self.program_name(), output.stdout.len());
        Ok(output.stdout)
    }
}

/// Render `markup` on the fixed page size
pub fn export_pdf(markup: &str, backend: &dyn PdfBackend) -> Result<Vec<u8>, ExportError> {
    backend.render(markup, PageSize::default())
}
