//! Document skeleton rendering
//!
//! The skeleton is a Mustache template with three placeholders:
//!
//! - `{{title}}` - song title (HTML-escaped by Mustache)
//! - `{{bar_width}}` - slot width in pixels, used by the stylesheet
//! - `{{{content}}}` - assembled body markup, inserted verbatim
//!
//! Substitution is the only thing the renderer does. Custom skeletons may be
//! supplied as long as they keep all three placeholders.

use crate::errors::TemplateError;
use serde::Serialize;

/// Built-in skeleton
pub const DEFAULT_TEMPLATE: &str = include_str!("chord_sheet.html.mustache");

/// Placeholders every skeleton must contain
pub const REQUIRED_PLACEHOLDERS: [&str; 3] = ["{{title}}", "{{bar_width}}", "{{{content}}}"];

/// Values substituted into the skeleton
#[derive(Debug, Clone, Serialize)]
pub struct TemplateContext {
    /// Song title; empty when the song has none
    pub title: String,

    /// Slot width in pixels
    pub bar_width: u32,

    /// Document body markup
    pub content: String,
}

impl TemplateContext {
    pub fn new(title: impl Into<String>, bar_width: u32, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            bar_width,
            content: content.into(),
        }
    }
}

/// Fail on the first required placeholder the skeleton lacks
pub fn check_placeholders(template: &str) -> Result<(), TemplateError> {
    match REQUIRED_PLACEHOLDERS
        .iter()
        .find(|placeholder| !template.contains(*placeholder))
    {
        Some(missing) => Err(TemplateError::MissingPlaceholder(*missing)),
        None => Ok(()),
    }
}

/// Substitute `context` into `template`
pub fn render_document(template: &str, context: &TemplateContext) -> Result<String, TemplateError> {
    check_placeholders(template)?;
    let compiled = mustache::compile_str(template)?;
    Ok(compiled.render_to_string(context)?)
}
