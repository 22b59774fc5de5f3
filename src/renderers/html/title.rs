//! Section headings

use super::cells::escape_html;

/// Literal two-character sequence that splits a section title into lines
pub const TITLE_LINE_SEPARATOR: &str = "\\n";

/// One `<h4>` per title segment; an empty segment becomes a blank line
pub fn render_section_title(title: &str) -> String {
    title
        .split(TITLE_LINE_SEPARATOR)
        .map(|part| {
            if part.is_empty() {
                "<br>".to_string()
            } else {
                format!("<h4>{}</h4>", escape_html(part))
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line_title() {
        assert_eq!(render_section_title("Chorus"), "<h4>Chorus</h4>");
    }

    #[test]
    fn test_escaped_newline_splits_title() {
        assert_eq!(
            render_section_title("Verse 1\\nVerse 2"),
            "<h4>Verse 1</h4>\n<h4>Verse 2</h4>"
        );
    }

    #[test]
    fn test_empty_segment_is_blank_line() {
        assert_eq!(
            render_section_title("\\nBridge"),
            "<br>\n<h4>Bridge</h4>"
        );
    }

    #[test]
    fn test_real_newline_is_not_a_separator() {
        assert_eq!(render_section_title("A\nB"), "<h4>A\nB</h4>");
    }

    #[test]
    fn test_title_is_escaped() {
        assert_eq!(render_section_title("Rock & Roll"), "<h4>Rock &amp; Roll</h4>");
    }
}
