//! Table cell markup
//!
//! Every grid cell is a `<td>`; the CSS classes used here are defined in the
//! document skeleton (`templates/chord_sheet.html.mustache`).

use crate::layout::{Boundary, Slot};
use once_cell::sync::Lazy;
use regex::Regex;

/// Glyph drawn in a repeat boundary cell
pub const REPEAT_GLYPH: &str = "•";

/// Superscripted sharp, followed by a filler so the next letter clears it
const SHARP_MARKUP: &str = "<span class=\"sup\">#</span>&nbsp;";

static TRAILING_FILLER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:&nbsp;)+$").expect("static regex is valid"));

/// Which of the two stacked rows a cell belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Row {
    /// Chord labels; carries the time signature numerator
    Upper,
    /// Reserved track; carries the denominator
    Lower,
}

/// Escape text for use inside element content or attribute values
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Render a chord name: sharps become superscripts, fillers after a trailing sharp are dropped
pub fn normalize_chord(name: &str) -> String {
    let marked = escape_html(name).replace('#', SHARP_MARKUP);
    TRAILING_FILLER.replace(&marked, "").into_owned()
}

pub fn slot_cell(slot: &Slot) -> String {
    match slot {
        Slot::Chord(name) => format!(
            "<td><span class=\"chord\">{}</span></td>",
            normalize_chord(name)
        ),
        Slot::Empty => "<td></td>".to_string(),
    }
}

pub fn signature_cell(half: &str) -> String {
    format!("<td class=\"bar-signature\">{}</td>", escape_html(half))
}

/// Boundary cell for `row`. Only the upper row shows the repeat count.
pub fn boundary_cell(boundary: Boundary, row: Row) -> String {
    match boundary {
        Boundary::Limiter => "<td class=\"bar-limiter\"></td>".to_string(),
        Boundary::Start => "<td class=\"bar-limiter bar-start\"></td>".to_string(),
        Boundary::Begin => "<td class=\"bar-limiter bar-begin\"></td>".to_string(),
        Boundary::End => "<td class=\"bar-limiter bar-end\"></td>".to_string(),
        Boundary::Finish => "<td class=\"bar-limiter bar-finish\"></td>".to_string(),
        Boundary::Repeat(count) => {
            let info = match row {
                Row::Upper if count != 1 => format!("<span class=\"info\">{}x</span>", count),
                _ => String::new(),
            };
            format!(
                "<td class=\"bar-limiter bar-end bar-repeat\">{}{}</td>",
                info, REPEAT_GLYPH
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_chord_unchanged() {
        assert_eq!(normalize_chord("Am7"), "Am7");
    }

    #[test]
    fn test_trailing_sharp_has_no_filler() {
        assert_eq!(normalize_chord("C#"), "C<span class=\"sup\">#</span>");
    }

    #[test]
    fn test_inner_sharp_keeps_filler() {
        assert_eq!(
            normalize_chord("F#m"),
            "F<span class=\"sup\">#</span>&nbsp;m"
        );
    }

    #[test]
    fn test_chord_name_is_escaped() {
        assert_eq!(normalize_chord("C<b>"), "C&lt;b&gt;");
    }

    #[test]
    fn test_repeat_count_only_when_not_one() {
        let once = boundary_cell(Boundary::Repeat(1), Row::Upper);
        assert!(!once.contains("class=\"info\""));
        assert!(once.contains(REPEAT_GLYPH));

        let twice = boundary_cell(Boundary::Repeat(2), Row::Upper);
        assert!(twice.contains("<span class=\"info\">2x</span>"));
    }

    #[test]
    fn test_lower_row_repeat_has_no_count() {
        let cell = boundary_cell(Boundary::Repeat(4), Row::Lower);
        assert_eq!(
            cell,
            format!("<td class=\"bar-limiter bar-end bar-repeat\">{}</td>", REPEAT_GLYPH)
        );
    }

    #[test]
    fn test_slot_cells() {
        assert_eq!(slot_cell(&Slot::Empty), "<td></td>");
        assert_eq!(
            slot_cell(&Slot::Chord("G".to_string())),
            "<td><span class=\"chord\">G</span></td>"
        );
    }
}
