//! Width measurement for layout and padding.
//!
//! Layout counts one grapheme cluster as one unit of width, so wrapping and
//! padding can never split a multi-byte character. [`display_width`] measures
//! real terminal cells instead (wide CJK clusters count as 2) for callers
//! that need them; the table layout deliberately does not.

use crate::line::break_lines;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Measure the layout width of a single line in grapheme clusters.
///
/// The input is assumed to contain no line breaks.
///
/// # Example
///
/// ```
/// use textgrid_text::measurement::measure_width;
///
/// assert_eq!(measure_width("hello"), 5);
/// assert_eq!(measure_width("café"), 4);
/// ```
pub fn measure_width(text: &str) -> usize {
    // Fast path for ASCII-only text
    if text.is_ascii() {
        return text.len();
    }

    text.graphemes(true).count()
}

/// Measure the display width of a string in terminal cells.
pub fn display_width(text: &str) -> usize {
    text.width()
}

/// Check if a line fits within the given layout width.
#[inline]
pub fn fits_in_width(text: &str, max_width: usize) -> bool {
    measure_width(text) <= max_width
}

/// Width of the widest line in possibly multi-line text.
///
/// # Example
///
/// ```
/// use textgrid_text::measurement::max_line_width;
///
/// assert_eq!(max_line_width("hi\nthere"), 5);
/// ```
pub fn max_line_width(text: &str) -> usize {
    break_lines(text)
        .into_iter()
        .map(measure_width)
        .max()
        .unwrap_or(0)
}
