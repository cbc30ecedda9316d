//! Text wrapping with whitespace preference and hyphenated hard breaks.
//!
//! Wrapping happens in two stages: the input is first split on explicit line
//! breaks, then each break-free segment is wrapped against the target width.
//! A segment is consumed left to right by peeling one line per iteration;
//! the break position is always measured from the original target width
//! against the current remainder, never from a width adjusted for already
//! consumed text.

use crate::line::break_lines;
use smallvec::SmallVec;
use textgrid_core::error::{WrapError, WrapResult};
use unicode_segmentation::UnicodeSegmentation;

/// Wrap text into lines no wider than `width`.
///
/// Explicit line breaks (`\n`, `\r`, `\n\r`, `\r\n`) are honored first; each
/// resulting segment is then soft/hard-wrapped via [`wrap_segment`]. The
/// width unit is one grapheme cluster.
///
/// Fails with [`WrapError::InvalidWidth`] when `width` is 0.
///
/// # Example
///
/// ```
/// use textgrid_text::wrap::wrap;
///
/// assert_eq!(wrap("a\nb", 10).unwrap(), vec!["a", "b"]);
/// assert_eq!(wrap("abcdefghij", 5).unwrap(), vec!["abcd-", "efgh-", "ij"]);
/// ```
pub fn wrap(text: &str, width: usize) -> WrapResult<Vec<String>> {
    if width < 1 {
        return Err(WrapError::InvalidWidth { width });
    }

    let mut lines = Vec::new();
    for segment in break_lines(text) {
        lines.extend(wrap_segment(segment, width)?);
    }
    Ok(lines)
}

/// Wrap one segment with no embedded line breaks.
///
/// A segment that fits is emitted whole. Otherwise lines are peeled off the
/// front of the remainder, one per iteration, by a decision table over the
/// grapheme at and around the boundary (`width` graphemes into the
/// remainder):
///
/// - a space at the boundary ends the line and is retained on it;
/// - a space just past the boundary ends the line at the boundary and is
///   dropped;
/// - a space just before the boundary ends the line before the space (so a
///   lone letter is never stranded ahead of a hyphen) and is dropped;
/// - otherwise the line is hard-broken one grapheme short of the boundary
///   and a `-` is appended. At width 1 the hyphen cannot fit, so single
///   graphemes are peeled without one.
///
/// Fails with [`WrapError::InvalidWidth`] when `width` is 0.
///
/// # Example
///
/// ```
/// use textgrid_text::wrap::wrap_segment;
///
/// assert_eq!(wrap_segment("hello world", 6).unwrap(), vec!["hello ", "world"]);
/// assert_eq!(wrap_segment("", 6).unwrap(), vec![""]);
/// ```
pub fn wrap_segment(segment: &str, width: usize) -> WrapResult<Vec<String>> {
    if width < 1 {
        return Err(WrapError::InvalidWidth { width });
    }

    let graphemes: SmallVec<[&str; 32]> = segment.graphemes(true).collect();
    if graphemes.len() <= width {
        return Ok(vec![segment.to_string()]);
    }

    let mut lines = Vec::new();
    let mut cursor = 0;

    while graphemes.len() - cursor > width {
        // Index of the last grapheme that fits on the current line. The
        // remainder is longer than `width`, so `boundary + 1` is in bounds.
        let boundary = cursor + width - 1;

        if graphemes[boundary] == " " {
            lines.push(graphemes[cursor..=boundary].concat());
            cursor = boundary + 1;
        } else if graphemes[boundary + 1] == " " {
            lines.push(graphemes[cursor..=boundary].concat());
            cursor = boundary + 2;
        } else if width >= 2 && graphemes[boundary - 1] == " " {
            lines.push(graphemes[cursor..boundary - 1].concat());
            cursor = boundary;
        } else if width >= 2 {
            let mut line = graphemes[cursor..boundary].concat();
            line.push('-');
            lines.push(line);
            cursor = boundary;
        } else {
            // width == 1 leaves no room for a hyphen
            lines.push(graphemes[cursor].to_string());
            cursor += 1;
        }
    }

    lines.push(graphemes[cursor..].concat());
    Ok(lines)
}
