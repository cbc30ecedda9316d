//! Line splitting, wrapping and width measurement for `textgrid`.
//!
//! This crate is the text-layout half of the table renderer. It turns one
//! string and a target width into an ordered sequence of lines, respecting
//! explicit line breaks, preferring to break at whitespace and falling back
//! to hyphenated hard breaks.
//!
//! # Example
//!
//! ```
//! use textgrid_text::{wrap, measure_width};
//!
//! let lines = wrap("hello world", 6).unwrap();
//! assert_eq!(lines, vec!["hello ", "world"]);
//! assert!(lines.iter().all(|line| measure_width(line) <= 6));
//! ```

#![warn(missing_docs)]

pub mod line;
pub mod measurement;
pub mod wrap;

// Re-export commonly used functions at the crate root
pub use line::break_lines;
pub use measurement::{display_width, fits_in_width, max_line_width, measure_width};
pub use wrap::{wrap, wrap_segment};
