//! Table layout engine for `textgrid`.
//!
//! A [`Table`] owns rows of raw cell strings. Rendering wraps every cell
//! against a per-column budget derived from the output width, assembles a
//! rectangular line matrix per row, tracks the maximum width used by each
//! column across the whole table, and serializes everything to a bordered,
//! padded text block in one pass.
//!
//! # Example
//!
//! ```
//! use textgrid_table::Table;
//!
//! let mut table = Table::new();
//! table.add_row(["a", "bb"]);
//! table.add_row(["ccc", "d"]);
//! assert_eq!(table.render(80), "| a   | bb |\n| ccc | d  |\n");
//! ```

#![warn(missing_docs)]

mod matrix;
mod table;

pub use table::{Row, Table};
