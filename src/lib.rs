//! textgrid: bordered text-grid rendering for terminal output
//!
//! This crate renders tabular data as a fixed-width, border-drawn text grid
//! sized to the available output width, wrapping cell content that does not
//! fit. It is split into focused member crates, re-exported here:
//!
//! - [`text`]: line splitting, wrapping, width measurement
//! - [`table`]: the table layout engine and serialization
//! - [`terminal`]: output width / tty / color probing and [`RenderConfig`]
//! - `core`: shared format and error types
//!
//! [`RenderConfig`]: prelude::RenderConfig
//!
//! # Example
//!
//! ```
//! use textgrid::prelude::*;
//!
//! let mut table = Table::new();
//! table.add_row(["name", "role"]);
//! table.add_row(["amy", "maintainer"]);
//!
//! // Size the grid to the terminal, or pick a width yourself.
//! let config = RenderConfig::new(80, false);
//! let rendered = table.render_with(&config);
//! assert!(rendered.starts_with("| name |"));
//! ```

pub use textgrid_core as core;
pub use textgrid_table as table;
pub use textgrid_terminal as terminal;
pub use textgrid_text as text;

/// The most commonly used types and functions.
pub mod prelude {
    pub use textgrid_core::{Alignment, TableFormat, WrapError};
    pub use textgrid_table::Table;
    pub use textgrid_terminal::RenderConfig;
    pub use textgrid_text::{break_lines, measure_width, wrap};
}
