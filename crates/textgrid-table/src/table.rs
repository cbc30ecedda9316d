//! Table state and the render pass.

use std::fmt;

use textgrid_core::error::WrapError;
use textgrid_core::format::{Alignment, TableFormat};
use textgrid_terminal::RenderConfig;
use textgrid_text::{break_lines, measure_width, wrap};
use tracing::trace;

use crate::matrix::RowMatrix;

/// Border and padding overhead per cell: the leading pad, the trailing pad,
/// and the cell's share of the border pipes.
const CELL_OVERHEAD: usize = 4;

/// One appended row: an ordered sequence of raw cell strings.
///
/// Rows are created at append time and immutable thereafter. Two rows of the
/// same table may have different lengths; short rows are not padded with
/// empty cells, the render pass tolerates the raggedness instead.
#[derive(Debug, Clone)]
pub struct Row {
    cells: Vec<String>,
}

impl Row {
    fn new(cells: Vec<String>) -> Self {
        Self { cells }
    }

    /// Number of cells in this row.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether this row has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The raw cell strings, left to right.
    pub fn cells(&self) -> &[String] {
        &self.cells
    }
}

/// A table of raw cell strings, rendered as a bordered text grid.
///
/// Rendering is a pure function of the stored rows and the width hint: cells
/// are wrapped against a per-column budget, each row becomes a rectangular
/// matrix of lines × columns, and every column is padded to the maximum
/// width it uses anywhere in the table. Nothing is cached between renders,
/// so the same table can be re-rendered after the output width changes.
///
/// # Example
///
/// ```
/// use textgrid_table::Table;
///
/// let mut table = Table::new();
/// table.add_row(["a", "bb"]);
/// table.add_row(["ccc", "d"]);
/// assert_eq!(table.width(), 2);
/// assert_eq!(table.height(), 2);
/// assert_eq!(table.render(80), "| a   | bb |\n| ccc | d  |\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Table {
    rows: Vec<Row>,
    width: usize,
    format: TableFormat,
}

impl Table {
    /// Create an empty table with the default format.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the display format.
    #[must_use]
    pub fn with_format(mut self, format: TableFormat) -> Self {
        self.format = format;
        self
    }

    /// The display format.
    pub fn format(&self) -> &TableFormat {
        &self.format
    }

    /// Mutable access to the display format.
    pub fn format_mut(&mut self) -> &mut TableFormat {
        &mut self.format
    }

    /// Append a row of raw cells.
    ///
    /// Cell content is not validated; empty strings and embedded control
    /// characters pass through. The table width grows to the new row's
    /// length if it is the longest seen so far and never shrinks.
    pub fn add_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let row = Row::new(cells.into_iter().map(Into::into).collect());
        self.width = self.width.max(row.len());
        self.rows.push(row);
    }

    /// Number of columns: the length of the longest row ever added.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// The appended rows.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Render the table as a bordered text block.
    ///
    /// `width_hint` is the total output width budget, e.g. the terminal
    /// column count; `0` means unknown/unbounded, in which case cells are
    /// split on explicit line breaks but never soft-wrapped. Each cell's
    /// wrap budget is `width_hint / width()` minus a fixed overhead of 4
    /// for padding and borders, floored at 1.
    ///
    /// An empty table renders as the empty string, as does a table whose
    /// rows are all empty (no column ever existed, so there is no width to
    /// divide between columns).
    pub fn render(&self, width_hint: usize) -> String {
        if self.rows.is_empty() {
            return String::new();
        }
        if self.width == 0 {
            // Only empty rows were added; no column to lay out.
            return String::new();
        }

        let budget = match width_hint {
            0 => None,
            hint => Some((hint / self.width).saturating_sub(CELL_OVERHEAD).max(1)),
        };
        trace!(width_hint, columns = self.width, ?budget, "laying out table");

        // Column widths are discovered while laying out rows and consulted
        // only by the serialization pass below, once they are final.
        let mut col_widths: Vec<usize> = Vec::with_capacity(self.width);
        let mut matrices = Vec::with_capacity(self.rows.len());

        for row in &self.rows {
            let mut matrix = RowMatrix::new();
            for (col, cell) in row.cells().iter().enumerate() {
                let lines = wrap_cell(cell, budget);
                if col == col_widths.len() {
                    col_widths.push(0);
                }
                for line in &lines {
                    let line_width = measure_width(line);
                    if line_width > col_widths[col] {
                        col_widths[col] = line_width;
                    }
                }
                matrix.place(col, &lines);
            }
            matrices.push(matrix);
        }
        trace!(?col_widths, "column widths finalized");

        let mut output = String::new();
        for matrix in &matrices {
            for line in matrix.lines() {
                output.push('|');
                for (col, field) in line.iter().enumerate() {
                    assert!(
                        col < col_widths.len(),
                        "internal error: column {col} has no tracked width"
                    );
                    output.push(' ');
                    pad_into(&mut output, field, col_widths[col], self.format.alignment);
                    output.push_str(" |");
                }
                output.push('\n');
            }
        }
        output
    }

    /// Render using an explicit terminal configuration.
    pub fn render_with(&self, config: &RenderConfig) -> String {
        self.render(config.width)
    }
}

impl fmt::Display for Table {
    /// Renders at the detected terminal width.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_with(&RenderConfig::detect()))
    }
}

/// Wrap one cell against the per-column budget.
///
/// `None` means unbounded: the cell is split on explicit breaks only.
fn wrap_cell(cell: &str, budget: Option<usize>) -> Vec<String> {
    let Some(budget) = budget else {
        return break_lines(cell).into_iter().map(str::to_string).collect();
    };

    // Fast path: a cell already under budget with no explicit break is a
    // single line.
    if !has_explicit_break(cell) && measure_width(cell) < budget {
        return vec![cell.to_string()];
    }

    match wrap(cell, budget) {
        Ok(lines) => lines,
        Err(WrapError::InvalidWidth { .. }) => {
            unreachable!("wrap budget is clamped to at least 1")
        }
    }
}

fn has_explicit_break(cell: &str) -> bool {
    cell.bytes().any(|b| b == b'\n' || b == b'\r')
}

/// Pad `field` to `width` and append it to `output`.
fn pad_into(output: &mut String, field: &str, width: usize, alignment: Alignment) {
    let padding = width.saturating_sub(measure_width(field));
    match alignment {
        Alignment::Left => {
            output.push_str(field);
            output.extend(std::iter::repeat(' ').take(padding));
        }
        Alignment::Right => {
            output.extend(std::iter::repeat(' ').take(padding));
            output.push_str(field);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_column_widths_span_the_whole_table() {
        let mut table = Table::new();
        table.add_row(["a", "bb"]);
        table.add_row(["ccc", "d"]);
        assert_eq!(table.render(80), "| a   | bb |\n| ccc | d  |\n");
    }

    #[test]
    fn test_empty_table_renders_empty() {
        let table = Table::new();
        assert_eq!(table.render(80), "");
        assert_eq!(table.render(0), "");
    }

    #[test]
    fn test_zero_columns_renders_empty() {
        let mut table = Table::new();
        table.add_row(Vec::<String>::new());
        table.add_row(Vec::<String>::new());
        assert_eq!(table.width(), 0);
        assert_eq!(table.height(), 2);
        assert_eq!(table.render(80), "");
    }

    #[test]
    fn test_ragged_row_prints_only_its_columns() {
        let mut table = Table::new();
        table.add_row(["a", "bb"]);
        table.add_row(["c"]);
        assert_eq!(table.width(), 2);
        assert_eq!(table.render(80), "| a | bb |\n| c |\n");
    }

    #[test]
    fn test_empty_row_occupies_no_lines() {
        let mut table = Table::new();
        table.add_row(["a"]);
        table.add_row(Vec::<String>::new());
        assert_eq!(table.height(), 2);
        assert_eq!(table.render(80), "| a |\n");
    }

    #[test]
    fn test_explicit_break_makes_multi_line_cell() {
        let mut table = Table::new();
        table.add_row(["line\nwrap", "x"]);
        assert_eq!(table.render(80), "| line | x |\n| wrap |   |\n");
    }

    #[test]
    fn test_taller_later_cell_backfills_earlier_columns() {
        let mut table = Table::new();
        table.add_row(["x", "a\nb\nc"]);
        assert_eq!(table.render(80), "| x | a |\n|   | b |\n|   | c |\n");
    }

    #[test]
    fn test_soft_wrap_against_budget() {
        let mut table = Table::new();
        table.add_row(["abcdefghij"]);
        // hint 9, one column: budget = 9 - 4 = 5
        assert_eq!(table.render(9), "| abcd- |\n| efgh- |\n| ij    |\n");
    }

    #[test]
    fn test_hint_zero_never_soft_wraps() {
        let mut table = Table::new();
        table.add_row(["a long unbroken line of text"]);
        assert_eq!(table.render(0), "| a long unbroken line of text |\n");
    }

    #[test]
    fn test_hint_zero_still_honors_explicit_breaks() {
        let mut table = Table::new();
        table.add_row(["a\nb"]);
        assert_eq!(table.render(0), "| a |\n| b |\n");
    }

    #[test]
    fn test_tiny_hint_clamps_budget_and_terminates() {
        let mut table = Table::new();
        table.add_row(["abc"]);
        assert_eq!(table.render(1), "| a |\n| b |\n| c |\n");
    }

    #[test]
    fn test_empty_cell_is_padded_to_column_width() {
        let mut table = Table::new();
        table.add_row(["", "b"]);
        table.add_row(["aa", "c"]);
        assert_eq!(table.render(80), "|    | b |\n| aa | c |\n");
    }

    #[test]
    fn test_right_alignment() {
        let mut table = Table::new().with_format(TableFormat::new().with_alignment(Alignment::Right));
        table.add_row(["a", "bb"]);
        table.add_row(["ccc", "d"]);
        assert_eq!(table.render(80), "|   a | bb |\n| ccc |  d |\n");
    }

    #[test]
    fn test_format_mut() {
        let mut table = Table::new();
        table.format_mut().alignment = Alignment::Right;
        table.add_row(["a"]);
        table.add_row(["bbb"]);
        assert_eq!(table.render(80), "|   a |\n| bbb |\n");
    }

    #[test]
    fn test_width_is_monotone() {
        let mut table = Table::new();
        table.add_row(["a", "b", "c"]);
        assert_eq!(table.width(), 3);
        table.add_row(["d"]);
        assert_eq!(table.width(), 3);
    }

    #[test]
    fn test_render_is_repeatable() {
        let mut table = Table::new();
        table.add_row(["wrap me please", "x"]);
        let first = table.render(20);
        let second = table.render(20);
        assert_eq!(first, second);
        // A narrower hint re-derives the layout from the raw rows.
        assert_ne!(table.render(12), first);
        assert_eq!(table.rows()[0].cells(), ["wrap me please", "x"]);
    }

    #[test]
    fn test_render_with_config() {
        let mut table = Table::new();
        table.add_row(["a"]);
        let config = RenderConfig::new(80, false);
        assert_eq!(table.render_with(&config), table.render(80));
    }
}
