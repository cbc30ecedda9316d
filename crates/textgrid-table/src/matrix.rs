//! The per-row line matrix.
//!
//! One matrix exists per table row while that row is being rendered. Its
//! height is the line count of the row's tallest wrapped cell; its width is
//! the number of cells in the row. Every position holds either a wrapped
//! line or an empty placeholder, so the grid is rectangular at all times.

use smallvec::{smallvec, SmallVec};

/// One physical output line: the fields for each column, left to right.
pub(crate) type MatrixLine = SmallVec<[String; 4]>;

/// Rectangular grid of wrapped lines × columns for a single table row.
#[derive(Debug, Default)]
pub(crate) struct RowMatrix {
    lines: Vec<MatrixLine>,
}

impl RowMatrix {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Place one wrapped cell into column `col`.
    ///
    /// Cells must be placed in column order. The matrix grows in height when
    /// the cell has more lines than any cell before it; newly created matrix
    /// lines are pre-filled with empty fields for the columns already
    /// placed. A cell with fewer lines than the current height is padded
    /// with empty fields at the bottom.
    pub(crate) fn place(&mut self, col: usize, cell_lines: &[String]) {
        if cell_lines.len() > self.lines.len() {
            self.lines
                .resize_with(cell_lines.len(), || smallvec![String::new(); col]);
        }

        for (idx, line) in self.lines.iter_mut().enumerate() {
            debug_assert_eq!(line.len(), col, "matrix lost rectangularity");
            match cell_lines.get(idx) {
                Some(cell_line) => line.push(cell_line.clone()),
                None => line.push(String::new()),
            }
        }
    }

    pub(crate) fn lines(&self) -> &[MatrixLine] {
        &self.lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_single_cell() {
        let mut matrix = RowMatrix::new();
        matrix.place(0, &owned(&["a"]));
        assert_eq!(matrix.lines().len(), 1);
        assert_eq!(matrix.lines()[0].as_slice(), ["a".to_string()]);
    }

    #[test]
    fn test_short_cell_is_bottom_padded() {
        let mut matrix = RowMatrix::new();
        matrix.place(0, &owned(&["a", "b"]));
        matrix.place(1, &owned(&["x"]));
        assert_eq!(matrix.lines()[0].as_slice(), ["a".to_string(), "x".to_string()]);
        assert_eq!(matrix.lines()[1].as_slice(), ["b".to_string(), String::new()]);
    }

    #[test]
    fn test_growth_backfills_earlier_columns() {
        let mut matrix = RowMatrix::new();
        matrix.place(0, &owned(&["x"]));
        matrix.place(1, &owned(&["a", "b", "c"]));
        assert_eq!(matrix.lines().len(), 3);
        assert_eq!(matrix.lines()[1].as_slice(), [String::new(), "b".to_string()]);
        assert_eq!(matrix.lines()[2].as_slice(), [String::new(), "c".to_string()]);
    }

    #[test]
    fn test_empty_row_has_no_lines() {
        let matrix = RowMatrix::new();
        assert!(matrix.lines().is_empty());
    }
}
