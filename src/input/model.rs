//! Input grid data model
//!
//! One record per frame, every record exactly [`COLUMN_COUNT`] cells wide.
//! Cells are kept as the text read from disk so an unedited file writes back
//! byte for byte.

use super::columns::COLUMN_COUNT;

/// One frame's worth of cells
pub type Record = [String; COLUMN_COUNT];

/// Position of a cell in the grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CellPosition {
    pub row: usize,
    pub col: usize,
}

impl CellPosition {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Line terminator used when writing records back out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    /// Pick the terminator a file predominantly uses
    pub fn detect(content: &str) -> Self {
        let crlf = content.matches("\r\n").count();
        let lf = content.matches('\n').count();
        if crlf > 0 && crlf * 2 >= lf {
            LineEnding::CrLf
        } else {
            LineEnding::Lf
        }
    }
}

/// Rectangular table of cell text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputGrid {
    records: Vec<Record>,
}

impl InputGrid {
    /// Create an empty grid
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a grid from already-shaped records
    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn row_count(&self) -> usize {
        self.records.len()
    }

    pub fn column_count(&self) -> usize {
        COLUMN_COUNT
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Get cell value at position
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is out of bounds. Callers clamp to
    /// [`row_count`](Self::row_count) and [`column_count`](Self::column_count).
    pub fn get(&self, row: usize, col: usize) -> &str {
        self.check_bounds(row, col);
        &self.records[row][col]
    }

    /// Set cell value at position without validating it
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: &str) {
        self.check_bounds(row, col);
        self.records[row][col] = value.to_string();
    }

    /// Borrow a whole record
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    pub fn record(&self, row: usize) -> &Record {
        self.check_bounds(row, 0);
        &self.records[row]
    }

    /// Iterate over all records in order
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    fn check_bounds(&self, row: usize, col: usize) {
        assert!(
            row < self.records.len() && col < COLUMN_COUNT,
            "cell ({row}, {col}) out of bounds for {}x{COLUMN_COUNT} grid",
            self.records.len()
        );
    }
}
