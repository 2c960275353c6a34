//! A loaded input file: grid, centering, and edit history
//!
//! An [`InputFile`] starts empty, is populated by [`InputFile::load`], takes
//! any number of validated edits and undo/redo steps, and returns to the
//! empty state on [`InputFile::close`].

use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::EditorConfig;
use crate::util::{check_writable, is_likely_binary, validate_file_for_opening, FileOpenError};

use super::centering::Centering;
use super::columns::{column_label, ColumnRole};
use super::history::{EditAction, EditHistory};
use super::model::{CellPosition, InputGrid, LineEnding};
use super::parser::{parse_input, write_input, ParseError, ParsedInput};
use super::validation::is_within_range;

/// Why a load attempt failed
#[derive(Debug, Clone, PartialEq)]
pub enum LoadError {
    /// The file cannot be opened for writing
    WritePermission,
    /// A record is malformed or out of range
    Parse(ParseError),
    /// The file cannot be read as text at all
    Unreadable(FileOpenError),
}

impl LoadError {
    /// 1-based line of the offending record, for parse failures
    pub fn line(&self) -> Option<usize> {
        match self {
            LoadError::Parse(e) => Some(e.line),
            _ => None,
        }
    }

    /// Dialog title for this failure
    pub fn title(&self) -> &'static str {
        match self {
            LoadError::Parse(_) => "Error Parsing File",
            LoadError::WritePermission | LoadError::Unreadable(_) => "Error Opening File",
        }
    }

    /// Get a user-friendly error message
    pub fn user_message(&self, filename: &str) -> String {
        match self {
            LoadError::WritePermission => "This program does not have sufficient permissions \
                 to modify the file.\n\nTry running this program in administrator mode and \
                 make sure the file is not open in another program."
                .to_string(),
            LoadError::Parse(e) => format!("There is an issue with the file on line {}.\n", e.line),
            LoadError::Unreadable(e) => e.user_message(filename),
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::WritePermission => write!(f, "file is not writable"),
            LoadError::Parse(e) => write!(f, "parse error: {}", e),
            LoadError::Unreadable(e) => write!(f, "cannot read file: {}", e),
        }
    }
}

impl std::error::Error for LoadError {}

/// Why a save attempt failed
#[derive(Debug)]
pub enum SaveError {
    /// No file is loaded
    NotLoaded,
    Io(std::io::Error),
}

impl fmt::Display for SaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveError::NotLoaded => write!(f, "no file loaded"),
            SaveError::Io(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for SaveError {}

impl From<std::io::Error> for SaveError {
    fn from(e: std::io::Error) -> Self {
        SaveError::Io(e)
    }
}

/// One input file and its edit state
#[derive(Debug, Clone)]
pub struct InputFile {
    path: Option<PathBuf>,
    grid: InputGrid,
    centering: Centering,
    line_ending: LineEnding,
    history: EditHistory,
    max_file_size: u64,
}

impl Default for InputFile {
    fn default() -> Self {
        Self::with_config(&EditorConfig::default())
    }
}

impl InputFile {
    /// Create an empty handle with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty handle using the history and size limits from `config`
    pub fn with_config(config: &EditorConfig) -> Self {
        Self {
            path: None,
            grid: InputGrid::new(),
            centering: Centering::Unknown,
            line_ending: LineEnding::default(),
            history: EditHistory::with_limit(config.history_limit),
            max_file_size: config.max_file_size_bytes(),
        }
    }

    /// Read and validate `path` without touching any handle
    pub fn read(path: &Path, max_file_size: u64) -> Result<ParsedInput, LoadError> {
        validate_file_for_opening(path, max_file_size).map_err(LoadError::Unreadable)?;

        if check_writable(path).is_err() {
            return Err(LoadError::WritePermission);
        }

        if is_likely_binary(path) {
            return Err(LoadError::Unreadable(FileOpenError::BinaryFile));
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| LoadError::Unreadable(FileOpenError::from(e)))?;

        parse_input(&content).map_err(LoadError::Parse)
    }

    /// Load `path` into this handle
    ///
    /// The file is parsed in full before anything is replaced: on failure the
    /// previously loaded file, if any, stays exactly as it was.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<(), LoadError> {
        let path = path.as_ref();

        let parsed = match Self::read(path, self.max_file_size) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Failed to load {}: {}", path.display(), e);
                return Err(e);
            }
        };

        self.grid = parsed.grid;
        self.centering = parsed.centering;
        self.line_ending = parsed.line_ending;
        self.path = Some(path.to_path_buf());
        self.history.clear();

        tracing::info!(
            rows = self.grid.row_count(),
            centering = %self.centering,
            "Loaded {}",
            path.display()
        );
        Ok(())
    }

    /// Drop the grid and history and return to the empty state
    pub fn close(&mut self) {
        if let Some(path) = &self.path {
            tracing::debug!("Closed {}", path.display());
        }
        self.path = None;
        self.grid = InputGrid::new();
        self.centering = Centering::Unknown;
        self.line_ending = LineEnding::default();
        self.history.clear();
    }

    /// Write the grid back to the file it was loaded from
    pub fn save(&self) -> Result<(), SaveError> {
        let path = self.path.as_ref().ok_or(SaveError::NotLoaded)?;
        let content = write_input(&self.grid, self.line_ending)?;
        std::fs::write(path, content)?;
        tracing::info!(rows = self.grid.row_count(), "Saved {}", path.display());
        Ok(())
    }

    /// Path of the loaded file, `None` when nothing is loaded
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn is_loaded(&self) -> bool {
        self.path.is_some()
    }

    /// Whether this handle holds the file at `path`
    ///
    /// Paths are compared after canonicalization when both resolve, so
    /// `./a.csv` and `/dir/a.csv` name the same file.
    pub fn is_loaded_from(&self, path: &Path) -> bool {
        let Some(own) = &self.path else {
            return false;
        };
        match (own.canonicalize(), path.canonicalize()) {
            (Ok(a), Ok(b)) => a == b,
            _ => own == path,
        }
    }

    pub fn centering(&self) -> Centering {
        self.centering
    }

    pub fn row_count(&self) -> usize {
        self.grid.row_count()
    }

    pub fn column_count(&self) -> usize {
        self.grid.column_count()
    }

    /// Get cell value at position
    ///
    /// # Panics
    ///
    /// Panics if the position is out of bounds.
    pub fn get_cell_value(&self, row: usize, col: usize) -> &str {
        self.grid.get(row, col)
    }

    /// Validate and commit a new cell value
    ///
    /// Returns `false` and changes nothing when the value is rejected: the
    /// column is the frame counter, or the value does not parse or lies
    /// outside the column's range under the file's centering. Surrounding
    /// whitespace is dropped before the value is stored. Every accepted value
    /// is one history entry and clears the redo stack, even when it equals
    /// what the cell already holds.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds. A column past the last one is
    /// rejected like any other non-editable column.
    pub fn try_set_cell_value(&mut self, row: usize, col: usize, value: &str) -> bool {
        let value = value.trim();
        let mut candidate = self.grid.record(row).clone();

        if !ColumnRole::of(col).is_some_and(ColumnRole::is_editable) {
            tracing::warn!(row, col, "Rejected edit of read-only column");
            return false;
        }

        let previous = std::mem::replace(&mut candidate[col], value.to_string());
        if !is_within_range(&candidate, self.centering) {
            tracing::warn!(
                row,
                column = column_label(col),
                value,
                centering = %self.centering,
                "Rejected out-of-range value"
            );
            return false;
        }

        self.grid.set(row, col, value);
        self.history
            .push(EditAction::new(row, col, previous, value.to_string()));
        tracing::debug!(row, column = column_label(col), value, "Committed edit");
        true
    }

    /// Revert the newest committed edit, returning the cell it touched
    pub fn undo(&mut self) -> Option<CellPosition> {
        let action = self.history.pop_undo()?;
        self.grid.set(action.row, action.col, &action.current);
        tracing::debug!(row = action.row, col = action.col, "Undo");
        Some(action.position())
    }

    /// Reapply the newest undone edit, returning the cell it touched
    pub fn redo(&mut self) -> Option<CellPosition> {
        let action = self.history.pop_redo()?;
        self.grid.set(action.row, action.col, &action.current);
        tracing::debug!(row = action.row, col = action.col, "Redo");
        Some(action.position())
    }

    pub fn undo_count(&self) -> usize {
        self.history.undo_count()
    }

    pub fn redo_count(&self) -> usize {
        self.history.redo_count()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::parser::ParseErrorKind;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_input(content: &str) -> NamedTempFile {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(content.as_bytes()).unwrap();
        temp.flush().unwrap();
        temp
    }

    #[test]
    fn test_new_handle_is_empty() {
        let file = InputFile::new();
        assert!(!file.is_loaded());
        assert_eq!(file.path(), None);
        assert_eq!(file.centering(), Centering::Unknown);
        assert_eq!(file.row_count(), 0);
        assert_eq!(file.undo_count(), 0);
        assert_eq!(file.redo_count(), 0);
    }

    #[test]
    fn test_load_and_edit() {
        let temp = temp_input("0,0,0,0,7,7,0\n1,0,0,0,10,7,0\n");
        let mut file = InputFile::new();
        file.load(temp.path()).unwrap();

        assert!(file.is_loaded());
        assert_eq!(file.centering(), Centering::SevenCentered);
        assert!(file.try_set_cell_value(0, 4, "14"));
        assert_eq!(file.get_cell_value(0, 4), "14");
        assert_eq!(file.undo_count(), 1);
    }

    #[test]
    fn test_frame_column_is_read_only() {
        let temp = temp_input("0,0,0,0,7,7,0\n");
        let mut file = InputFile::new();
        file.load(temp.path()).unwrap();

        assert!(!file.try_set_cell_value(0, 0, "5"));
        assert_eq!(file.get_cell_value(0, 0), "0");
        assert_eq!(file.undo_count(), 0);
    }

    #[test]
    fn test_same_value_commit_is_recorded() {
        let temp = temp_input("0,1,0,0,7,7,0\n");
        let mut file = InputFile::new();
        file.load(temp.path()).unwrap();

        assert!(file.try_set_cell_value(0, 1, "0"));
        file.undo();
        assert_eq!(file.redo_count(), 1);

        assert!(file.try_set_cell_value(0, 1, "1"));
        assert_eq!(file.undo_count(), 1);
        assert_eq!(file.redo_count(), 0);

        assert_eq!(file.undo(), Some(CellPosition::new(0, 1)));
        assert_eq!(file.get_cell_value(0, 1), "1");
    }

    #[test]
    fn test_commit_stores_trimmed_value() {
        let temp = temp_input("0,0,0,0,7,7,0\n");
        let mut file = InputFile::new();
        file.load(temp.path()).unwrap();

        assert!(file.try_set_cell_value(0, 1, " 1\n"));
        assert_eq!(file.get_cell_value(0, 1), "1");
        assert!(!file.try_set_cell_value(0, 2, "1\n0"));
    }

    #[test]
    fn test_load_error_messages() {
        let err = LoadError::Parse(ParseError {
            line: 17,
            kind: ParseErrorKind::OutOfRange,
        });
        assert_eq!(err.line(), Some(17));
        assert_eq!(err.title(), "Error Parsing File");
        assert_eq!(
            err.user_message("player.csv"),
            "There is an issue with the file on line 17.\n"
        );
        assert_eq!(LoadError::WritePermission.title(), "Error Opening File");
        assert_eq!(LoadError::WritePermission.line(), None);
    }

    #[test]
    fn test_save_without_file() {
        let file = InputFile::new();
        assert!(matches!(file.save(), Err(SaveError::NotLoaded)));
    }
}
