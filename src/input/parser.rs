//! Input file parsing and serialization using the csv crate
//!
//! Each non-blank line is one record. Parsing runs in two passes. The first
//! checks every record's shape and stops at the first malformed line. Once
//! every record is known to be numeric, the analog centering is detected over
//! the whole file and a second pass checks each record against the accepted
//! ranges.

use std::fmt;

use super::centering::{detect_centering, Centering};
use super::columns::COLUMN_COUNT;
use super::model::{InputGrid, LineEnding, Record};
use super::validation::{is_well_formed, is_within_range};

/// Why a line was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The file holds no records at all
    Empty,
    /// Wrong field count or a non-numeric field
    Malformed,
    /// A field lies outside the range its column accepts
    OutOfRange,
    /// The reader itself failed (e.g. unbalanced quotes)
    Unreadable(String),
}

/// Error type for input parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// 1-based line number of the offending record
    pub line: usize,
    pub kind: ParseErrorKind,
}

impl ParseError {
    fn new(line: usize, kind: ParseErrorKind) -> Self {
        Self { line, kind }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ParseErrorKind::Empty => write!(f, "input file contains no frames"),
            ParseErrorKind::Malformed => write!(
                f,
                "line {}: expected {} integer fields",
                self.line, COLUMN_COUNT
            ),
            ParseErrorKind::OutOfRange => {
                write!(f, "line {}: value out of accepted range", self.line)
            }
            ParseErrorKind::Unreadable(msg) => write!(f, "line {}: {}", self.line, msg),
        }
    }
}

impl std::error::Error for ParseError {}

/// A fully validated file, ready to be swapped into a handle
#[derive(Debug, Clone)]
pub struct ParsedInput {
    pub grid: InputGrid,
    pub centering: Centering,
    pub line_ending: LineEnding,
}

/// Parse and validate input file content
pub fn parse_input(content: &str) -> Result<ParsedInput, ParseError> {
    let mut builder = csv::ReaderBuilder::new();
    builder
        .has_headers(false)
        .flexible(true)
        .buffer_capacity(256);

    // (line number, cells) for every non-blank line
    let mut rows: Vec<(usize, Vec<String>)> = Vec::new();

    for (index, text) in content.lines().enumerate() {
        let line = index + 1;
        if text.trim().is_empty() {
            continue;
        }

        let cells = split_record(&builder, text)
            .map_err(|e| ParseError::new(line, ParseErrorKind::Unreadable(e.to_string())))?;

        if !is_well_formed(&cells) {
            return Err(ParseError::new(line, ParseErrorKind::Malformed));
        }
        rows.push((line, cells));
    }

    if rows.is_empty() {
        return Err(ParseError::new(1, ParseErrorKind::Empty));
    }

    let cells_only: Vec<&[String]> = rows.iter().map(|(_, cells)| cells.as_slice()).collect();
    let centering = detect_centering(&cells_only);
    tracing::debug!(rows = rows.len(), %centering, "Detected analog centering");

    let mut records: Vec<Record> = Vec::with_capacity(rows.len());
    for (line, cells) in rows {
        if !is_within_range(&cells, centering) {
            return Err(ParseError::new(line, ParseErrorKind::OutOfRange));
        }
        let record: Record = cells
            .try_into()
            .map_err(|_| ParseError::new(line, ParseErrorKind::Malformed))?;
        records.push(record);
    }

    Ok(ParsedInput {
        grid: InputGrid::from_records(records),
        centering,
        line_ending: LineEnding::detect(content),
    })
}

/// Split one line into its fields
fn split_record(builder: &csv::ReaderBuilder, text: &str) -> csv::Result<Vec<String>> {
    let mut reader = builder.from_reader(text.as_bytes());
    let mut record = csv::StringRecord::new();
    reader.read_record(&mut record)?;
    Ok(record.iter().map(str::to_string).collect())
}

/// Serialize a grid back to delimited text, one record per line
pub fn write_input(grid: &InputGrid, line_ending: LineEnding) -> std::io::Result<String> {
    let terminator = match line_ending {
        LineEnding::Lf => csv::Terminator::Any(b'\n'),
        LineEnding::CrLf => csv::Terminator::CRLF,
    };
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(terminator)
        .from_writer(Vec::new());

    for record in grid.records() {
        writer.write_record(record.iter())?;
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    String::from_utf8(bytes)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_file() {
        let content = "0,0,0,0,7,7,0\n1,1,0,0,14,7,0\n";
        let parsed = parse_input(content).unwrap();

        assert_eq!(parsed.grid.row_count(), 2);
        assert_eq!(parsed.grid.get(1, 1), "1");
        assert_eq!(parsed.grid.get(1, 4), "14");
        assert_eq!(parsed.centering, Centering::SevenCentered);
        assert_eq!(parsed.line_ending, LineEnding::Lf);
    }

    #[test]
    fn test_parse_without_trailing_newline() {
        let parsed = parse_input("0,0,0,0,0,-2,0").unwrap();
        assert_eq!(parsed.grid.row_count(), 1);
        assert_eq!(parsed.centering, Centering::ZeroCentered);
    }

    #[test]
    fn test_parse_crlf() {
        let parsed = parse_input("0,0,0,0,7,7,0\r\n1,0,0,0,7,7,0\r\n").unwrap();
        assert_eq!(parsed.grid.row_count(), 2);
        assert_eq!(parsed.grid.get(1, 0), "1");
        assert_eq!(parsed.line_ending, LineEnding::CrLf);
    }

    #[test]
    fn test_parse_ambiguous_file_is_unknown() {
        let parsed = parse_input("0,0,0,0,7,7,0\n1,0,0,0,0,7,0\n").unwrap();
        assert_eq!(parsed.centering, Centering::Unknown);
    }

    #[test]
    fn test_extra_field_on_first_line() {
        let err = parse_input("0,0,0,0,7,7,0,0\n1,0,0,0,7,7,0\n").unwrap_err();
        assert_eq!(err.line, 1);
        assert_eq!(err.kind, ParseErrorKind::Malformed);
    }

    #[test]
    fn test_missing_field_reports_line() {
        let err = parse_input("0,0,0,0,7,7,0\n1,0,0,0,7,7\n").unwrap_err();
        assert_eq!(err.line, 2);
    }

    #[test]
    fn test_non_numeric_field_reports_line() {
        let err = parse_input("0,0,0,0,7,7,0\n1,0,0,0,7,7,0\n2,a,0,0,7,7,0\n").unwrap_err();
        assert_eq!(err, ParseError::new(3, ParseErrorKind::Malformed));
    }

    #[test]
    fn test_button_out_of_range_reports_line() {
        let err = parse_input("0,0,0,0,7,7,0\n1,0,2,0,7,7,0\n").unwrap_err();
        assert_eq!(err, ParseError::new(2, ParseErrorKind::OutOfRange));
    }

    #[test]
    fn test_conflicting_centering_reports_later_line() {
        // Line 1 fixes zero-centering, line 3 needs seven-centering
        let content = "0,0,0,0,-3,0,0\n1,0,0,0,0,0,0\n2,0,0,0,12,0,0\n";
        let err = parse_input(content).unwrap_err();
        assert_eq!(err, ParseError::new(3, ParseErrorKind::OutOfRange));
    }

    #[test]
    fn test_analog_outside_both_ranges() {
        let err = parse_input("0,0,0,0,7,7,0\n1,0,0,0,20,7,0\n").unwrap_err();
        assert_eq!(err, ParseError::new(2, ParseErrorKind::OutOfRange));
    }

    #[test]
    fn test_blank_lines_are_skipped_but_counted() {
        let content = "0,0,0,0,7,7,0\n\n1,0,0,0,7,7,9\n";
        let err = parse_input(content).unwrap_err();
        assert_eq!(err.line, 3);

        let parsed = parse_input("0,0,0,0,7,7,0\n\n1,0,0,0,7,7,0\n").unwrap();
        assert_eq!(parsed.grid.row_count(), 2);
    }

    #[test]
    fn test_empty_file() {
        let err = parse_input("").unwrap_err();
        assert_eq!(err, ParseError::new(1, ParseErrorKind::Empty));
    }

    #[test]
    fn test_write_round_trips_original_text() {
        let content = "0,0,0,0,7,7,0\n1, 1,0,0,14,07,0\n";
        let parsed = parse_input(content).unwrap();
        let written = write_input(&parsed.grid, parsed.line_ending).unwrap();
        assert_eq!(written, content);
    }

    #[test]
    fn test_write_keeps_crlf() {
        let content = "0,0,0,0,7,7,0\r\n1,0,0,0,7,7,0\r\n";
        let parsed = parse_input(content).unwrap();
        let written = write_input(&parsed.grid, parsed.line_ending).unwrap();
        assert_eq!(written, content);
    }

    #[test]
    fn test_error_display() {
        let err = ParseError::new(17, ParseErrorKind::OutOfRange);
        assert_eq!(err.to_string(), "line 17: value out of accepted range");
    }
}
