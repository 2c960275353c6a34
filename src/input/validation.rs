//! Cell value validation
//!
//! Pure checks used both when a file is loaded (every row) and when a single
//! cell is edited (one row with the proposed value substituted). Nothing here
//! fails loudly: each check returns a verdict and callers decide whether that
//! is a parse error or a rejected edit.

use super::centering::Centering;
use super::columns::{ColumnRole, COLUMN_COUNT, DPAD_MAX};

/// Parse a numeric field, ignoring surrounding whitespace
pub fn parse_field(text: &str) -> Option<i32> {
    text.trim().parse().ok()
}

/// Smallest value accepted in `column` under `centering`
///
/// # Panics
///
/// Panics if `column` is past the last column.
pub fn smallest_accepted(column: usize, centering: Centering) -> i32 {
    match role(column) {
        ColumnRole::Frame | ColumnRole::Button | ColumnRole::DPad => 0,
        ColumnRole::Analog => *centering.analog_range().start(),
    }
}

/// Largest value accepted in `column` under `centering`
///
/// # Panics
///
/// Panics if `column` is past the last column.
pub fn largest_accepted(column: usize, centering: Centering) -> i32 {
    match role(column) {
        ColumnRole::Frame => i32::MAX,
        ColumnRole::Button => 1,
        ColumnRole::DPad => DPAD_MAX,
        ColumnRole::Analog => *centering.analog_range().end(),
    }
}

fn role(column: usize) -> ColumnRole {
    ColumnRole::of(column)
        .unwrap_or_else(|| panic!("column {column} out of range (max {})", COLUMN_COUNT - 1))
}

/// Whether a row has the right shape: the expected field count, every field
/// an integer
pub fn is_well_formed<S: AsRef<str>>(row: &[S]) -> bool {
    row.len() == COLUMN_COUNT && row.iter().all(|cell| parse_field(cell.as_ref()).is_some())
}

/// Whether a single cell value parses and lies within its column's bounds
pub fn is_value_accepted(column: usize, text: &str, centering: Centering) -> bool {
    if column >= COLUMN_COUNT {
        return false;
    }
    match parse_field(text) {
        Some(value) => {
            (smallest_accepted(column, centering)..=largest_accepted(column, centering))
                .contains(&value)
        }
        None => false,
    }
}

/// Whether every field of a well-formed row lies within its column's bounds
///
/// Rows that are not well formed are never within range.
pub fn is_within_range<S: AsRef<str>>(row: &[S], centering: Centering) -> bool {
    is_well_formed(row)
        && row
            .iter()
            .enumerate()
            .all(|(col, cell)| is_value_accepted(col, cell.as_ref(), centering))
}
