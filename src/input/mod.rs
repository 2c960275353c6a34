//! Input file core
//!
//! Turns a delimited per-frame input file into a validated grid and keeps an
//! exact undo/redo history of every cell edit.
//!
//! # Architecture
//!
//! ```text
//! InputFile
//! ├── InputGrid      (records of cell text)
//! ├── Centering      (detected once at load, fixed afterwards)
//! └── EditHistory    (undo stack + redo stack of EditAction)
//! ```
//!
//! Loading flows parser → validation → centering detection → range check.
//! Edits flow validation → grid → history.

mod centering;
mod columns;
mod file;
mod history;
mod model;
mod parser;
mod validation;

pub use centering::{
    detect_centering, Centering, SEVEN_CENTERED_RANGE, ZERO_CENTERED_RANGE,
};
pub use columns::{
    column_label, ColumnRole, ANALOG_COLUMNS, BUTTON_COLUMNS, COLUMN_COUNT, DPAD_COLUMN,
    DPAD_MAX, FRAME_COLUMN,
};
pub use file::{InputFile, LoadError, SaveError};
pub use history::{EditAction, EditHistory};
pub use model::{CellPosition, InputGrid, LineEnding, Record};
pub use parser::{parse_input, write_input, ParseError, ParseErrorKind, ParsedInput};
pub use validation::{
    is_value_accepted, is_well_formed, is_within_range, largest_accepted, parse_field,
    smallest_accepted,
};
