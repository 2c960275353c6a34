//! Analog stick centering conventions and their detection
//!
//! Input files store stick axes either around zero (`-7..=7`) or around seven
//! (`0..=14`). The convention is not recorded in the file, so it is inferred
//! from values that only one of the two ranges accepts.

use std::fmt;
use std::ops::RangeInclusive;

use super::columns::ANALOG_COLUMNS;
use super::validation::parse_field;

/// Axis range of a seven-centered file
pub const SEVEN_CENTERED_RANGE: RangeInclusive<i32> = 0..=14;

/// Axis range of a zero-centered file
pub const ZERO_CENTERED_RANGE: RangeInclusive<i32> = -7..=7;

/// Analog value convention used by a file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Centering {
    /// No value seen so far tells the conventions apart
    #[default]
    Unknown,
    /// Axes range over `0..=14`, resting at 7
    SevenCentered,
    /// Axes range over `-7..=7`, resting at 0
    ZeroCentered,
}

impl Centering {
    /// Accepted analog range under this convention
    ///
    /// `Unknown` only accepts values legal under both conventions, so an
    /// undetermined file cannot be edited into one of them.
    pub fn analog_range(self) -> RangeInclusive<i32> {
        match self {
            Centering::SevenCentered => SEVEN_CENTERED_RANGE,
            Centering::ZeroCentered => ZERO_CENTERED_RANGE,
            Centering::Unknown => {
                *SEVEN_CENTERED_RANGE.start()..=*ZERO_CENTERED_RANGE.end()
            }
        }
    }

    /// Classify a single analog value
    ///
    /// Returns the only convention that accepts `value`, or `None` when both
    /// or neither accept it.
    pub fn discerned_by(value: i32) -> Option<Centering> {
        let seven = SEVEN_CENTERED_RANGE.contains(&value);
        let zero = ZERO_CENTERED_RANGE.contains(&value);
        match (seven, zero) {
            (true, false) => Some(Centering::SevenCentered),
            (false, true) => Some(Centering::ZeroCentered),
            _ => None,
        }
    }
}

impl fmt::Display for Centering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Centering::Unknown => write!(f, "unknown"),
            Centering::SevenCentered => write!(f, "7 centered"),
            Centering::ZeroCentered => write!(f, "0 centered"),
        }
    }
}

/// Detect the centering of a set of rows
///
/// Scans analog cells in row order and returns the convention of the first
/// discerning value. Ambiguous, out-of-range, and unparseable cells are
/// skipped. Rows shorter than the analog columns are ignored.
pub fn detect_centering<R, S>(rows: &[R]) -> Centering
where
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    for row in rows {
        let cells = row.as_ref();
        for &col in &ANALOG_COLUMNS {
            let Some(value) = cells.get(col).and_then(|c| parse_field(c.as_ref())) else {
                continue;
            };
            if let Some(centering) = Centering::discerned_by(value) {
                return centering;
            }
        }
    }

    Centering::Unknown
}
