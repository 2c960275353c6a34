//! Column layout of an input file
//!
//! Every record has the same seven fields. Their meaning is fixed by position:
//!
//! ```text
//! frame, A, B, L, horizontal, vertical, d-pad
//! ```

/// Number of fields in every record
pub const COLUMN_COUNT: usize = 7;

/// Index of the frame counter column
pub const FRAME_COLUMN: usize = 0;

/// Indices of the face/shoulder button columns (A, B, L)
pub const BUTTON_COLUMNS: [usize; 3] = [1, 2, 3];

/// Indices of the analog stick columns (horizontal, vertical)
pub const ANALOG_COLUMNS: [usize; 2] = [4, 5];

/// Index of the directional pad column
pub const DPAD_COLUMN: usize = 6;

/// Highest accepted d-pad value (0 = none, 1 = up, 2 = down, 3 = left, 4 = right)
pub const DPAD_MAX: i32 = 4;

/// What a column holds, derived from its index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnRole {
    Frame,
    Button,
    Analog,
    DPad,
}

impl ColumnRole {
    /// Role of the column at `index`, or `None` past the last column
    pub fn of(index: usize) -> Option<Self> {
        match index {
            FRAME_COLUMN => Some(ColumnRole::Frame),
            i if BUTTON_COLUMNS.contains(&i) => Some(ColumnRole::Button),
            i if ANALOG_COLUMNS.contains(&i) => Some(ColumnRole::Analog),
            DPAD_COLUMN => Some(ColumnRole::DPad),
            _ => None,
        }
    }

    /// Whether cells in this column may be changed through an edit
    pub fn is_editable(self) -> bool {
        !matches!(self, ColumnRole::Frame)
    }
}

/// Short header label for a column, for display and log messages
pub fn column_label(index: usize) -> &'static str {
    match index {
        0 => "Frame",
        1 => "A",
        2 => "B",
        3 => "L",
        4 => "Horizontal",
        5 => "Vertical",
        6 => "D-Pad",
        _ => "?",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_column_has_a_role() {
        for index in 0..COLUMN_COUNT {
            assert!(ColumnRole::of(index).is_some(), "column {index}");
        }
        assert_eq!(ColumnRole::of(COLUMN_COUNT), None);
    }

    #[test]
    fn test_roles_by_index() {
        assert_eq!(ColumnRole::of(0), Some(ColumnRole::Frame));
        assert_eq!(ColumnRole::of(1), Some(ColumnRole::Button));
        assert_eq!(ColumnRole::of(3), Some(ColumnRole::Button));
        assert_eq!(ColumnRole::of(4), Some(ColumnRole::Analog));
        assert_eq!(ColumnRole::of(5), Some(ColumnRole::Analog));
        assert_eq!(ColumnRole::of(6), Some(ColumnRole::DPad));
    }

    #[test]
    fn test_frame_column_not_editable() {
        assert!(!ColumnRole::Frame.is_editable());
        assert!(ColumnRole::Button.is_editable());
        assert!(ColumnRole::Analog.is_editable());
        assert!(ColumnRole::DPad.is_editable());
    }
}
