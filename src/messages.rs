//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use std::path::PathBuf;

use crate::session::FileSlot;

/// Messages targeting one file slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileMsg {
    /// Load a file into the slot (replacing its current file on success)
    Open(PathBuf),
    /// Close the slot's file
    Close,
    /// Write the slot's grid back to disk
    Save,
    /// Propose a new value for a cell
    SetCell { row: usize, col: usize, value: String },
    /// Revert the newest edit
    Undo,
    /// Reapply the newest undone edit
    Redo,
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    File { slot: FileSlot, msg: FileMsg },
    /// Exchange player and ghost
    Swap,
}

impl Msg {
    pub fn player(msg: FileMsg) -> Self {
        Msg::File {
            slot: FileSlot::Player,
            msg,
        }
    }

    pub fn ghost(msg: FileMsg) -> Self {
        Msg::File {
            slot: FileSlot::Ghost,
            msg,
        }
    }
}
