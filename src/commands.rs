//! Command types for the Elm-style architecture
//!
//! Commands represent side effects the view should perform after an update.

use crate::session::FileSlot;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// Request a full redraw of the UI
    Redraw,
    /// Redraw and bring a cell into view (after undo/redo)
    FocusCell {
        slot: FileSlot,
        row: usize,
        col: usize,
    },
    /// Show a warning dialog
    ShowError { title: String, message: String },
}

impl Cmd {
    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Cmd::ShowError {
            title: title.into(),
            message: message.into(),
        }
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::Redraw => true,
            Cmd::FocusCell { .. } => true,
            // Dialogs don't need immediate redraw
            Cmd::ShowError { .. } => false,
        }
    }
}
