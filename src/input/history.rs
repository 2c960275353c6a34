//! Edit history (undo/redo) for committed cell edits.

use super::model::CellPosition;

/// A single committed cell edit that can be undone/redone.
///
/// `current` is always the value the cell holds while the action sits on
/// its stack top: the edited value on the undo stack, the restored value on
/// the redo stack. Moving between stacks flips the two values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditAction {
    pub row: usize,
    pub col: usize,
    /// Value the cell held before this transition
    pub previous: String,
    /// Value the cell holds after this transition
    pub current: String,
}

impl EditAction {
    pub fn new(row: usize, col: usize, previous: String, current: String) -> Self {
        Self {
            row,
            col,
            previous,
            current,
        }
    }

    /// The same transition run backwards
    pub fn flipped(self) -> Self {
        Self {
            row: self.row,
            col: self.col,
            previous: self.current,
            current: self.previous,
        }
    }

    pub fn position(&self) -> CellPosition {
        CellPosition::new(self.row, self.col)
    }
}

/// Edit history with undo/redo stacks.
#[derive(Debug, Clone, Default)]
pub struct EditHistory {
    undo_stack: Vec<EditAction>,
    redo_stack: Vec<EditAction>,
    /// Cap on the undo stack, `None` for unbounded
    max_size: Option<usize>,
}

impl EditHistory {
    /// Create an unbounded edit history
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an edit history that keeps at most `limit` undo entries
    pub fn with_limit(limit: Option<usize>) -> Self {
        Self {
            max_size: limit,
            ..Self::default()
        }
    }

    /// Push an action onto the undo stack (clears redo stack)
    pub fn push(&mut self, action: EditAction) {
        self.redo_stack.clear();
        self.undo_stack.push(action);

        if let Some(max) = self.max_size {
            if self.undo_stack.len() > max {
                let excess = self.undo_stack.len() - max;
                self.undo_stack.drain(..excess);
            }
        }
    }

    /// Move the newest undo entry onto the redo stack
    ///
    /// Returns the flipped action now on top of the redo stack; its
    /// `current` value is what the cell must be set back to.
    pub fn pop_undo(&mut self) -> Option<&EditAction> {
        let action = self.undo_stack.pop()?;
        self.redo_stack.push(action.flipped());
        self.redo_stack.last()
    }

    /// Move the newest redo entry back onto the undo stack
    ///
    /// Returns the flipped action now on top of the undo stack; its
    /// `current` value is what the cell must be set to again.
    pub fn pop_redo(&mut self) -> Option<&EditAction> {
        let action = self.redo_stack.pop()?;
        self.undo_stack.push(action.flipped());
        self.undo_stack.last()
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Clear all history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    /// Get the number of actions in the undo stack
    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    /// Get the number of actions in the redo stack
    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }
}
