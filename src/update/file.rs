//! File slot update functions
//!
//! Handles FileMsg messages for one slot of the session.

use std::path::Path;

use crate::commands::Cmd;
use crate::messages::FileMsg;
use crate::session::{FileSlot, Session};
use crate::util::filename_for_display;

/// Handle file slot messages
pub fn update_file(session: &mut Session, slot: FileSlot, msg: FileMsg) -> Option<Cmd> {
    match msg {
        FileMsg::Open(path) => open_file(session, slot, &path),
        FileMsg::Close => close_file(session, slot),
        FileMsg::Save => save_file(session, slot),
        FileMsg::SetCell { row, col, value } => set_cell(session, slot, row, col, &value),
        FileMsg::Undo => undo(session, slot),
        FileMsg::Redo => redo(session, slot),
    }
}

fn open_file(session: &mut Session, slot: FileSlot, path: &Path) -> Option<Cmd> {
    match session.open(slot, path) {
        Ok(()) => Some(Cmd::Redraw),
        Err(e) => Some(Cmd::error(
            e.title(),
            e.user_message(&filename_for_display(path)),
        )),
    }
}

fn close_file(session: &mut Session, slot: FileSlot) -> Option<Cmd> {
    if !session.file(slot).is_loaded() {
        return None;
    }
    session.close(slot);
    Some(Cmd::Redraw)
}

fn save_file(session: &mut Session, slot: FileSlot) -> Option<Cmd> {
    let file = session.file(slot);
    if !file.is_loaded() {
        return None;
    }
    match file.save() {
        Ok(()) => None,
        Err(e) => {
            tracing::error!("Failed to save {} file: {}", slot, e);
            Some(Cmd::error("Error Saving File", e.to_string()))
        }
    }
}

/// Commit a proposed cell value; rejected values produce no command
fn set_cell(
    session: &mut Session,
    slot: FileSlot,
    row: usize,
    col: usize,
    value: &str,
) -> Option<Cmd> {
    let file = session.file_mut(slot);
    if row >= file.row_count() || col >= file.column_count() {
        return None;
    }
    file.try_set_cell_value(row, col, value)
        .then_some(Cmd::Redraw)
}

fn undo(session: &mut Session, slot: FileSlot) -> Option<Cmd> {
    let cell = session.file_mut(slot).undo()?;
    Some(Cmd::FocusCell {
        slot,
        row: cell.row,
        col: cell.col,
    })
}

fn redo(session: &mut Session, slot: FileSlot) -> Option<Cmd> {
    let cell = session.file_mut(slot).redo()?;
    Some(Cmd::FocusCell {
        slot,
        row: cell.row,
        col: cell.col,
    })
}
