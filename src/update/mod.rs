//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod file;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::session::Session;

pub use file::update_file;

/// Main update function - dispatches to sub-handlers
pub fn update(session: &mut Session, msg: Msg) -> Option<Cmd> {
    tracing::trace!(?msg, "update");
    match msg {
        Msg::File { slot, msg } => update_file(session, slot, msg),
        Msg::Swap => session.swap().then_some(Cmd::Redraw),
    }
}
