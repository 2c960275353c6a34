//! TAS input file editor core
//!
//! This crate loads per-frame controller input files into validated grids,
//! detects their analog centering convention, and keeps an exact undo/redo
//! history of cell edits, following the Elm Architecture pattern for the
//! session layer.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod input;
pub mod messages;
pub mod session;
pub mod tracing;
pub mod update;
pub mod util;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::EditorConfig;
pub use input::{Centering, InputFile, LoadError};
pub use messages::{FileMsg, Msg};
pub use session::{FileSlot, Session};
