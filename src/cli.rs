//! Command-line argument parsing for the editor
//!
//! Supports:
//! - Loading a player file and an optional ghost file
//! - Applying validated cell edits to the player file
//! - Saving the edited player file in place

use clap::Parser;
use std::path::PathBuf;

use crate::session::FileSlot;

/// Validate and edit TAS input files
#[derive(Parser, Debug)]
#[command(name = "ttk-edit", version, about = "Validate and edit TAS input files")]
pub struct CliArgs {
    /// Player input file
    #[arg(value_name = "PLAYER")]
    pub player: Option<PathBuf>,

    /// Ghost input file
    #[arg(value_name = "GHOST")]
    pub ghost: Option<PathBuf>,

    /// Set a player cell, as ROW:COL=VALUE (row and column are 0-indexed)
    #[arg(long = "set", value_name = "ROW:COL=VALUE", value_parser = parse_cell_edit)]
    pub edits: Vec<CellEdit>,

    /// Write the player file back after applying edits
    #[arg(long)]
    pub save: bool,
}

/// A cell edit requested on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellEdit {
    pub row: usize,
    pub col: usize,
    pub value: String,
}

/// Parse `ROW:COL=VALUE`
pub fn parse_cell_edit(s: &str) -> Result<CellEdit, String> {
    let (position, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected ROW:COL=VALUE, got '{}'", s))?;
    let (row, col) = position
        .split_once(':')
        .ok_or_else(|| format!("expected ROW:COL before '=', got '{}'", position))?;

    let row = row
        .trim()
        .parse()
        .map_err(|_| format!("invalid row '{}'", row))?;
    let col = col
        .trim()
        .parse()
        .map_err(|_| format!("invalid column '{}'", col))?;

    Ok(CellEdit {
        row,
        col,
        value: value.trim().to_string(),
    })
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct StartupConfig {
    /// Files to open, in order
    pub files: Vec<(FileSlot, PathBuf)>,
    /// Edits applied to the player file after loading
    pub edits: Vec<CellEdit>,
    /// Save the player file after the edits
    pub save: bool,
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    pub fn into_config(self) -> Result<StartupConfig, String> {
        if self.player.is_none() && (!self.edits.is_empty() || self.save) {
            return Err("--set and --save need a player file".to_string());
        }

        let files = [(FileSlot::Player, self.player), (FileSlot::Ghost, self.ghost)]
            .into_iter()
            .filter_map(|(slot, path)| path.map(|p| (slot, p)))
            .collect();

        Ok(StartupConfig {
            files,
            edits: self.edits,
            save: self.save,
        })
    }
}
