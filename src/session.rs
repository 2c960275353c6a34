//! Player and ghost file slots
//!
//! A session holds two independent input files. They share nothing: the only
//! cross-slot rule is that one path can be open in at most one slot.

use std::fmt;
use std::path::Path;

use crate::config::EditorConfig;
use crate::input::{Centering, InputFile, LoadError};

/// Which of the two files an operation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileSlot {
    Player,
    Ghost,
}

impl FileSlot {
    pub fn label(self) -> &'static str {
        match self {
            FileSlot::Player => "Player",
            FileSlot::Ghost => "Ghost",
        }
    }
}

impl fmt::Display for FileSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Why a file could not be opened into a slot
#[derive(Debug, Clone, PartialEq)]
pub enum OpenError {
    /// The path is already loaded in one of the slots
    AlreadyOpen(FileSlot),
    Load(LoadError),
}

impl OpenError {
    pub fn title(&self) -> &'static str {
        match self {
            OpenError::AlreadyOpen(_) => "Error Opening File",
            OpenError::Load(e) => e.title(),
        }
    }

    pub fn user_message(&self, filename: &str) -> String {
        match self {
            OpenError::AlreadyOpen(_) => "This file is already open in the program!".to_string(),
            OpenError::Load(e) => e.user_message(filename),
        }
    }
}

impl fmt::Display for OpenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpenError::AlreadyOpen(slot) => write!(f, "already open as {}", slot),
            OpenError::Load(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for OpenError {}

impl From<LoadError> for OpenError {
    fn from(e: LoadError) -> Self {
        OpenError::Load(e)
    }
}

/// What a view should enable for one slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuState {
    pub visible: bool,
    pub close_enabled: bool,
    pub undo_enabled: bool,
    pub redo_enabled: bool,
    pub centering: Centering,
}

/// Two input files edited side by side
#[derive(Debug, Clone)]
pub struct Session {
    player: InputFile,
    ghost: InputFile,
    config: EditorConfig,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl Session {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            player: InputFile::with_config(&config),
            ghost: InputFile::with_config(&config),
            config,
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn file(&self, slot: FileSlot) -> &InputFile {
        match slot {
            FileSlot::Player => &self.player,
            FileSlot::Ghost => &self.ghost,
        }
    }

    pub fn file_mut(&mut self, slot: FileSlot) -> &mut InputFile {
        match slot {
            FileSlot::Player => &mut self.player,
            FileSlot::Ghost => &mut self.ghost,
        }
    }

    /// Slot holding `path`, if any
    pub fn slot_of(&self, path: &Path) -> Option<FileSlot> {
        [FileSlot::Player, FileSlot::Ghost]
            .into_iter()
            .find(|&slot| self.file(slot).is_loaded_from(path))
    }

    pub fn is_path_loaded(&self, path: &Path) -> bool {
        self.slot_of(path).is_some()
    }

    pub fn loaded_count(&self) -> usize {
        usize::from(self.player.is_loaded()) + usize::from(self.ghost.is_loaded())
    }

    /// Load `path` into `slot`, replacing its current file on success
    ///
    /// Fails without touching either slot if `path` is open in the other
    /// slot, or if the file does not load. Opening the path a slot already
    /// holds reloads it from disk.
    pub fn open(&mut self, slot: FileSlot, path: &Path) -> Result<(), OpenError> {
        if let Some(existing) = self.slot_of(path).filter(|&s| s != slot) {
            tracing::warn!(
                "Refusing to open {}: already open as {}",
                path.display(),
                existing
            );
            return Err(OpenError::AlreadyOpen(existing));
        }

        // InputFile::load only replaces state once the whole file validated
        self.file_mut(slot).load(path)?;
        tracing::info!("Opened {} as {}", path.display(), slot);
        Ok(())
    }

    pub fn close(&mut self, slot: FileSlot) {
        self.file_mut(slot).close();
    }

    /// Swapping needs both files loaded
    pub fn can_swap(&self) -> bool {
        self.loaded_count() == 2
    }

    /// Exchange the player and ghost files, history included
    pub fn swap(&mut self) -> bool {
        if !self.can_swap() {
            return false;
        }
        std::mem::swap(&mut self.player, &mut self.ghost);
        tracing::debug!("Swapped player and ghost");
        true
    }

    pub fn menu_state(&self, slot: FileSlot) -> MenuState {
        let file = self.file(slot);
        MenuState {
            visible: file.is_loaded(),
            close_enabled: file.is_loaded(),
            undo_enabled: file.can_undo(),
            redo_enabled: file.can_redo(),
            centering: file.centering(),
        }
    }
}
