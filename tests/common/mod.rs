//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use ttk_edit::input::InputFile;

/// Every button released, sticks at 7; a file of these has unknown centering
pub const NEUTRAL: &str = "0,0,0,7,7,0";

/// Stick pushed fully right; only 7-centering accepts it
pub const FULL_RIGHT: &str = "0,0,0,14,7,0";

/// `count` frames of `fields` (everything after the frame column)
pub fn frames(count: usize, fields: &str) -> String {
    (0..count).map(|i| format!("{},{}\n", i, fields)).collect()
}

/// Write `content` to a fresh temp file
pub fn input_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(content.as_bytes()).expect("write temp file");
    file.flush().expect("flush temp file");
    file
}

/// Load `path` into a new handle, panicking on failure
pub fn loaded(path: &Path) -> InputFile {
    let mut file = InputFile::new();
    file.load(path).expect("load input file");
    file
}
