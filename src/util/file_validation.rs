//! File validation utilities for opening input files
//!
//! Validates files before attempting to load them, checking for:
//! - File existence and permissions
//! - File size limits
//! - Binary file detection
//! - Write access, since every loaded file may be saved back in place

use std::fs::{self, File, OpenOptions};
use std::io::Read;
use std::path::Path;

/// Default maximum file size in bytes (50 MB)
pub const MAX_FILE_SIZE: u64 = 50 * 1024 * 1024;

/// Errors that can occur when validating a file for opening
#[derive(Debug, Clone, PartialEq)]
pub enum FileOpenError {
    /// File does not exist
    NotFound,
    /// Permission denied to read file
    PermissionDenied,
    /// Path is a directory, not a file
    IsDirectory,
    /// File appears to be binary (contains null bytes)
    BinaryFile,
    /// File exceeds size limit
    TooLarge { size_mb: f64, max_mb: u64 },
    /// Other I/O error
    IoError(String),
}

impl FileOpenError {
    /// Get a user-friendly error message
    pub fn user_message(&self, filename: &str) -> String {
        match self {
            Self::NotFound => format!("File not found: {}", filename),
            Self::PermissionDenied => format!("Permission denied: {}", filename),
            Self::IsDirectory => format!("Cannot open directory: {}", filename),
            Self::BinaryFile => format!("Cannot open binary file: {}", filename),
            Self::TooLarge { size_mb, max_mb } => {
                format!(
                    "{} is too large ({:.1} MB, max {} MB)",
                    filename, size_mb, max_mb
                )
            }
            Self::IoError(msg) => format!("Error opening {}: {}", filename, msg),
        }
    }

    fn from_io(e: &std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::NotFound => FileOpenError::NotFound,
            std::io::ErrorKind::PermissionDenied => FileOpenError::PermissionDenied,
            _ => FileOpenError::IoError(e.to_string()),
        }
    }
}

impl std::fmt::Display for FileOpenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(f, "file not found"),
            Self::PermissionDenied => write!(f, "permission denied"),
            Self::IsDirectory => write!(f, "is a directory"),
            Self::BinaryFile => write!(f, "binary file"),
            Self::TooLarge { size_mb, .. } => write!(f, "file too large ({:.1} MB)", size_mb),
            Self::IoError(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for FileOpenError {}

impl From<std::io::Error> for FileOpenError {
    fn from(e: std::io::Error) -> Self {
        Self::from_io(&e)
    }
}

/// Validate a file before attempting to open it
///
/// Checks:
/// - File exists
/// - Is not a directory
/// - Does not exceed `max_size` bytes
///
/// Does NOT check for binary content (use `is_likely_binary` separately after this passes)
pub fn validate_file_for_opening(path: &Path, max_size: u64) -> Result<(), FileOpenError> {
    let metadata = fs::metadata(path).map_err(|e| FileOpenError::from_io(&e))?;

    if metadata.is_dir() {
        return Err(FileOpenError::IsDirectory);
    }

    if metadata.len() > max_size {
        return Err(FileOpenError::TooLarge {
            size_mb: metadata.len() as f64 / (1024.0 * 1024.0),
            max_mb: max_size / (1024 * 1024),
        });
    }

    Ok(())
}

/// Check that a file can be opened for writing without truncating it
pub fn check_writable(path: &Path) -> std::io::Result<()> {
    if fs::metadata(path)?.permissions().readonly() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "file is read-only",
        ));
    }
    OpenOptions::new().append(true).open(path).map(|_| ())
}

/// Check if a file is likely binary by scanning for null bytes
///
/// Reads the first 8KB of the file and checks for null bytes,
/// which are common in binary files but rare in text files.
///
/// Returns `true` if the file appears to be binary, `false` if it appears to be text.
/// Returns `false` on any read error (let the actual open fail with a better error).
pub fn is_likely_binary(path: &Path) -> bool {
    let Ok(mut file) = File::open(path) else {
        return false;
    };

    let mut buffer = [0u8; 8192];
    let Ok(bytes_read) = file.read(&mut buffer) else {
        return false;
    };

    buffer[..bytes_read].contains(&0)
}

/// Get the filename from a path for display in error messages
pub fn filename_for_display(path: &Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_validate_nonexistent_file() {
        let result =
            validate_file_for_opening(Path::new("/nonexistent/path/file.csv"), MAX_FILE_SIZE);
        assert!(matches!(result, Err(FileOpenError::NotFound)));
    }

    #[test]
    fn test_validate_directory() {
        let dir = tempfile::tempdir().unwrap();
        let result = validate_file_for_opening(dir.path(), MAX_FILE_SIZE);
        assert!(matches!(result, Err(FileOpenError::IsDirectory)));
    }

    #[test]
    fn test_validate_valid_file() {
        let temp = NamedTempFile::new().unwrap();
        let result = validate_file_for_opening(temp.path(), MAX_FILE_SIZE);
        assert!(result.is_ok());
    }

    #[test]
    fn test_validate_too_large() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"0,0,0,0,7,7,0\n").unwrap();
        temp.flush().unwrap();

        let result = validate_file_for_opening(temp.path(), 4);
        assert!(matches!(result, Err(FileOpenError::TooLarge { .. })));
    }

    #[test]
    fn test_check_writable() {
        let temp = NamedTempFile::new().unwrap();
        assert!(check_writable(temp.path()).is_ok());
        assert!(check_writable(Path::new("/nonexistent/path/file.csv")).is_err());
    }

    #[test]
    fn test_check_writable_readonly_file() {
        let temp = NamedTempFile::new().unwrap();
        let mut perms = fs::metadata(temp.path()).unwrap().permissions();
        perms.set_readonly(true);
        fs::set_permissions(temp.path(), perms).unwrap();

        assert!(check_writable(temp.path()).is_err());
    }

    #[test]
    fn test_is_binary_text_file() {
        let mut temp = NamedTempFile::new().unwrap();
        writeln!(temp, "0,0,0,0,7,7,0").unwrap();
        writeln!(temp, "1,1,0,0,7,7,0").unwrap();
        temp.flush().unwrap();

        assert!(!is_likely_binary(temp.path()));
    }

    #[test]
    fn test_is_binary_with_null_bytes() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"0,0\x00,0").unwrap();
        temp.flush().unwrap();

        assert!(is_likely_binary(temp.path()));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            FileOpenError::NotFound.user_message("player.csv"),
            "File not found: player.csv"
        );
        assert_eq!(
            FileOpenError::IsDirectory.user_message("inputs"),
            "Cannot open directory: inputs"
        );
        assert_eq!(
            FileOpenError::BinaryFile.user_message("ghost.rkg"),
            "Cannot open binary file: ghost.rkg"
        );
    }

    #[test]
    fn test_filename_for_display() {
        assert_eq!(
            filename_for_display(Path::new("/tmp/inputs/player.csv")),
            "player.csv"
        );
    }
}
