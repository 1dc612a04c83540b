//! File I/O primitives with consistent error handling.

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Read file contents with standardized error handling.
///
/// Wraps `fs::read_to_string` with consistent `Error::internal_io` formatting.
pub fn read_file(path: &Path, operation: &str) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|e| Error::internal_io(e.to_string(), Some(operation.to_string())))
}

/// Read a candidate source file as UTF-8.
///
/// Permission errors, invalid UTF-8 and files that vanished after discovery
/// all surface as `rewrite.read_failed`.
pub fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|e| Error::file_read_failed(path.display().to_string(), e.to_string()))
}

/// Overwrite a source file in place.
///
/// Plain truncate-and-write so the file keeps its inode and permissions.
pub fn write_source(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)
        .map_err(|e| Error::file_write_failed(path.display().to_string(), e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn read_file_succeeds_for_existing_file() {
        let mut temp = NamedTempFile::new().unwrap();
        writeln!(temp, "test content").unwrap();

        let content = read_file(temp.path(), "test read").unwrap();
        assert!(content.contains("test content"));
    }

    #[test]
    fn read_file_returns_error_for_missing_file() {
        let result = read_file(Path::new("/nonexistent/path.json"), "test read");
        let err = result.unwrap_err();
        assert_eq!(err.code.as_str(), "internal.io_error");
    }

    #[test]
    fn read_source_rejects_invalid_utf8() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(&[0x66, 0x6f, 0xff, 0xfe]).unwrap();

        let err = read_source(temp.path()).unwrap_err();
        assert_eq!(err.code.as_str(), "rewrite.read_failed");
        assert_eq!(err.details["path"], temp.path().display().to_string());
    }

    #[test]
    fn write_source_overwrites_content() {
        let mut temp = NamedTempFile::new().unwrap();
        write!(temp, "a much longer original body").unwrap();

        write_source(temp.path(), "short").unwrap();
        assert_eq!(fs::read_to_string(temp.path()).unwrap(), "short");
    }

    #[test]
    fn write_source_returns_error_for_invalid_path() {
        let err = write_source(Path::new("/nonexistent/dir/file.css"), "x").unwrap_err();
        assert_eq!(err.code.as_str(), "rewrite.write_failed");
    }
}
