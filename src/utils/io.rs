//! File I/O primitives with consistent error handling.
//!
//! Every failure becomes `internal.io_error` with "<operation> <path>" as context.

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

fn io_error(operation: &str, path: &Path) -> impl FnOnce(std::io::Error) -> Error {
    let context = format!("{} {}", operation, path.display());
    move |e| Error::internal_io(e.to_string(), Some(context))
}

pub fn read_file(path: &Path, operation: &str) -> Result<String> {
    fs::read_to_string(path).map_err(io_error(operation, path))
}

/// Read a text file, replacing bytes that are not valid UTF-8.
pub fn read_file_lossy(path: &Path, operation: &str) -> Result<String> {
    let bytes = fs::read(path).map_err(io_error(operation, path))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

pub fn write_file(path: &Path, content: &str, operation: &str) -> Result<()> {
    fs::write(path, content).map_err(io_error(operation, path))
}

/// Create a directory and its parents. Succeeds if it already exists.
pub fn ensure_dir(path: &Path, operation: &str) -> Result<()> {
    fs::create_dir_all(path).map_err(io_error(operation, path))
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
        let result = read_file(Path::new("/nonexistent/path.md"), "read section");
        let err = result.unwrap_err();
        assert_eq!(err.code.as_str(), "internal.io_error");
        assert!(err.message.contains("/nonexistent/path.md"));
    }

    #[test]
    fn write_file_returns_error_for_invalid_path() {
        let result = write_file(
            Path::new("/nonexistent/dir/file.md"),
            "content",
            "write section",
        );
        assert_eq!(result.unwrap_err().code.as_str(), "internal.io_error");
    }

    #[test]
    fn ensure_dir_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");

        ensure_dir(&nested, "create directory").unwrap();
        ensure_dir(&nested, "create directory").unwrap();
        assert!(nested.is_dir());
    }
}
