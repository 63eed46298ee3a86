//! File I/O primitives with consistent error handling.

use crate::error::{Error, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Read file contents with standardized error handling.
///
/// Wraps `fs::read_to_string` with consistent `Error::internal_io` formatting.
pub fn read_file(path: &Path, operation: &str) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|e| Error::internal_io(e.to_string(), Some(operation.to_string())))
}

/// Read a stylesheet document as a sequence of lines.
///
/// Lines are split on `\n` only, so a `\r` before the terminator stays part of
/// the line. A final terminator does not produce a trailing empty line.
/// A missing file maps to `Error::document_not_found`.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::document_not_found(path.to_string_lossy(), None),
        _ => Error::internal_io(
            e.to_string(),
            Some(format!("read {}", path.display())),
        ),
    })?;

    Ok(split_lines(&content))
}

/// Split text into lines the way line-oriented stream reading does.
pub fn split_lines(content: &str) -> Vec<String> {
    content.split_terminator('\n').map(str::to_string).collect()
}

/// Write content to file atomically (write to .tmp, then rename).
///
/// Readers always see either the old content or the new content, never a
/// partially written stylesheet.
pub fn write_file_atomic(path: &Path, content: &str, operation: &str) -> Result<()> {
    let filename = path.file_name().ok_or_else(|| {
        Error::internal_io(
            format!("Invalid path: {}", path.display()),
            Some(operation.to_string()),
        )
    })?;

    let tmp_path = path.with_file_name(format!("{}.tmp", filename.to_string_lossy()));

    fs::write(&tmp_path, content).map_err(|e| {
        Error::internal_io(e.to_string(), Some(format!("{} (write temp)", operation)))
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        Error::internal_io(e.to_string(), Some(format!("{} (rename)", operation)))
    })?;

    Ok(())
}
