use std::path::Path;

use crate::error::Result;
use crate::utils::io;

/// Rewritten documents waiting to be saved.
///
/// Nothing touches the disk until `flush`, so a run that fails while
/// traversing leaves every document as it was.
#[derive(Debug, Default)]
pub struct PendingWrites {
    files: Vec<(String, String)>,
}

impl PendingWrites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `content` for `path`, replacing anything already queued for it.
    pub fn stage(&mut self, path: impl Into<String>, content: String) {
        let path = path.into();
        match self.files.iter_mut().find(|(p, _)| *p == path) {
            Some(entry) => entry.1 = content,
            None => self.files.push((path, content)),
        }
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Staged paths in staging order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(|(path, _)| path.as_str())
    }

    /// Write every staged document verbatim. Stops at the first failure.
    pub fn flush(self) -> Result<Vec<String>> {
        let mut written = Vec::with_capacity(self.files.len());
        for (path, content) in self.files {
            io::write_file_atomic(Path::new(&path), &content, &format!("write {}", path))?;
            log_status!("write", "Updated {}", path);
            written.push(path);
        }
        Ok(written)
    }
}
