//! Import graph traversal for a stylesheet project.
//!
//! Starting from the root document, every `@import` line enqueues the
//! referenced document (resolved against the importing document's folder).
//! Documents are handed to the caller one at a time, breadth-first, each
//! exactly once.

use std::collections::{HashSet, VecDeque};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::mapcss::parse_import;
use crate::utils::{io, path};

/// Line terminator used when assembling document content.
pub const LINE_TERMINATOR: &str = "\n";

/// Summary of a completed traversal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Traversal {
    /// Documents in the order they were handed to the caller.
    pub visited: Vec<String>,
    /// Imports that pointed at an already scheduled document.
    pub skipped: Vec<SkippedImport>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedImport {
    pub path: String,
    pub imported_from: String,
}

/// Walk the project rooted at `root`, calling `on_document(path, content)`
/// once per reachable document after its content has been fully read.
///
/// Content is the document's lines, unmodified, each followed by
/// `LINE_TERMINATOR`. A document that cannot be read aborts the walk; the
/// error names the importing document when there is one.
pub fn traverse<F>(root: &str, mut on_document: F) -> Result<Traversal>
where
    F: FnMut(&str, String) -> Result<()>,
{
    let mut queue: VecDeque<(String, Option<String>)> = VecDeque::new();
    let mut scheduled: HashSet<PathBuf> = HashSet::new();
    let mut traversal = Traversal::default();

    scheduled.insert(path::visit_key(root));
    queue.push_back((root.to_string(), None));

    while let Some((document, imported_from)) = queue.pop_front() {
        let lines = io::read_lines(Path::new(&document)).map_err(|e| match &imported_from {
            Some(parent) => e.with_importer(parent),
            None => e,
        })?;

        let mut content = String::new();
        for line in &lines {
            if let Some(import) = parse_import(line) {
                let resolved = path::resolve_import(&document, import);
                if scheduled.insert(path::visit_key(&resolved)) {
                    log_status!("import", "{} -> {}", document, resolved);
                    queue.push_back((resolved, Some(document.clone())));
                } else {
                    log_status!("import", "Skipping repeated import {}", resolved);
                    traversal.skipped.push(SkippedImport {
                        path: resolved,
                        imported_from: document.clone(),
                    });
                }
            }

            content.push_str(line);
            content.push_str(LINE_TERMINATOR);
        }

        on_document(&document, content)?;
        traversal.visited.push(document);
    }

    Ok(traversal)
}
