//! Rescale a whole stylesheet project.
//!
//! Documents are rewritten as the traversal produces them; touched ones are
//! staged and written together once the entire import graph has been
//! processed.

use serde::Serialize;

use crate::coefficients::CoefficientTable;
use crate::config::ScaleOptions;
use crate::error::Result;
use crate::mapcss::BoundaryMode;
use crate::pending::PendingWrites;
use crate::project;
use crate::rewrite;

/// Per-document outcome, in traversal order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentReport {
    pub path: String,
    pub replacements: usize,
    pub touched: bool,
}

/// A value that was kept as written, with the document it lives in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaleWarning {
    pub file: String,
    pub property: String,
    pub value: String,
    pub reason: String,
}

/// An import that was not followed because its target was already scheduled.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedImportReport {
    pub path: String,
    pub imported_from: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScaleReport {
    pub root: String,
    pub coefficients: CoefficientTable,
    pub boundary: BoundaryMode,
    pub dry_run: bool,
    /// Whether touched documents were written to disk.
    pub applied: bool,
    pub documents: Vec<DocumentReport>,
    /// Touched documents, in traversal order.
    pub affected: Vec<String>,
    pub warnings: Vec<ScaleWarning>,
    pub skipped_imports: Vec<SkippedImportReport>,
}

impl ScaleReport {
    pub fn total_replacements(&self) -> usize {
        self.documents.iter().map(|d| d.replacements).sum()
    }
}

/// Rewrite every document reachable from `root` and save the ones that changed.
pub fn run(root: &str, options: &ScaleOptions) -> Result<ScaleReport> {
    for (name, ratio) in options.table.iter() {
        log_status!("scale", "Correction: {} x {}", name, ratio);
    }

    let mut pending = PendingWrites::new();
    let mut documents = Vec::new();
    let mut warnings = Vec::new();

    let traversal = project::traverse(root, |path, content| {
        let result = rewrite::rewrite(&content, &options.table, options.boundary);

        warnings.extend(result.warnings.iter().map(|w| ScaleWarning {
            file: path.to_string(),
            property: w.property.clone(),
            value: w.value.clone(),
            reason: w.reason.clone(),
        }));

        let touched = result.touched();
        documents.push(DocumentReport {
            path: path.to_string(),
            replacements: result.replacements,
            touched,
        });

        if touched {
            log_status!("scale", "{}: {} replacement(s)", path, result.replacements);
            pending.stage(path, result.content);
        }
        Ok(())
    })?;

    let affected: Vec<String> = pending.paths().map(str::to_string).collect();

    let applied = if pending.is_empty() {
        log_status!("scale", "No document needs rewriting");
        !options.dry_run
    } else if options.dry_run {
        log_status!("scale", "Dry run: {} document(s) not written", pending.len());
        false
    } else {
        pending.flush()?;
        true
    };

    let report = ScaleReport {
        root: root.to_string(),
        coefficients: options.table.clone(),
        boundary: options.boundary,
        dry_run: options.dry_run,
        applied,
        documents,
        affected,
        warnings,
        skipped_imports: traversal
            .skipped
            .into_iter()
            .map(|s| SkippedImportReport {
                path: s.path,
                imported_from: s.imported_from,
            })
            .collect(),
    };

    log_status!(
        "scale",
        "Done: {} replacement(s) in {} document(s)",
        report.total_replacements(),
        report.affected.len()
    );

    Ok(report)
}
