//! Property rewriting for one document's text.
//!
//! For each active coefficient the text is scanned front to back. Every
//! located `name: value;` span whose value scales is replaced with
//! `name: <scaled>;`, and scanning resumes right after the written text so a
//! replacement is never scanned again for the same property.

use serde::Serialize;

use crate::coefficients::CoefficientTable;
use crate::mapcss::{find_property, scale_value, BoundaryMode, ScaledValue};

/// A value that was left as written because it is not a plain number.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValueWarning {
    pub property: String,
    pub value: String,
    pub reason: String,
}

/// Result of rewriting one document.
#[derive(Debug, Clone, PartialEq)]
pub struct Rewrite {
    pub content: String,
    /// Number of spans whose text changed.
    pub replacements: usize,
    pub warnings: Vec<ValueWarning>,
}

impl Rewrite {
    /// True when at least one span changed, i.e. the document must be saved.
    pub fn touched(&self) -> bool {
        self.replacements > 0
    }
}

/// Rewrite every active property of `table` inside `text`.
pub fn rewrite(text: &str, table: &CoefficientTable, boundary: BoundaryMode) -> Rewrite {
    let mut content = text.to_string();
    let mut replacements = 0;
    let mut warnings = Vec::new();

    for (name, ratio) in table.active() {
        let mut cursor = 0;

        while let Some(occurrence) = find_property(&content, cursor, name, boundary) {
            let start = occurrence.start;
            let end = occurrence.end();

            match scale_value(occurrence.value, ratio) {
                ScaledValue::Scaled(value) => {
                    let replacement = format!("{}: {};", name, value);
                    cursor = start + replacement.len();
                    if content[start..end] != replacement {
                        content.replace_range(start..end, &replacement);
                        replacements += 1;
                    }
                }
                ScaledValue::Formula(_) => {
                    cursor = end;
                }
                ScaledValue::Unparsed { original, reason } => {
                    log_status!(
                        "value",
                        "Keeping {}:{} unchanged ({})",
                        name,
                        original,
                        reason
                    );
                    warnings.push(ValueWarning {
                        property: name.to_string(),
                        value: original.trim().to_string(),
                        reason,
                    });
                    cursor = end;
                }
            }
        }
    }

    Rewrite {
        content,
        replacements,
        warnings,
    }
}
