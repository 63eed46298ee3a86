use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::coefficients::CoefficientTable;
use crate::error::{Error, Result};
use crate::mapcss::BoundaryMode;
use crate::utils::io;

/// Optional JSON file with coefficient defaults for a stylesheet project.
///
/// ```json
/// { "coefficients": { "width": 1.5, "font-size": 1.2 }, "boundary": "word" }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ScaleConfig {
    #[serde(default)]
    pub coefficients: BTreeMap<String, f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boundary: Option<BoundaryMode>,
}

/// Everything a run needs, built once up front.
#[derive(Debug, Clone)]
pub struct ScaleOptions {
    pub table: CoefficientTable,
    pub boundary: BoundaryMode,
    /// Compute the rewrite but keep every document on disk unchanged.
    pub dry_run: bool,
}

impl Default for ScaleOptions {
    fn default() -> Self {
        Self {
            table: CoefficientTable::defaults(),
            boundary: BoundaryMode::default(),
            dry_run: false,
        }
    }
}

impl ScaleOptions {
    pub fn new(table: CoefficientTable) -> Self {
        Self {
            table,
            ..Self::default()
        }
    }

    /// Fold a config file into these options. File entries override the
    /// built-in defaults.
    pub fn merge_config(&mut self, config: &ScaleConfig) -> Result<()> {
        for (name, ratio) in &config.coefficients {
            self.table.set(name.clone(), *ratio).map_err(|e| {
                Error::config_invalid_value(
                    format!("coefficients.{}", name),
                    Some(ratio.to_string()),
                    e.details["problem"]
                        .as_str()
                        .unwrap_or("invalid ratio")
                        .to_string(),
                )
            })?;
        }
        if let Some(boundary) = config.boundary {
            self.boundary = boundary;
        }
        Ok(())
    }
}

/// Load a `ScaleConfig` from a JSON file.
pub fn load_config(path: &Path) -> Result<ScaleConfig> {
    let content = io::read_file(path, &format!("read config {}", path.display()))?;
    parse_config(&content, &path.to_string_lossy())
}

fn parse_config(content: &str, path: &str) -> Result<ScaleConfig> {
    serde_json::from_str(content).map_err(|e| Error::config_invalid_json(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn parses_coefficients_and_boundary() {
        let config = parse_config(
            r#"{ "coefficients": { "width": 1.5, "dashes": 2 }, "boundary": "left" }"#,
            "stylescale.json",
        )
        .unwrap();
        assert_eq!(config.coefficients["width"], 1.5);
        assert_eq!(config.coefficients["dashes"], 2.0);
        assert_eq!(config.boundary, Some(BoundaryMode::Left));
    }

    #[test]
    fn empty_object_is_a_valid_config() {
        let config = parse_config("{}", "stylescale.json").unwrap();
        assert!(config.coefficients.is_empty());
        assert!(config.boundary.is_none());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = parse_config(r#"{ "ratios": {} }"#, "stylescale.json").unwrap_err();
        assert_eq!(err.code.as_str(), "config.invalid_json");
        assert_eq!(err.details["path"], "stylescale.json");
    }

    #[test]
    fn merge_overrides_defaults_and_sets_boundary() {
        let mut options = ScaleOptions::default();
        let config = parse_config(
            r#"{ "coefficients": { "font-size": 1.25 }, "boundary": "left" }"#,
            "stylescale.json",
        )
        .unwrap();

        options.merge_config(&config).unwrap();

        assert_eq!(options.table.get("font-size"), Some(1.25));
        assert_eq!(options.table.get("width"), Some(1.0));
        assert_eq!(options.boundary, BoundaryMode::Left);
    }

    #[test]
    fn merge_rejects_non_positive_ratio() {
        let mut options = ScaleOptions::default();
        let config = parse_config(r#"{ "coefficients": { "width": 0 } }"#, "c.json").unwrap();
        let err = options.merge_config(&config).unwrap_err();
        assert_eq!(err.code.as_str(), "config.invalid_value");
        assert_eq!(err.details["key"], "coefficients.width");
    }

    #[test]
    fn load_config_reads_file() {
        let temp = NamedTempFile::new().unwrap();
        std::fs::write(temp.path(), r#"{ "coefficients": { "width": 2 } }"#).unwrap();
        let config = load_config(temp.path()).unwrap();
        assert_eq!(config.coefficients["width"], 2.0);
    }

    #[test]
    fn load_config_missing_file_is_io_error() {
        let err = load_config(Path::new("/nonexistent/stylescale.json")).unwrap_err();
        assert_eq!(err.code.as_str(), "internal.io_error");
    }
}
