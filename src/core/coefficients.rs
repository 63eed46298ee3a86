//! Property multipliers.
//!
//! A `CoefficientTable` is built once (defaults, then config file, then
//! command-line overrides) and is read-only while a project is rewritten.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::error::{Error, Result};

/// Property names the tool knows about out of the box.
pub const DEFAULT_PROPERTIES: &[&str] = &[
    "width",
    "dashes",
    "casing-width",
    "casing-dashes",
    "font-size",
    "text-offset",
    "text-halo-radius",
    "shield-font-size",
    "shield-text-halo-radius",
];

/// Outcome of reading one `name=ratio` override.
#[derive(Debug, Clone, PartialEq)]
pub enum Override {
    Set { name: String, ratio: f64 },
    /// The argument has no `=` and carries no override.
    Ignored(String),
}

/// Mapping from property name to multiplier, iterated in name order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CoefficientTable {
    entries: BTreeMap<String, f64>,
}

impl CoefficientTable {
    /// Table with every known property at `1.0`.
    pub fn defaults() -> Self {
        Self {
            entries: DEFAULT_PROPERTIES
                .iter()
                .map(|name| (name.to_string(), 1.0))
                .collect(),
        }
    }

    /// Set a ratio, replacing any previous one for the same name.
    pub fn set(&mut self, name: impl Into<String>, ratio: f64) -> Result<()> {
        let name = name.into();
        validate_name(&name)?;
        validate_ratio(&name, ratio)?;
        self.entries.insert(name, ratio);
        Ok(())
    }

    /// Apply `name=ratio` arguments in order. Arguments without `=` are
    /// skipped and returned so the caller can report them.
    pub fn apply_overrides<S: AsRef<str>>(&mut self, args: &[S]) -> Result<Vec<String>> {
        let mut ignored = Vec::new();
        for arg in args {
            match parse_override(arg.as_ref())? {
                Override::Set { name, ratio } => self.set(name, ratio)?,
                Override::Ignored(arg) => ignored.push(arg),
            }
        }
        Ok(ignored)
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries.get(name).copied()
    }

    /// All entries in iteration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(name, ratio)| (name.as_str(), *ratio))
    }

    /// Entries that actually change values (ratio other than exactly `1.0`).
    pub fn active(&self) -> impl Iterator<Item = (&str, f64)> {
        self.iter().filter(|(_, ratio)| *ratio != 1.0)
    }
}

impl Default for CoefficientTable {
    fn default() -> Self {
        Self::defaults()
    }
}

/// Parse one `name=ratio` command-line argument.
pub fn parse_override(arg: &str) -> Result<Override> {
    let Some((name, ratio)) = arg.split_once('=') else {
        return Ok(Override::Ignored(arg.to_string()));
    };

    let name = name.trim();
    let ratio_text = ratio.trim();
    validate_name(name)?;

    let ratio: f64 = ratio_text.parse().map_err(|_| {
        Error::validation_invalid_argument(
            "coefficient",
            format!("Ratio for '{}' is not a number", name),
            Some(ratio_text.to_string()),
        )
        .with_hint("Use NAME=RATIO, for example width=1.5")
    })?;
    validate_ratio(name, ratio)?;

    Ok(Override::Set {
        name: name.to_string(),
        ratio,
    })
}

fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::validation_invalid_argument(
            "coefficient",
            "Property name is empty",
            None,
        ));
    }
    Ok(())
}

fn validate_ratio(name: &str, ratio: f64) -> Result<()> {
    if !ratio.is_finite() || ratio <= 0.0 {
        return Err(Error::validation_invalid_argument(
            "coefficient",
            format!("Ratio for '{}' must be a positive number", name),
            Some(ratio.to_string()),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_seed_known_properties_at_identity() {
        let table = CoefficientTable::defaults();
        assert_eq!(table.iter().count(), 9);
        assert_eq!(table.get("shield-text-halo-radius"), Some(1.0));
        assert_eq!(table.active().count(), 0);
    }

    #[test]
    fn iteration_is_sorted_by_name() {
        let table = CoefficientTable::defaults();
        let names: Vec<&str> = table.iter().map(|(n, _)| n).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[test]
    fn overrides_trim_and_replace() {
        let mut table = CoefficientTable::defaults();
        let ignored = table
            .apply_overrides(&[" width = 2 ", "font-size=1.5"])
            .unwrap();
        assert!(ignored.is_empty());
        assert_eq!(table.get("width"), Some(2.0));
        assert_eq!(table.get("font-size"), Some(1.5));

        let active: Vec<&str> = table.active().map(|(n, _)| n).collect();
        assert_eq!(active, vec!["font-size", "width"]);
    }

    #[test]
    fn overrides_may_add_unknown_properties() {
        let mut table = CoefficientTable::defaults();
        table.apply_overrides(&["icon-width=2"]).unwrap();
        assert_eq!(table.iter().count(), 10);
        assert_eq!(table.get("icon-width"), Some(2.0));
    }

    #[test]
    fn arguments_without_equals_are_ignored() {
        let mut table = CoefficientTable::defaults();
        let ignored = table.apply_overrides(&["width", "dashes=3"]).unwrap();
        assert_eq!(ignored, vec!["width".to_string()]);
        assert_eq!(table.get("width"), Some(1.0));
        assert_eq!(table.get("dashes"), Some(3.0));
    }

    #[test]
    fn non_numeric_ratio_is_fatal() {
        let err = parse_override("width=wide").unwrap_err();
        assert_eq!(err.code.as_str(), "validation.invalid_argument");
        assert_eq!(err.details["value"], "wide");
    }

    #[test]
    fn non_positive_ratios_are_rejected() {
        assert!(parse_override("width=0").is_err());
        assert!(parse_override("width=-2").is_err());
        assert!(parse_override("width=inf").is_err());
        assert!(parse_override("width=NaN").is_err());
    }

    #[test]
    fn empty_name_is_rejected() {
        assert!(parse_override(" =2").is_err());
        assert!(CoefficientTable::defaults().set("", 2.0).is_err());
    }

    #[test]
    fn value_after_first_equals_is_the_ratio() {
        assert!(parse_override("width=2=3").is_err());
    }
}
