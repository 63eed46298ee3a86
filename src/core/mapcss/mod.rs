//! Textual MapCSS primitives.
//!
//! Nothing here tokenizes stylesheets. Properties are located as
//! `name: value;` spans inside free-form text and imports as
//! `@import("path");` lines.

mod import;
mod property;
mod value;

use serde::{Deserialize, Serialize};

pub use import::parse_import;
pub use property::{find_property, PropertyOccurrence};
pub use value::{format_number, scale_value, ScaledValue};

/// How strictly a property name must stand apart from its neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundaryMode {
    /// Neither the preceding nor the following character may be
    /// alphanumeric or `-`.
    #[default]
    Word,
    /// Only the preceding character is checked, so `width` also matches the
    /// head of `widths`.
    Left,
}

impl BoundaryMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            BoundaryMode::Word => "word",
            BoundaryMode::Left => "left",
        }
    }
}

impl std::str::FromStr for BoundaryMode {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> crate::error::Result<Self> {
        match s {
            "word" => Ok(BoundaryMode::Word),
            "left" => Ok(BoundaryMode::Left),
            _ => Err(crate::error::Error::validation_invalid_argument(
                "boundary",
                format!("Unknown boundary mode '{}'. Use: word, left", s),
                Some(s.to_string()),
            )),
        }
    }
}

/// Characters that glue a property name to its neighbour.
fn is_name_char(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'-'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_mode_parses_known_names() {
        assert_eq!("word".parse::<BoundaryMode>().unwrap(), BoundaryMode::Word);
        assert_eq!("left".parse::<BoundaryMode>().unwrap(), BoundaryMode::Left);
        let err = "right".parse::<BoundaryMode>().unwrap_err();
        assert_eq!(err.code.as_str(), "validation.invalid_argument");
    }

    #[test]
    fn name_chars_include_hyphen() {
        assert!(is_name_char(b'-'));
        assert!(is_name_char(b'7'));
        assert!(!is_name_char(b' '));
        assert!(!is_name_char(b'{'));
        assert!(!is_name_char(b'_'));
    }
}
