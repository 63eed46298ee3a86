use super::{is_name_char, BoundaryMode};

/// One `name: value;` span located in a block of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyOccurrence<'a> {
    /// Byte offset of the property name.
    pub start: usize,
    /// Byte length from the name through the terminating `;` inclusive.
    pub len: usize,
    /// Raw text between `:` and `;`, untrimmed.
    pub value: &'a str,
}

impl PropertyOccurrence<'_> {
    /// Byte offset just past the terminating `;`.
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

/// Find the next bounded occurrence of `name` at or after byte offset `from`.
///
/// A candidate is rejected when the character before it is alphanumeric or
/// `-` (and, in `BoundaryMode::Word`, when the character after it is). An
/// accepted candidate must be followed by a `:` and then a `;` on the same
/// line; otherwise the search continues past it.
pub fn find_property<'a>(
    text: &'a str,
    from: usize,
    name: &str,
    boundary: BoundaryMode,
) -> Option<PropertyOccurrence<'a>> {
    if name.is_empty() || from > text.len() {
        return None;
    }

    let bytes = text.as_bytes();
    let mut pos = from;

    loop {
        let found = pos + text.get(pos..)?.find(name)?;
        let name_end = found + name.len();

        let left_ok = found == 0 || !is_name_char(bytes[found - 1]);
        let right_ok = match boundary {
            BoundaryMode::Left => true,
            BoundaryMode::Word => name_end == bytes.len() || !is_name_char(bytes[name_end]),
        };

        if left_ok && right_ok {
            if let Some(occurrence) = declaration_at(text, found, name_end) {
                return Some(occurrence);
            }
        }

        pos = name_end;
    }
}

/// The `name: value;` span starting at `start`, if its `:` and `;` follow
/// the name before the end of the line.
fn declaration_at(text: &str, start: usize, name_end: usize) -> Option<PropertyOccurrence<'_>> {
    let rest = &text[name_end..];
    let line = &rest[..rest.find('\n').unwrap_or(rest.len())];

    let colon = line.find(':')?;
    let semicolon = colon + 1 + line[colon + 1..].find(';')?;

    Some(PropertyOccurrence {
        start,
        len: name_end + semicolon - start + 1,
        value: &text[name_end + colon + 1..name_end + semicolon],
    })
}
