const IMPORT_DIRECTIVE: &str = "@import";

/// Recognize an `@import("path");` line and return the quoted path.
///
/// The directive must be the first non-whitespace token. Anything malformed
/// (missing parentheses, missing quotes, empty argument or path) yields `None`
/// and the line is treated as ordinary content. No escaping is supported.
pub fn parse_import(line: &str) -> Option<&str> {
    let rest = line.trim_start().strip_prefix(IMPORT_DIRECTIVE)?;

    let open = rest.find('(')?;
    let close = open + 1 + rest[open + 1..].find(')')?;

    let inner = rest[open + 1..close].trim();
    if inner.is_empty() {
        return None;
    }

    let first_quote = inner.find('"')?;
    let second_quote = first_quote + 1 + inner[first_quote + 1..].find('"')?;

    let path = inner[first_quote + 1..second_quote].trim();
    if path.is_empty() {
        return None;
    }

    Some(path)
}
