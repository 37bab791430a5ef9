use crate::normalize::normalize_whitespace;

/// Marker that introduces a list-item line (after leading whitespace).
const LIST_MARKER: &str = "- ";

/// Classification of a single input line.
///
/// Lines arrive with trailing whitespace already stripped; leading
/// whitespace is significant for heading detection and is preserved in
/// `Plain` payloads for later trimming at paragraph-join time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// `#`-prefixed heading: marker count is the level, text is trimmed.
    Heading { level: usize, text: String },
    /// Empty after trimming.
    Blank,
    /// Trimmed line starting with `"- "`; payload is the trimmed line,
    /// marker included.
    ListItem(String),
    /// Any other non-blank line, trailing-trimmed only.
    Plain(String),
}

/// Classify one trailing-trimmed input line.
pub fn classify_line(line: &str) -> LineKind {
    if let Some((level, text)) = heading_parts(line) {
        return LineKind::Heading {
            level,
            text: text.to_string(),
        };
    }

    let trimmed = line.trim();
    if trimmed.is_empty() {
        return LineKind::Blank;
    }

    if trimmed.starts_with(LIST_MARKER) {
        return LineKind::ListItem(trimmed.to_string());
    }

    LineKind::Plain(line.to_string())
}

/// Split a heading line into (level, trimmed text).
///
/// A heading is one or more `#` at column 0, then whitespace, then text.
/// Lines with leading whitespace or a bare marker are not headings.
pub fn heading_parts(line: &str) -> Option<(usize, &str)> {
    let rest = line.trim_start_matches('#');
    let level = line.len() - rest.len();
    if level == 0 {
        return None;
    }

    if !rest.chars().next()?.is_whitespace() {
        return None;
    }

    let text = rest.trim();
    if text.is_empty() {
        return None;
    }

    Some((level, text))
}

/// Extract the author name from an anchored, case-insensitive `by <name>`
/// line. The captured name is whitespace-normalized.
pub fn byline_author(text: &str) -> Option<String> {
    let prefix = text.get(..2)?;
    if !prefix.eq_ignore_ascii_case("by") {
        return None;
    }

    let rest = &text[2..];
    if !rest.chars().next()?.is_whitespace() {
        return None;
    }

    let name = rest.trim();
    if name.is_empty() {
        return None;
    }

    Some(normalize_whitespace(name))
}
