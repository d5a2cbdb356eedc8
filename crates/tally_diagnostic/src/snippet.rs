//! Source snippet rendering: the line containing an offset, plus a caret
//! line pointing at the offending column.
//!
//! Offsets are 0-based byte positions. An offset equal to the source
//! length is valid and points one past the last character (used by
//! "expected a digit here" style diagnostics at end of input).

/// Byte range (start, end) of the line containing `pos`, excluding the
/// line terminator. `pos` is clamped to the source length.
pub fn line_span(source: &str, pos: u32) -> (usize, usize) {
    let pos = (pos as usize).min(source.len());
    let start = source[..pos].rfind('\n').map_or(0, |i| i + 1);
    let end = source[pos..].find('\n').map_or(source.len(), |i| pos + i);
    (start, end)
}

/// 0-based column of `pos` within its line.
pub fn column(source: &str, pos: u32) -> usize {
    let (start, _) = line_span(source, pos);
    (pos as usize).min(source.len()) - start
}

/// Two-line snippet: the source line containing `pos`, then spaces and a
/// single `^` under the offending column.
pub fn underline(source: &str, pos: u32) -> String {
    let (start, end) = line_span(source, pos);
    let line = &source[start..end];
    let col = (pos as usize).min(source.len()) - start;
    format!("{line}\n{}^", " ".repeat(col))
}
