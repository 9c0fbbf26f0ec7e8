//! Whitespace cleanup for text cells.

/// Collapse every run of whitespace (newlines included) to a single space and
/// trim both ends.
///
/// Newlines count as whitespace, as do tabs, carriage returns and other
/// Unicode spaces. Applying it twice gives the same result as applying it once.
pub fn clean_text(s: &str) -> String {
    let mut cleaned = String::with_capacity(s.len());
    for segment in s.split_whitespace() {
        if !cleaned.is_empty() {
            cleaned.push(' ');
        }
        cleaned.push_str(segment);
    }
    cleaned
}

/// Header cleanup: newlines become spaces and the ends are trimmed, inner
/// spacing is left alone.
pub(crate) fn clean_header(s: &str) -> String {
    s.replace('\n', " ").trim().to_string()
}
