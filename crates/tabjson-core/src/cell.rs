//! Cell values and their coercion to text.
//!
//! Backends may hand over typed cells (a spreadsheet-like source could report
//! numbers or booleans), but every value in the output is a string. All of
//! that goes through [`CellValue::to_text`] so the rules live in one place.

use std::fmt;

/// A single cell of a raw table grid.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    /// Text content, passed through unchanged.
    Text(String),
    /// Integer content.
    Integer(i64),
    /// Floating-point content.
    Float(f64),
    /// Boolean content.
    Bool(bool),
    /// A cell with no content.
    #[default]
    Empty,
}

impl CellValue {
    /// Coerce this cell to its text form.
    ///
    /// - `Text` is returned as-is.
    /// - `Integer` uses plain decimal digits (`42` -> `"42"`).
    /// - `Float` uses the shortest round-trip form and keeps a fractional
    ///   part on integral values (`3.0` -> `"3.0"`); NaN is `"NaN"` and
    ///   infinities are `"inf"` / `"-inf"`.
    /// - `Bool` is `"true"` or `"false"`.
    /// - `Empty` is the empty string.
    pub fn to_text(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Integer(i) => i.to_string(),
            CellValue::Float(f) => format!("{f:?}"),
            CellValue::Bool(b) => b.to_string(),
            CellValue::Empty => String::new(),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl From<Option<String>> for CellValue {
    fn from(value: Option<String>) -> Self {
        value.map_or(CellValue::Empty, CellValue::Text)
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Integer(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Float(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}
