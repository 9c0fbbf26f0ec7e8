//! Header promotion: raw cell grids to named-column tables.

use crate::cell::CellValue;
use crate::clean::clean_header;
use crate::error::CoreError;
use crate::header::dedupe_headers;

/// A detected table as handed over by an extraction backend.
///
/// The first row is the header candidate, the remaining rows are data.
/// Rows are padded with [`CellValue::Empty`] to the widest row, so the grid
/// is always rectangular.
#[derive(Debug, Clone, PartialEq)]
pub struct RawTable {
    page: usize,
    rows: Vec<Vec<CellValue>>,
}

impl RawTable {
    /// Create a table found on `page` (1-based) from its rows.
    pub fn new(page: usize, mut rows: Vec<Vec<CellValue>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        for row in &mut rows {
            row.resize(width, CellValue::Empty);
        }
        Self { page, rows }
    }

    /// Create a table from rows of optional text, the shape most backends
    /// produce (`None` for a cell with no text).
    pub fn from_text_rows(page: usize, rows: Vec<Vec<Option<String>>>) -> Self {
        let rows = rows
            .into_iter()
            .map(|row| row.into_iter().map(CellValue::from).collect())
            .collect();
        Self::new(page, rows)
    }

    /// 1-based page number the table was found on.
    pub fn page(&self) -> usize {
        self.page
    }

    /// All rows, header candidate included.
    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    /// Number of columns (width of the widest row).
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Returns true if the table has no rows at all.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A table whose header row has been promoted to unique column names.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedTable {
    page: usize,
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl NormalizedTable {
    /// 1-based page number of the source table.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Deduplicated column names in source order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Data rows; each row has exactly one value per column.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub(crate) fn into_parts(self) -> (Vec<String>, Vec<Vec<String>>) {
        (self.columns, self.rows)
    }
}

/// Promote row 0 of `table` to column names and coerce the rest to text.
///
/// Header cells are coerced to text, newlines are replaced with spaces and
/// the ends trimmed before deduplication. Body cells are coerced with
/// [`CellValue::to_text`] and otherwise left untouched.
///
/// # Errors
///
/// Returns [`CoreError::EmptyTable`] if the table has no rows.
pub fn normalize_table(table: &RawTable) -> Result<NormalizedTable, CoreError> {
    let (header, body) = table
        .rows
        .split_first()
        .ok_or(CoreError::EmptyTable { page: table.page })?;

    let header_names: Vec<String> = header
        .iter()
        .map(|cell| clean_header(&cell.to_text()))
        .collect();
    let columns = dedupe_headers(&header_names);

    let rows = body
        .iter()
        .map(|row| row.iter().map(CellValue::to_text).collect())
        .collect();

    Ok(NormalizedTable {
        page: table.page,
        columns,
        rows,
    })
}
