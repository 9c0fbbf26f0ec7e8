//! Concatenation of normalized tables and JSON record output.

use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::clean::clean_text;
use crate::error::CoreError;
use crate::normalize::NormalizedTable;

/// How cells for columns a row's source table did not have are rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MissingValue {
    /// Render absent cells as this string (default: empty string).
    Text(String),
    /// Render absent cells as JSON `null`.
    Null,
}

impl Default for MissingValue {
    fn default() -> Self {
        MissingValue::Text(String::new())
    }
}

/// All normalized tables stacked into one row-oriented table.
///
/// Columns are the union of every table's columns in first-appearance order.
/// Rows keep source table order, then source row order. A cell is `None`
/// when the row's table had no such column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
}

impl Dataset {
    /// Stack `tables` by column name.
    pub fn concat<I>(tables: I) -> Self
    where
        I: IntoIterator<Item = NormalizedTable>,
    {
        let mut columns: Vec<String> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut rows: Vec<Vec<Option<String>>> = Vec::new();

        for table in tables {
            let (table_columns, table_rows) = table.into_parts();

            let positions: Vec<usize> = table_columns
                .into_iter()
                .map(|name| {
                    *index.entry(name.clone()).or_insert_with(|| {
                        columns.push(name);
                        columns.len() - 1
                    })
                })
                .collect();

            for row in table_rows {
                let mut out = vec![None; columns.len()];
                for (pos, value) in positions.iter().zip(row) {
                    out[*pos] = Some(value);
                }
                rows.push(out);
            }
        }

        // Rows from earlier tables predate columns added later.
        let width = columns.len();
        for row in &mut rows {
            row.resize(width, None);
        }

        Self { columns, rows }
    }

    /// Column names in first-appearance order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Rows, one `Option<String>` per column.
    pub fn rows(&self) -> &[Vec<Option<String>>] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Apply [`clean_text`] to every present cell.
    pub fn clean(&mut self) {
        for value in self.rows.iter_mut().flatten().flatten() {
            *value = clean_text(value);
        }
    }

    /// A serializable view of the dataset as an array of records.
    pub fn records<'a>(&'a self, missing: &'a MissingValue) -> Records<'a> {
        Records {
            dataset: self,
            missing,
        }
    }

    /// Serialize to a compact JSON array of objects.
    ///
    /// Keys follow column order and every present value is a JSON string.
    /// Non-ASCII text is written as-is.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Json`] if serialization fails.
    pub fn to_json(&self, missing: &MissingValue) -> Result<String, CoreError> {
        Ok(serde_json::to_string(&self.records(missing))?)
    }
}

/// Serializes a [`Dataset`] as a sequence of column-name-to-value maps.
pub struct Records<'a> {
    dataset: &'a Dataset,
    missing: &'a MissingValue,
}

struct Record<'a> {
    columns: &'a [String],
    values: &'a [Option<String>],
    missing: &'a MissingValue,
}

impl Serialize for Records<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.dataset.rows.len()))?;
        for values in &self.dataset.rows {
            seq.serialize_element(&Record {
                columns: &self.dataset.columns,
                values,
                missing: self.missing,
            })?;
        }
        seq.end()
    }
}

impl Serialize for Record<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (column, value) in self.columns.iter().zip(self.values) {
            match (value, self.missing) {
                (Some(text), _) => map.serialize_entry(column, text)?,
                (None, MissingValue::Text(sentinel)) => map.serialize_entry(column, sentinel)?,
                (None, MissingValue::Null) => map.serialize_entry(column, &None::<&str>)?,
            }
        }
        map.end()
    }
}
