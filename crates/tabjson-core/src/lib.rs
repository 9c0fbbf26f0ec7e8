//! tabjson-core: Backend-independent table normalization.
//!
//! Turns the raw cell grids handed over by a table extraction backend into one
//! flat dataset of text records:
//!
//! - [`header`]: deduplicates repeated column names (`A`, `A_1`, `A_2`, ...)
//! - [`cell`]: explicit text coercion for every cell value
//! - [`normalize`]: promotes the first row of a grid to column names
//! - [`dataset`]: concatenates tables by column name and serializes to JSON
//! - [`clean`]: whitespace cleanup for text cells
//! - [`source`]: the [`TableSource`] seam implemented by extraction backends

pub mod cell;
pub mod clean;
pub mod dataset;
pub mod error;
pub mod header;
pub mod normalize;
pub mod source;

pub use cell::CellValue;
pub use clean::clean_text;
pub use dataset::{Dataset, MissingValue};
pub use error::CoreError;
pub use header::dedupe_headers;
pub use normalize::{NormalizedTable, RawTable, normalize_table};
pub use source::{SourceError, TableSource};
