//! Error types for table normalization and serialization.

use thiserror::Error;

/// Fatal errors raised while turning raw tables into a dataset.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A table had no rows, so there is no header row to promote.
    #[error("table on page {page} has no rows")]
    EmptyTable {
        /// 1-based page number the table was detected on.
        page: usize,
    },

    /// The dataset could not be serialized.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}
