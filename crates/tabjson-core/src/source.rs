//! The extraction backend seam.
//!
//! Table detection itself lives outside this crate. A backend only has to turn
//! a PDF on disk into a list of [`RawTable`]s in document order.

use std::path::Path;

use thiserror::Error;

use crate::normalize::RawTable;

/// Failures reported by a [`TableSource`].
#[derive(Debug, Error)]
pub enum SourceError {
    /// The document could not be opened or parsed.
    #[error("failed to open PDF: {0}")]
    Open(String),

    /// A single page could not be interpreted.
    #[error("failed to read page {page}: {message}")]
    Page {
        /// 1-based page number.
        page: usize,
        /// Backend error message.
        message: String,
    },

    /// The requested page selection does not fit the document.
    #[error("invalid page selection: {0}")]
    InvalidPages(String),
}

/// A table extraction backend.
pub trait TableSource {
    /// Detect every table in the PDF at `path`.
    ///
    /// Tables are returned in page order, then in the order the backend
    /// reports them within a page. An empty vector means no tables were
    /// detected; it is not an error at this level.
    fn extract(&self, path: &Path) -> Result<Vec<RawTable>, SourceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_error_message() {
        let err = SourceError::Open("parse error: missing xref".to_string());
        assert_eq!(
            err.to_string(),
            "failed to open PDF: parse error: missing xref"
        );
    }

    #[test]
    fn page_error_message() {
        let err = SourceError::Page {
            page: 3,
            message: "interpreter error: stack underflow".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to read page 3: interpreter error: stack underflow"
        );
    }

    #[test]
    fn invalid_pages_message() {
        let err = SourceError::InvalidPages("page 0 is invalid".to_string());
        assert!(err.to_string().contains("page 0 is invalid"));
    }

    struct FixedSource(Vec<RawTable>);

    impl TableSource for FixedSource {
        fn extract(&self, _path: &Path) -> Result<Vec<RawTable>, SourceError> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn trait_object_usable() {
        let source: Box<dyn TableSource> = Box::new(FixedSource(vec![RawTable::new(
            1,
            vec![vec!["A".into()]],
        )]));
        let tables = source.extract(Path::new("unused.pdf")).unwrap();
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].page(), 1);
    }
}
