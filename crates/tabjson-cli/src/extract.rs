//! pdfplumber-backed table extraction.

use std::path::Path;

use pdfplumber::{ExtractOptions, Pdf, Table, TableSettings};
use tabjson_core::{RawTable, SourceError, TableSource};
use tracing::debug;

use crate::cli::TableStrategy;
use crate::page_range::PageSelection;

/// Finds tables with pdfplumber's table finder.
#[derive(Debug, Clone)]
pub struct PdfplumberSource {
    pages: PageSelection,
    settings: TableSettings,
    password: Option<String>,
}

impl PdfplumberSource {
    pub fn new(pages: PageSelection, strategy: TableStrategy, password: Option<String>) -> Self {
        Self {
            pages,
            settings: TableSettings {
                strategy: strategy.to_backend(),
                ..TableSettings::default()
            },
            password,
        }
    }

    fn open(&self, path: &Path) -> Result<Pdf, SourceError> {
        // Extraction warnings (missing fonts, unknown operators) are noise for
        // this tool, so they are switched off for this document only.
        let options = ExtractOptions {
            collect_warnings: false,
            ..ExtractOptions::default()
        };

        let opened = match &self.password {
            Some(password) => Pdf::open_file_with_password(path, password.as_bytes(), Some(options)),
            None => Pdf::open_file(path, Some(options)),
        };
        opened.map_err(|e| SourceError::Open(e.to_string()))
    }
}

impl TableSource for PdfplumberSource {
    fn extract(&self, path: &Path) -> Result<Vec<RawTable>, SourceError> {
        let pdf = self.open(path)?;
        let page_indices = self
            .pages
            .resolve(pdf.page_count())
            .map_err(SourceError::InvalidPages)?;

        let mut tables = Vec::new();
        for idx in page_indices {
            let page_number = idx + 1;
            let page = pdf.page(idx).map_err(|e| SourceError::Page {
                page: page_number,
                message: e.to_string(),
            })?;

            let found = page.find_tables(&self.settings);
            debug!(page = page_number, tables = found.len(), "detected tables");
            tables.extend(found.iter().map(|table| to_raw_table(page_number, table)));
        }

        Ok(tables)
    }
}

/// Copy the cell text of a detected table into a [`RawTable`].
fn to_raw_table(page: usize, table: &Table) -> RawTable {
    let rows = table
        .rows
        .iter()
        .map(|row| row.iter().map(|cell| cell.text.clone()).collect())
        .collect();
    RawTable::from_text_rows(page, rows)
}
