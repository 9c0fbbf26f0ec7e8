use clap::{Parser, ValueEnum};
use tabjson_core::MissingValue;

use crate::page_range::PageSelection;

/// Read a PDF from standard input, extract every table and print the rows as
/// JSON records.
///
/// The first row of each detected table becomes the column names; all tables
/// are stacked into one array of objects whose values are strings.
#[derive(Debug, Parser)]
#[command(name = "tabjson", about, version)]
pub struct Cli {
    /// Pages to search (e.g. '1,3-5', '2-end'). Default: all pages
    #[arg(long, default_value = "all")]
    pub pages: PageSelection,

    /// Table detection strategy
    #[arg(long, value_enum, default_value_t = TableStrategy::Lattice)]
    pub strategy: TableStrategy,

    /// Password for encrypted PDFs
    #[arg(long)]
    pub password: Option<String>,

    /// Text written for columns a row's table did not have
    #[arg(long, value_name = "TEXT", default_value = "")]
    pub missing_value: String,

    /// Write JSON null instead of text for missing columns
    #[arg(long, conflicts_with = "missing_value")]
    pub missing_null: bool,
}

/// Table detection strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TableStrategy {
    /// Detect tables from ruling lines and rectangle edges
    Lattice,
    /// Detect tables from text alignment (no borders needed)
    Stream,
}

impl TableStrategy {
    /// Convert to the extraction backend's strategy.
    pub fn to_backend(self) -> pdfplumber::Strategy {
        match self {
            TableStrategy::Lattice => pdfplumber::Strategy::Lattice,
            TableStrategy::Stream => pdfplumber::Strategy::Stream,
        }
    }
}

/// Settings for one run, derived from the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub pages: PageSelection,
    pub strategy: TableStrategy,
    pub password: Option<String>,
    pub missing: MissingValue,
}

impl Cli {
    /// Turn parsed arguments into a [`RunConfig`].
    pub fn into_config(self) -> RunConfig {
        let missing = if self.missing_null {
            MissingValue::Null
        } else {
            MissingValue::Text(self.missing_value)
        };
        RunConfig {
            pages: self.pages,
            strategy: self.strategy,
            password: self.password,
            missing,
        }
    }
}
