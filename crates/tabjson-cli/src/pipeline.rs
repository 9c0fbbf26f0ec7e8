//! The stdin-to-stdout run: capture, materialize, extract, normalize, print.

use std::io::{self, Read, Write};

use tabjson_core::{
    CoreError, Dataset, MissingValue, RawTable, SourceError, TableSource, normalize_table,
};
use thiserror::Error;
use tracing::{debug, warn};

use crate::input;

/// Exit code for an empty standard input.
pub const EXIT_EMPTY_INPUT: i32 = 1;
/// Exit code for any failure after input capture.
pub const EXIT_FAILURE: i32 = 3;

/// Everything that can end a run early.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("no input on stdin")]
    EmptyInput,

    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("failed to write temporary PDF: {0}")]
    TempFile(#[source] io::Error),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("No tables found in PDF")]
    NoTablesFound,

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("failed to write output: {0}")]
    Stdout(#[source] io::Error),
}

impl PipelineError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            PipelineError::EmptyInput => EXIT_EMPTY_INPUT,
            _ => EXIT_FAILURE,
        }
    }
}

/// What a successful run produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub tables: usize,
    pub rows: usize,
    pub columns: usize,
}

/// Run the whole pipeline.
///
/// Reads all of `reader`, writes it to a temporary file, hands the path to
/// `source`, then prints the normalized dataset as one line of JSON to
/// `writer`. Removal of the temporary file is attempted right after
/// extraction, whether it succeeded or not; a failed removal is logged and
/// does not fail the run. Nothing is written to `writer` unless the whole
/// dataset was built.
pub fn run<R, W>(
    reader: R,
    mut writer: W,
    source: &dyn TableSource,
    missing: &MissingValue,
) -> Result<RunSummary, PipelineError>
where
    R: Read,
    W: Write,
{
    let bytes = input::read_all(reader).map_err(PipelineError::Stdin)?;
    if bytes.is_empty() {
        return Err(PipelineError::EmptyInput);
    }

    let pdf_file = input::materialize(&bytes).map_err(PipelineError::TempFile)?;
    debug!(
        path = %pdf_file.path().display(),
        bytes = bytes.len(),
        "wrote input to temporary file"
    );

    let extracted = source.extract(pdf_file.path());
    if let Err(err) = pdf_file.close() {
        warn!(%err, "failed to remove temporary file");
    }
    let tables = extracted?;

    let table_count = tables.len();
    let dataset = build_dataset(tables)?;
    let json = dataset.to_json(missing)?;

    writeln!(writer, "{json}").map_err(PipelineError::Stdout)?;
    writer.flush().map_err(PipelineError::Stdout)?;

    Ok(RunSummary {
        tables: table_count,
        rows: dataset.len(),
        columns: dataset.columns().len(),
    })
}

/// Normalize, stack and clean every extracted table.
///
/// An empty table list is an error. Tables without any rows are skipped.
pub fn build_dataset(tables: Vec<RawTable>) -> Result<Dataset, PipelineError> {
    if tables.is_empty() {
        return Err(PipelineError::NoTablesFound);
    }

    let mut normalized = Vec::with_capacity(tables.len());
    for table in &tables {
        if table.is_empty() {
            warn!(page = table.page(), "skipping table with no rows");
            continue;
        }
        debug!(
            page = table.page(),
            width = table.width(),
            rows = table.rows().len(),
            "normalizing table"
        );
        normalized.push(normalize_table(table)?);
    }

    let mut dataset = Dataset::concat(normalized);
    dataset.clean();
    Ok(dataset)
}
