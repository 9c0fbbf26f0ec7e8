//! Input capture and temp-file materialization.

use std::io::{self, Read, Write};
use std::path::Path;

use tempfile::NamedTempFile;

/// Read the whole input stream into memory.
pub fn read_all<R: Read>(mut reader: R) -> io::Result<Vec<u8>> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(bytes)
}

/// Write `bytes` to a fresh `.pdf` file in the system temp directory.
///
/// The file is deleted when the returned handle is dropped or closed.
pub fn materialize(bytes: &[u8]) -> io::Result<NamedTempFile> {
    materialize_in(std::env::temp_dir(), bytes)
}

/// Like [`materialize`], but inside `dir`.
pub fn materialize_in(dir: impl AsRef<Path>, bytes: &[u8]) -> io::Result<NamedTempFile> {
    let mut file = tempfile::Builder::new()
        .prefix("tabjson-")
        .suffix(".pdf")
        .tempfile_in(dir)?;
    file.write_all(bytes)?;
    file.flush()?;
    Ok(file)
}
